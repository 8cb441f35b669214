//! Resolves level ground truth against a token stream.
//!
//! Authors write indicators either as raw token indices or as keyword
//! phrases. Phrases are matched case-insensitively against the word
//! tokens and each occurrence contributes the index of its first token.

use std::collections::BTreeSet;

use crate::core::tokenizer::Token;
use crate::levels::level::{Indicator, Level};

/// The set of token indices a player is expected to flag, plus the
/// level's verdict answer. Built once per round from the level data.
#[derive(Debug, Clone)]
pub struct GroundTruthSet {
    indices: BTreeSet<usize>,
    is_phishing: bool,
    token_count: usize,
}

impl GroundTruthSet {
    /// Resolves every indicator of `level` against `tokens`.
    ///
    /// Out-of-range indices and phrases with no occurrence are dropped
    /// silently. Bad authoring data must not take down a round.
    pub fn resolve(level: &Level, tokens: &[Token]) -> Self {
        let mut indices = BTreeSet::new();
        for indicator in &level.ground_truth {
            match indicator {
                Indicator::Index(i) => {
                    if *i < tokens.len() {
                        indices.insert(*i);
                    }
                }
                Indicator::Phrase(phrase) => match_phrase(phrase, tokens, &mut indices),
            }
        }
        GroundTruthSet {
            indices,
            is_phishing: level.is_phishing,
            token_count: tokens.len(),
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn is_phishing(&self) -> bool {
        self.is_phishing
    }

    pub fn token_count(&self) -> usize {
        self.token_count
    }
}

/// Finds every occurrence of `phrase` in the lowercased, space-joined
/// word tokens and records the index of the token each occurrence
/// starts in.
fn match_phrase(phrase: &str, tokens: &[Token], out: &mut BTreeSet<usize>) {
    let needle = phrase.trim().to_lowercase();
    if needle.is_empty() {
        return;
    }

    // Join the word tokens with single spaces so phrases can span token
    // boundaries without gluing adjacent words together. `starts` maps
    // each token's haystack offset back to its index in the full stream.
    let mut haystack = String::new();
    let mut starts: Vec<(usize, usize)> = Vec::new();
    for token in tokens.iter().filter(|t| !t.is_whitespace) {
        if !haystack.is_empty() {
            haystack.push(' ');
        }
        starts.push((haystack.len(), token.index));
        haystack.push_str(&token.text.to_lowercase());
    }

    let mut from = 0;
    while let Some(found) = haystack[from..].find(&needle) {
        let at = from + found;
        let slot = match starts.binary_search_by_key(&at, |&(offset, _)| offset) {
            Ok(i) => i,
            // `starts[0]` sits at offset 0, so a miss always has a
            // predecessor: the token whose text contains `at`.
            Err(i) => i - 1,
        };
        out.insert(starts[slot].1);
        from = at + needle.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tokenizer::tokenize;

    fn level_with(ground_truth: Vec<Indicator>, body: &str) -> Level {
        Level {
            id: "test".into(),
            subject: "subject".into(),
            from_name: "name".into(),
            from_email: "a@b.example".into(),
            date: None,
            paragraphs: vec![body.to_string()],
            ground_truth,
            is_phishing: true,
            difficulty: None,
        }
    }

    #[test]
    fn index_indicators_pass_through() {
        let level = level_with(vec![Indicator::Index(0), Indicator::Index(2)], "one two three");
        let tokens = tokenize(&level.body_text());
        let truth = GroundTruthSet::resolve(&level, &tokens);
        assert!(truth.contains(0));
        assert!(truth.contains(2));
        assert_eq!(truth.len(), 2);
    }

    #[test]
    fn out_of_range_index_is_dropped() {
        let level = level_with(vec![Indicator::Index(99)], "short text");
        let tokens = tokenize(&level.body_text());
        let truth = GroundTruthSet::resolve(&level, &tokens);
        assert!(truth.is_empty());
        assert_eq!(truth.token_count(), tokens.len());
    }

    #[test]
    fn phrase_match_is_case_insensitive() {
        let level = level_with(
            vec![Indicator::Phrase("URGENT action".into())],
            "Take urgent ACTION now",
        );
        let tokens = tokenize(&level.body_text());
        let truth = GroundTruthSet::resolve(&level, &tokens);
        // "urgent" is token index 2 (after "Take" and a space).
        assert!(truth.contains(2));
        assert_eq!(truth.len(), 1);
    }

    #[test]
    fn multi_word_phrase_flags_its_first_token() {
        let level = level_with(
            vec![Indicator::Phrase("verify your identity".into())],
            "Please verify your identity today",
        );
        let tokens = tokenize(&level.body_text());
        let truth = GroundTruthSet::resolve(&level, &tokens);
        let verify = tokens
            .iter()
            .find(|t| t.text == "verify")
            .map(|t| t.index)
            .unwrap();
        assert_eq!(truth.indices().collect::<Vec<_>>(), vec![verify]);
    }

    #[test]
    fn every_occurrence_is_flagged() {
        let level = level_with(
            vec![Indicator::Phrase("free".into())],
            "free money, FREE prizes, and free trips",
        );
        let tokens = tokenize(&level.body_text());
        let truth = GroundTruthSet::resolve(&level, &tokens);
        assert_eq!(truth.len(), 3);
    }

    #[test]
    fn phrase_inside_a_url_token_flags_the_url() {
        let level = level_with(
            vec![Indicator::Phrase("secure-login.example.com".into())],
            "Click https://secure-login.example.com/reset now",
        );
        let tokens = tokenize(&level.body_text());
        let truth = GroundTruthSet::resolve(&level, &tokens);
        let url = tokens
            .iter()
            .find(|t| t.is_url())
            .map(|t| t.index)
            .unwrap();
        assert!(truth.contains(url));
    }

    #[test]
    fn phrase_does_not_glue_adjacent_tokens_together() {
        // "biz tech" must not match the needle "biztech".
        let level = level_with(vec![Indicator::Phrase("biztech".into())], "the biz tech team");
        let tokens = tokenize(&level.body_text());
        let truth = GroundTruthSet::resolve(&level, &tokens);
        assert!(truth.is_empty());
    }

    #[test]
    fn unmatched_phrase_is_dropped() {
        let level = level_with(vec![Indicator::Phrase("absent".into())], "present words only");
        let tokens = tokenize(&level.body_text());
        let truth = GroundTruthSet::resolve(&level, &tokens);
        assert!(truth.is_empty());
    }

    #[test]
    fn blank_phrase_is_ignored() {
        let level = level_with(vec![Indicator::Phrase("   ".into())], "some text");
        let tokens = tokenize(&level.body_text());
        let truth = GroundTruthSet::resolve(&level, &tokens);
        assert!(truth.is_empty());
    }

    #[test]
    fn resolution_is_deterministic() {
        let level = level_with(
            vec![Indicator::Index(0), Indicator::Phrase("unusual activity".into())],
            "Spotted unusual activity on your account",
        );
        let tokens = tokenize(&level.body_text());
        let first = GroundTruthSet::resolve(&level, &tokens);
        let second = GroundTruthSet::resolve(&level, &tokens);
        assert_eq!(
            first.indices().collect::<Vec<_>>(),
            second.indices().collect::<Vec<_>>()
        );
        assert_eq!(first.token_count(), second.token_count());
    }

    #[test]
    fn verdict_answer_comes_from_the_level() {
        let mut level = level_with(vec![], "plain text");
        level.is_phishing = false;
        let tokens = tokenize(&level.body_text());
        let truth = GroundTruthSet::resolve(&level, &tokens);
        assert!(!truth.is_phishing());
    }
}
