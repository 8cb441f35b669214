//! Email body tokenization.
//!
//! Splits raw text into an ordered sequence of addressable tokens: words,
//! whitespace runs, and URLs. Concatenating the tokens in order reproduces
//! the input exactly, so the presentation layer can render the email without
//! losing layout.

use serde::{Deserialize, Serialize};

/// Smallest addressable unit of rendered email text.
///
/// `index` is the token's position in the sequence produced by [`tokenize`],
/// not a character offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub index: usize,
    pub text: String,
    pub is_whitespace: bool,
}

impl Token {
    /// Whether this token looks like a URL (scheme + non-whitespace run).
    pub fn is_url(&self) -> bool {
        self.text.starts_with("http://") || self.text.starts_with("https://")
    }
}

/// Split `text` into tokens at whitespace boundaries.
///
/// Runs of whitespace become tokens of their own so the round-trip invariant
/// holds: `tokenize(s)` concatenated in order is exactly `s`. URL-shaped
/// substrings never contain whitespace, so they always land in a single
/// token. Deterministic and pure; empty input yields an empty sequence.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut run_is_ws: Option<bool> = None;

    for (offset, ch) in text.char_indices() {
        let ws = ch.is_whitespace();
        match run_is_ws {
            None => run_is_ws = Some(ws),
            Some(current) if current != ws => {
                tokens.push(Token {
                    index: tokens.len(),
                    text: text[start..offset].to_string(),
                    is_whitespace: current,
                });
                start = offset;
                run_is_ws = Some(ws);
            }
            Some(_) => {}
        }
    }

    if let Some(ws) = run_is_ws {
        tokens.push(Token {
            index: tokens.len(),
            text: text[start..].to_string(),
            is_whitespace: ws,
        });
    }

    tokens
}
