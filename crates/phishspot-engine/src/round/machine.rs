//! Scoring rules as a pure transition function.
//!
//! `apply` never mutates its inputs; it returns the next state plus an
//! outcome tag the session uses to schedule feedback, sounds, and the
//! status message. Rejected interactions return the state unchanged.

use log::debug;

use crate::api::types::{Mode, Verdict};
use crate::levels::truth::GroundTruthSet;
use crate::round::state::RoundState;

/// Points awarded for flagging a true indicator or judging correctly.
pub const HIT_POINTS: u32 = 10;
/// Points removed (floored at zero) for a wrong flag or wrong verdict.
pub const MISS_PENALTY: u32 = 5;

/// One player interaction, stripped down to what the rules care about.
/// Pointer coordinates stay with the session, which spawns feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEvent {
    SelectToken { index: usize },
    ChooseVerdict { verdict: Verdict },
    SetMode { mode: Mode },
    Reset,
    AdvanceLevel,
}

/// What a transition did, for the session to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Invalid interaction; state was returned unchanged.
    Rejected,
    /// Hard mode: the flagged token was a true indicator.
    CorrectFlag,
    /// Hard mode: the flagged token was clean. Costs a life.
    WrongFlag,
    /// Easy mode: the verdict was judged. The round is now completed
    /// whether or not the call was right.
    Verdict { correct: bool },
    ModeChanged,
    ResetDone,
    /// Round-local state cleared and `level_index` bumped. The caller
    /// loads the next level; it must check the catalog has one before
    /// applying this event.
    Advanced,
}

pub fn apply(
    state: &RoundState,
    truth: &GroundTruthSet,
    event: &RoundEvent,
) -> (RoundState, Outcome) {
    match *event {
        RoundEvent::SelectToken { index } => select_token(state, truth, index),
        RoundEvent::ChooseVerdict { verdict } => choose_verdict(state, truth, verdict),
        RoundEvent::SetMode { mode } => set_mode(state, mode),
        RoundEvent::Reset => reset(state),
        RoundEvent::AdvanceLevel => advance(state),
    }
}

fn rejected(state: &RoundState) -> (RoundState, Outcome) {
    (state.clone(), Outcome::Rejected)
}

fn select_token(
    state: &RoundState,
    truth: &GroundTruthSet,
    index: usize,
) -> (RoundState, Outcome) {
    if state.game_over() {
        debug!("select token {index} rejected: game over");
        return rejected(state);
    }
    if state.mode != Mode::Hard {
        debug!("select token {index} rejected: easy mode");
        return rejected(state);
    }
    if index >= truth.token_count() {
        debug!("select token {index} rejected: out of range");
        return rejected(state);
    }
    if state.selected.contains(&index) {
        debug!("select token {index} rejected: already flagged");
        return rejected(state);
    }

    let mut next = state.clone();
    next.selected.insert(index);
    if truth.contains(index) {
        next.score = next.score.saturating_add(HIT_POINTS);
        (next, Outcome::CorrectFlag)
    } else {
        next.lives = next.lives.saturating_sub(1);
        next.score = next.score.saturating_sub(MISS_PENALTY);
        (next, Outcome::WrongFlag)
    }
}

fn choose_verdict(
    state: &RoundState,
    truth: &GroundTruthSet,
    verdict: Verdict,
) -> (RoundState, Outcome) {
    if state.game_over() {
        debug!("verdict rejected: game over");
        return rejected(state);
    }
    if state.mode != Mode::Easy {
        debug!("verdict rejected: hard mode");
        return rejected(state);
    }
    if state.level_completed {
        debug!("verdict rejected: level already judged");
        return rejected(state);
    }

    let correct = (verdict == Verdict::Phishing) == truth.is_phishing();
    let mut next = state.clone();
    if correct {
        next.score = next.score.saturating_add(HIT_POINTS);
    } else {
        next.lives = next.lives.saturating_sub(1);
        next.score = next.score.saturating_sub(MISS_PENALTY);
    }
    // One verdict per level, right or wrong; the advance gate opens.
    next.level_completed = true;
    (next, Outcome::Verdict { correct })
}

fn set_mode(state: &RoundState, mode: Mode) -> (RoundState, Outcome) {
    if state.mode == mode {
        debug!("mode change rejected: already {mode:?}");
        return rejected(state);
    }
    // Switching mid-round keeps score, lives, and partial selections.
    let mut next = state.clone();
    next.mode = mode;
    (next, Outcome::ModeChanged)
}

fn reset(state: &RoundState) -> (RoundState, Outcome) {
    let next = RoundState::new(state.max_lives, state.mode, state.level_index);
    (next, Outcome::ResetDone)
}

fn advance(state: &RoundState) -> (RoundState, Outcome) {
    if !state.level_completed {
        debug!("advance rejected: level not completed");
        return rejected(state);
    }
    // Score and lives carry over; only round-local progress clears.
    let mut next = state.clone();
    next.selected.clear();
    next.level_completed = false;
    next.level_index += 1;
    (next, Outcome::Advanced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tokenizer::tokenize;
    use crate::levels::level::{Indicator, Level};

    fn truth_for(body: &str, indices: &[usize], is_phishing: bool) -> GroundTruthSet {
        let level = Level {
            id: "test".into(),
            subject: "subject".into(),
            from_name: "name".into(),
            from_email: "a@b.example".into(),
            date: None,
            paragraphs: vec![body.to_string()],
            ground_truth: indices.iter().map(|&i| Indicator::Index(i)).collect(),
            is_phishing,
            difficulty: None,
        };
        let tokens = tokenize(body);
        GroundTruthSet::resolve(&level, &tokens)
    }

    // "Hello world" tokenizes to ["Hello", " ", "world"]; index 0 is
    // the only true indicator.
    fn hello_world_truth() -> GroundTruthSet {
        truth_for("Hello world", &[0], true)
    }

    #[test]
    fn correct_flag_scores_without_costing_a_life() {
        let truth = hello_world_truth();
        let state = RoundState::new(5, Mode::Hard, 0);

        let (state, outcome) = apply(&state, &truth, &RoundEvent::SelectToken { index: 0 });
        assert_eq!(outcome, Outcome::CorrectFlag);
        assert_eq!(state.score, 10);
        assert_eq!(state.lives, 5);
        assert!(state.selected.contains(&0));
    }

    #[test]
    fn wrong_flag_costs_a_life_and_five_points() {
        let truth = hello_world_truth();
        let (state, _) = apply(
            &RoundState::new(5, Mode::Hard, 0),
            &truth,
            &RoundEvent::SelectToken { index: 0 },
        );

        let (state, outcome) = apply(&state, &truth, &RoundEvent::SelectToken { index: 2 });
        assert_eq!(outcome, Outcome::WrongFlag);
        assert_eq!(state.score, 5);
        assert_eq!(state.lives, 4);
    }

    #[test]
    fn score_floors_at_zero() {
        let truth = hello_world_truth();
        let state = RoundState::new(5, Mode::Hard, 0);

        let (state, outcome) = apply(&state, &truth, &RoundEvent::SelectToken { index: 1 });
        assert_eq!(outcome, Outcome::WrongFlag);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 4);
    }

    #[test]
    fn reselecting_a_token_is_a_no_op() {
        let truth = hello_world_truth();
        let (state, _) = apply(
            &RoundState::new(5, Mode::Hard, 0),
            &truth,
            &RoundEvent::SelectToken { index: 0 },
        );

        let (after, outcome) = apply(&state, &truth, &RoundEvent::SelectToken { index: 0 });
        assert_eq!(outcome, Outcome::Rejected);
        assert_eq!(after, state);
    }

    #[test]
    fn out_of_range_selection_is_rejected() {
        let truth = hello_world_truth();
        let state = RoundState::new(5, Mode::Hard, 0);
        let (after, outcome) = apply(&state, &truth, &RoundEvent::SelectToken { index: 99 });
        assert_eq!(outcome, Outcome::Rejected);
        assert_eq!(after, state);
    }

    #[test]
    fn selection_is_rejected_in_easy_mode() {
        let truth = hello_world_truth();
        let state = RoundState::new(5, Mode::Easy, 0);
        let (after, outcome) = apply(&state, &truth, &RoundEvent::SelectToken { index: 0 });
        assert_eq!(outcome, Outcome::Rejected);
        assert_eq!(after, state);
    }

    #[test]
    fn last_life_lost_ends_the_round() {
        let truth = hello_world_truth();
        let state = RoundState::new(1, Mode::Hard, 0);

        let (state, outcome) = apply(&state, &truth, &RoundEvent::SelectToken { index: 2 });
        assert_eq!(outcome, Outcome::WrongFlag);
        assert_eq!(state.lives, 0);
        assert!(state.game_over());

        // Terminal: even a would-be correct flag no longer lands.
        let (after, outcome) = apply(&state, &truth, &RoundEvent::SelectToken { index: 0 });
        assert_eq!(outcome, Outcome::Rejected);
        assert_eq!(after, state);
    }

    #[test]
    fn correct_verdict_scores_and_completes_the_level() {
        let truth = hello_world_truth();
        let state = RoundState::new(5, Mode::Easy, 0);

        let (state, outcome) = apply(
            &state,
            &truth,
            &RoundEvent::ChooseVerdict { verdict: Verdict::Phishing },
        );
        assert_eq!(outcome, Outcome::Verdict { correct: true });
        assert_eq!(state.score, 10);
        assert_eq!(state.lives, 5);
        assert!(state.level_completed);
    }

    #[test]
    fn wrong_verdict_still_completes_the_level() {
        let truth = hello_world_truth();
        let state = RoundState::new(5, Mode::Easy, 0);

        let (state, outcome) = apply(
            &state,
            &truth,
            &RoundEvent::ChooseVerdict { verdict: Verdict::Legit },
        );
        assert_eq!(outcome, Outcome::Verdict { correct: false });
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 4);
        assert!(state.level_completed);
    }

    #[test]
    fn second_verdict_is_rejected() {
        let truth = hello_world_truth();
        let (state, _) = apply(
            &RoundState::new(5, Mode::Easy, 0),
            &truth,
            &RoundEvent::ChooseVerdict { verdict: Verdict::Phishing },
        );

        let (after, outcome) = apply(
            &state,
            &truth,
            &RoundEvent::ChooseVerdict { verdict: Verdict::Legit },
        );
        assert_eq!(outcome, Outcome::Rejected);
        assert_eq!(after, state);
    }

    #[test]
    fn verdict_is_rejected_in_hard_mode() {
        let truth = hello_world_truth();
        let state = RoundState::new(5, Mode::Hard, 0);
        let (after, outcome) = apply(
            &state,
            &truth,
            &RoundEvent::ChooseVerdict { verdict: Verdict::Phishing },
        );
        assert_eq!(outcome, Outcome::Rejected);
        assert_eq!(after, state);
    }

    #[test]
    fn legit_level_rewards_the_legit_call() {
        let truth = truth_for("Totally ordinary newsletter", &[], false);
        let state = RoundState::new(5, Mode::Easy, 0);

        let (state, outcome) = apply(
            &state,
            &truth,
            &RoundEvent::ChooseVerdict { verdict: Verdict::Legit },
        );
        assert_eq!(outcome, Outcome::Verdict { correct: true });
        assert_eq!(state.score, 10);
    }

    #[test]
    fn legit_level_punishes_the_phishing_call() {
        let truth = truth_for("Totally ordinary newsletter", &[], false);
        let state = RoundState::new(5, Mode::Easy, 0);

        let (state, outcome) = apply(
            &state,
            &truth,
            &RoundEvent::ChooseVerdict { verdict: Verdict::Phishing },
        );
        assert_eq!(outcome, Outcome::Verdict { correct: false });
        assert_eq!(state.lives, 4);
    }

    #[test]
    fn mode_switch_preserves_round_progress() {
        let truth = hello_world_truth();
        let (state, _) = apply(
            &RoundState::new(5, Mode::Hard, 0),
            &truth,
            &RoundEvent::SelectToken { index: 0 },
        );
        let (state, _) = apply(&state, &truth, &RoundEvent::SelectToken { index: 2 });

        let (state, outcome) = apply(&state, &truth, &RoundEvent::SetMode { mode: Mode::Easy });
        assert_eq!(outcome, Outcome::ModeChanged);
        assert_eq!(state.mode, Mode::Easy);
        assert_eq!(state.score, 5);
        assert_eq!(state.lives, 4);
        assert_eq!(state.selected.len(), 2);
    }

    #[test]
    fn switching_to_the_current_mode_is_rejected() {
        let truth = hello_world_truth();
        let state = RoundState::new(5, Mode::Hard, 0);
        let (after, outcome) = apply(&state, &truth, &RoundEvent::SetMode { mode: Mode::Hard });
        assert_eq!(outcome, Outcome::Rejected);
        assert_eq!(after, state);
    }

    #[test]
    fn reset_restores_a_fresh_round_in_place() {
        let truth = hello_world_truth();
        let mut state = RoundState::new(2, Mode::Hard, 3);
        // Burn both lives.
        let (next, _) = apply(&state, &truth, &RoundEvent::SelectToken { index: 1 });
        state = next;
        let (next, _) = apply(&state, &truth, &RoundEvent::SelectToken { index: 2 });
        state = next;
        assert!(state.game_over());

        let (state, outcome) = apply(&state, &truth, &RoundEvent::Reset);
        assert_eq!(outcome, Outcome::ResetDone);
        assert_eq!(state.lives, 2);
        assert_eq!(state.score, 0);
        assert!(state.selected.is_empty());
        assert!(!state.level_completed);
        // Mode and level stay where they were.
        assert_eq!(state.mode, Mode::Hard);
        assert_eq!(state.level_index, 3);
    }

    #[test]
    fn advance_requires_a_completed_level() {
        let truth = hello_world_truth();
        let state = RoundState::new(5, Mode::Easy, 0);
        let (after, outcome) = apply(&state, &truth, &RoundEvent::AdvanceLevel);
        assert_eq!(outcome, Outcome::Rejected);
        assert_eq!(after.level_index, 0);
    }

    #[test]
    fn advance_carries_score_and_lives_forward() {
        let truth = hello_world_truth();
        let (state, _) = apply(
            &RoundState::new(5, Mode::Easy, 0),
            &truth,
            &RoundEvent::ChooseVerdict { verdict: Verdict::Phishing },
        );

        let (state, outcome) = apply(&state, &truth, &RoundEvent::AdvanceLevel);
        assert_eq!(outcome, Outcome::Advanced);
        assert_eq!(state.level_index, 1);
        assert_eq!(state.score, 10);
        assert_eq!(state.lives, 5);
        assert!(state.selected.is_empty());
        assert!(!state.level_completed);
    }
}
