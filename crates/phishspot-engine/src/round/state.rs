//! Owned round state, mutated only by committing transition results.

use std::collections::BTreeSet;

use crate::api::types::Mode;

/// Derived lifecycle phase of a round. Running out of lives dominates
/// level completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    InProgress,
    LevelComplete,
    GameOver,
}

/// Everything the scoring rules read and write for the current round.
///
/// `score` and `lives` are unsigned and moved with saturating
/// arithmetic, so both floor at zero without extra clamping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    /// Token indices the player has flagged this round (hard mode).
    pub selected: BTreeSet<usize>,
    pub score: u32,
    pub lives: u32,
    pub max_lives: u32,
    pub mode: Mode,
    /// Set by a judged verdict in easy mode; gates level advance.
    pub level_completed: bool,
    pub level_index: usize,
}

impl RoundState {
    /// A fresh round: full lives, zero score, nothing selected.
    pub fn new(max_lives: u32, mode: Mode, level_index: usize) -> Self {
        RoundState {
            selected: BTreeSet::new(),
            score: 0,
            lives: max_lives,
            max_lives,
            mode,
            level_completed: false,
            level_index,
        }
    }

    pub fn game_over(&self) -> bool {
        self.lives == 0
    }

    pub fn phase(&self) -> RoundPhase {
        if self.game_over() {
            RoundPhase::GameOver
        } else if self.level_completed {
            RoundPhase::LevelComplete
        } else {
            RoundPhase::InProgress
        }
    }
}
