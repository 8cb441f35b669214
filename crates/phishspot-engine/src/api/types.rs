use serde::{Deserialize, Serialize};

/// Gameplay mode.
///
/// Hard mode scores individual token clicks; easy mode takes a single
/// phishing/legitimate verdict for the whole email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Easy,
    Hard,
}

impl Mode {
    /// Numeric id used in the wire protocol header.
    pub fn wire_id(self) -> u32 {
        match self {
            Mode::Easy => 0,
            Mode::Hard => 1,
        }
    }

    /// Inverse of [`Mode::wire_id`]. Unknown ids fall back to hard mode.
    pub fn from_wire_id(id: u32) -> Self {
        match id {
            0 => Mode::Easy,
            _ => Mode::Hard,
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Hard
    }
}

/// Whole-email verdict issued in easy mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Phishing,
    Legit,
}

impl Verdict {
    /// Numeric id used by the wasm bridge.
    pub fn wire_id(self) -> u32 {
        match self {
            Verdict::Phishing => 0,
            Verdict::Legit => 1,
        }
    }

    /// Inverse of [`Verdict::wire_id`]. Unknown ids read as legit.
    pub fn from_wire_id(id: u32) -> Self {
        match id {
            0 => Verdict::Phishing,
            _ => Verdict::Legit,
        }
    }
}

/// Unique identifier for a feedback event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FeedbackId(pub u32);

/// Visual flavor of a feedback event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Correct,
    Wrong,
}

impl FeedbackKind {
    /// Numeric id used in the wire protocol feedback section.
    pub fn wire_id(self) -> u32 {
        match self {
            FeedbackKind::Correct => 0,
            FeedbackKind::Wrong => 1,
        }
    }
}

/// A sound cue emitted by the game logic.
/// The numeric value maps to an audio asset in the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Correct,
    Wrong,
    GameOver,
}

impl SoundCue {
    /// Numeric id used in the wire protocol sound section.
    pub fn wire_id(self) -> u32 {
        match self {
            SoundCue::Correct => 1,
            SoundCue::Wrong => 2,
            SoundCue::GameOver => 3,
        }
    }
}
