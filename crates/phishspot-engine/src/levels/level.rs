use serde::{Deserialize, Serialize};

/// A ground-truth indicator for one suspicious spot in an email.
///
/// Level authors write either an explicit token index or a keyword/phrase
/// that is matched case-insensitively against the email text. A JSON
/// ground-truth array may mix both encodings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Indicator {
    Index(usize),
    Phrase(String),
}

/// One complete email scenario plus its scoring ground truth.
///
/// Immutable once loaded; owned by the level catalog. Field names serialize
/// in camelCase to stay compatible with the original level-data JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    pub id: String,
    pub subject: String,
    pub from_name: String,
    pub from_email: String,
    #[serde(default)]
    pub date: Option<String>,
    /// Body paragraphs, each an independent string.
    pub paragraphs: Vec<String>,
    /// Suspicious-spot indicators; may be empty for a clean email.
    #[serde(default)]
    pub ground_truth: Vec<Indicator>,
    /// Whether this email is a phishing attempt. Explicit and independent of
    /// whether `ground_truth` is empty.
    pub is_phishing: bool,
    #[serde(default)]
    pub difficulty: Option<u32>,
}

impl Level {
    /// Full body text used for tokenization: paragraphs joined by blank
    /// lines, matching how the email is rendered.
    pub fn body_text(&self) -> String {
        self.paragraphs.join("\n\n")
    }
}
