//! Single-slot HUD status message with its deadline stored on the
//! message itself. Replacing or clearing the message kills the old
//! deadline with it, so an earlier message can never blank out a newer
//! one.

/// The active status line and when it disappears.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub expires_at: f64,
}

pub struct MessageState {
    current: Option<StatusMessage>,
    ttl_ms: f64,
}

impl MessageState {
    pub fn new(ttl_ms: f64) -> Self {
        MessageState {
            current: None,
            ttl_ms,
        }
    }

    /// Show `text`, replacing whatever was on screen. The new message
    /// gets a fresh deadline.
    pub fn show(&mut self, text: impl Into<String>, now_ms: f64) {
        self.current = Some(StatusMessage {
            text: text.into(),
            expires_at: now_ms + self.ttl_ms,
        });
    }

    /// Drop the message once its deadline passes.
    pub fn tick(&mut self, now_ms: f64) {
        if let Some(message) = &self.current {
            if now_ms >= message.expires_at {
                self.current = None;
            }
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn text(&self) -> Option<&str> {
        self.current.as_ref().map(|m| m.text.as_str())
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }
}
