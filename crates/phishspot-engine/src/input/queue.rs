use crate::api::types::{Mode, Verdict};

/// Player interactions the engine understands.
/// Pointer coordinates are viewport pixels, used to place feedback.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// A token in the email body was clicked (hard mode).
    SelectToken { index: usize, x: f32, y: f32 },
    /// A whole-email verdict button was pressed (easy mode).
    ChooseVerdict { verdict: Verdict, x: f32, y: f32 },
    /// The mode toggle was pressed.
    SetMode { mode: Mode },
    /// The reset button was pressed.
    Reset,
    /// The next-level button was pressed.
    AdvanceLevel,
    /// The mute toggle was pressed.
    ToggleMute,
}

/// A queue of input events.
/// JS writes events into the queue; Rust reads and drains them each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
