//! Packs a session into the flat f32 wire buffer each frame.

use crate::api::session::GameSession;
use crate::bridge::protocol::{
    FeedbackWire, ProtocolLayout, HEADER_FEEDBACK_COUNT, HEADER_FRAME_COUNTER, HEADER_GAME_OVER,
    HEADER_HAS_NEXT_LEVEL, HEADER_LEVEL_COMPLETED, HEADER_LEVEL_INDEX, HEADER_LIVES,
    HEADER_MAX_LIVES, HEADER_MESSAGE_ACTIVE, HEADER_MODE, HEADER_MUTED, HEADER_PROTOCOL_VERSION,
    HEADER_SCORE, HEADER_SELECTED_COUNT, HEADER_SOUND_COUNT, HEADER_TOKEN_COUNT,
    PROTOCOL_VERSION,
};

/// The wire-side view of a session. `pack` rewrites the whole buffer;
/// JS reads it through the raw pointer between frames.
pub struct StateBuffer {
    layout: ProtocolLayout,
    data: Vec<f32>,
    frame_counter: u32,
}

impl StateBuffer {
    pub fn new(layout: ProtocolLayout) -> Self {
        let data = vec![0.0; layout.buffer_total_floats];
        StateBuffer {
            layout,
            data,
            frame_counter: 0,
        }
    }

    /// Rewrite the buffer from the session's current state.
    pub fn pack(&mut self, session: &GameSession) {
        self.frame_counter = self.frame_counter.wrapping_add(1);
        let state = session.state();
        let now = session.now_ms();

        // Counts are clamped to the section capacities so JS never
        // reads past a section end.
        let token_count = session.tokens().len().min(self.layout.max_tokens);
        let feedback = session.feedback().events();
        let feedback_count = feedback.len().min(self.layout.max_feedback);
        let cues = session.audio().cues();
        let sound_count = cues.len().min(self.layout.max_sounds);

        let header = &mut self.data[..];
        header[HEADER_FRAME_COUNTER] = self.frame_counter as f32;
        header[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        header[HEADER_SCORE] = state.score as f32;
        header[HEADER_LIVES] = state.lives as f32;
        header[HEADER_MAX_LIVES] = state.max_lives as f32;
        header[HEADER_MODE] = state.mode.wire_id() as f32;
        header[HEADER_LEVEL_COMPLETED] = bool_flag(state.level_completed);
        header[HEADER_GAME_OVER] = bool_flag(state.game_over());
        header[HEADER_MUTED] = bool_flag(session.audio().muted());
        header[HEADER_LEVEL_INDEX] = state.level_index as f32;
        header[HEADER_TOKEN_COUNT] = token_count as f32;
        header[HEADER_FEEDBACK_COUNT] = feedback_count as f32;
        header[HEADER_SOUND_COUNT] = sound_count as f32;
        header[HEADER_HAS_NEXT_LEVEL] = bool_flag(session.has_next_level());
        header[HEADER_MESSAGE_ACTIVE] = bool_flag(session.message_text().is_some());

        let selected_start = self.layout.selected_data_offset;
        let selected_end = selected_start + self.layout.selected_data_floats;
        self.data[selected_start..selected_end].fill(0.0);
        let mut selected_count = 0usize;
        for &index in &state.selected {
            if index < self.layout.max_tokens {
                self.data[selected_start + index] = 1.0;
                selected_count += 1;
            }
        }
        self.data[HEADER_SELECTED_COUNT] = selected_count as f32;

        let feedback_start = self.layout.feedback_data_offset;
        for (slot, event) in feedback.iter().take(feedback_count).enumerate() {
            let wire = FeedbackWire::from_event(event, now);
            let floats: [f32; FeedbackWire::FLOATS] = bytemuck::cast(wire);
            let at = feedback_start + slot * FeedbackWire::FLOATS;
            self.data[at..at + FeedbackWire::FLOATS].copy_from_slice(&floats);
        }

        let sound_start = self.layout.sound_data_offset;
        for (slot, cue) in cues.iter().take(sound_count).enumerate() {
            self.data[sound_start + slot] = cue.wire_id() as f32;
        }
    }

    pub fn layout(&self) -> &ProtocolLayout {
        &self.layout
    }

    /// Raw pointer for JS-side reads of the wasm memory.
    pub fn as_ptr(&self) -> *const f32 {
        self.data.as_ptr()
    }

    pub fn total_floats(&self) -> usize {
        self.layout.buffer_total_floats
    }

    #[cfg(test)]
    fn floats(&self) -> &[f32] {
        &self.data
    }
}

fn bool_flag(value: bool) -> f32 {
    if value {
        1.0
    } else {
        0.0
    }
}
