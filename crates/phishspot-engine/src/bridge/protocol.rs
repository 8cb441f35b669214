/// Flat f32 state buffer layout.
/// Must stay in sync with TypeScript `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Selected flags: max_tokens × 1 float]
/// [Feedback: max_feedback × 5 floats]
/// [Sounds: max_sounds × 1 float]
/// ```
///
/// Capacities are written once into the header at init.
/// TypeScript reads them from the header to compute offsets dynamically.
/// Level content and tokens do not cross here; they travel as JSON once
/// per level.

use bytemuck::{Pod, Zeroable};

use crate::api::session::SessionConfig;
use crate::systems::feedback::FeedbackEvent;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_FRAME_COUNTER: usize = 0;
pub const HEADER_PROTOCOL_VERSION: usize = 1;
pub const HEADER_SCORE: usize = 2;
pub const HEADER_LIVES: usize = 3;
pub const HEADER_MAX_LIVES: usize = 4;
pub const HEADER_MODE: usize = 5;
pub const HEADER_LEVEL_COMPLETED: usize = 6;
pub const HEADER_GAME_OVER: usize = 7;
pub const HEADER_MUTED: usize = 8;
pub const HEADER_LEVEL_INDEX: usize = 9;
pub const HEADER_TOKEN_COUNT: usize = 10;
pub const HEADER_SELECTED_COUNT: usize = 11;
pub const HEADER_FEEDBACK_COUNT: usize = 12;
pub const HEADER_SOUND_COUNT: usize = 13;
pub const HEADER_HAS_NEXT_LEVEL: usize = 14;
pub const HEADER_MESSAGE_ACTIVE: usize = 15;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// One feedback pop on the wire: id, kind, x, y, age-ms.
/// 5 floats = 20 bytes stride (wire format — never changes).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct FeedbackWire {
    pub id: f32,
    /// 0 = correct, 1 = wrong.
    pub kind: f32,
    pub x: f32,
    pub y: f32,
    pub age_ms: f32,
}

impl FeedbackWire {
    pub const FLOATS: usize = 5;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn from_event(event: &FeedbackEvent, now_ms: f64) -> Self {
        FeedbackWire {
            id: event.id.0 as f32,
            kind: event.kind.wire_id() as f32,
            x: event.pos.x,
            y: event.pos.y,
            age_ms: event.age_ms(now_ms) as f32,
        }
    }
}

/// Runtime-computed buffer layout derived from session capacities.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum tokens per level on the wire.
    pub max_tokens: usize,
    /// Maximum concurrent feedback events.
    pub max_feedback: usize,
    /// Maximum sound cues per frame.
    pub max_sounds: usize,

    /// Size of the selected-flags section in floats.
    pub selected_data_floats: usize,
    /// Size of the feedback section in floats.
    pub feedback_data_floats: usize,
    /// Size of the sound section in floats.
    pub sound_data_floats: usize,

    /// Offset (in floats) where the selected flags begin.
    pub selected_data_offset: usize,
    /// Offset (in floats) where feedback data begins.
    pub feedback_data_offset: usize,
    /// Offset (in floats) where sound data begins.
    pub sound_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_tokens: usize, max_feedback: usize, max_sounds: usize) -> Self {
        let selected_data_floats = max_tokens;
        let feedback_data_floats = max_feedback * FeedbackWire::FLOATS;
        let sound_data_floats = max_sounds;

        let selected_data_offset = HEADER_FLOATS;
        let feedback_data_offset = selected_data_offset + selected_data_floats;
        let sound_data_offset = feedback_data_offset + feedback_data_floats;

        let buffer_total_floats = sound_data_offset + sound_data_floats;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_tokens,
            max_feedback,
            max_sounds,
            selected_data_floats,
            feedback_data_floats,
            sound_data_floats,
            selected_data_offset,
            feedback_data_offset,
            sound_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Compute layout from a SessionConfig.
    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.max_tokens, config.max_feedback, config.max_sounds)
    }
}
