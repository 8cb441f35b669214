pub mod api;
pub mod bridge;
pub mod core;
pub mod input;
pub mod levels;
pub mod round;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::session::{
    AnnotationReport, GameSession, LevelPayload, RoundSnapshot, SessionConfig,
};
pub use api::types::{FeedbackId, FeedbackKind, Mode, SoundCue, Verdict};
pub use bridge::buffer::StateBuffer;
pub use bridge::protocol::{FeedbackWire, ProtocolLayout, HEADER_FLOATS, PROTOCOL_VERSION};
pub use crate::core::clock::SessionClock;
pub use crate::core::tokenizer::{tokenize, Token};
pub use input::queue::{InputEvent, InputQueue};
pub use levels::builtin::builtin_levels;
pub use levels::catalog::LevelCatalog;
pub use levels::level::{Indicator, Level};
pub use levels::truth::GroundTruthSet;
pub use round::machine::{apply, Outcome, RoundEvent, HIT_POINTS, MISS_PENALTY};
pub use round::state::{RoundPhase, RoundState};
pub use systems::audio::AudioDirector;
pub use systems::feedback::{FeedbackEvent, FeedbackState};
pub use systems::message::{MessageState, StatusMessage};
