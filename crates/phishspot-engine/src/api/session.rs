//! The game session: one player, one catalog, one round at a time.
//!
//! `GameSession` owns every subsystem and is the only place state
//! transitions are committed. The runner drives it per frame:
//! `begin_frame` → `handle` for each queued input → `tick`.

use glam::Vec2;
use log::{debug, info};
use serde::Serialize;

use crate::api::types::{FeedbackKind, Mode, SoundCue};
use crate::core::clock::SessionClock;
use crate::core::tokenizer::{tokenize, Token};
use crate::input::queue::InputEvent;
use crate::levels::catalog::LevelCatalog;
use crate::levels::level::Level;
use crate::levels::truth::GroundTruthSet;
use crate::round::machine::{apply, Outcome, RoundEvent, HIT_POINTS, MISS_PENALTY};
use crate::round::state::RoundState;
use crate::systems::audio::AudioDirector;
use crate::systems::feedback::FeedbackState;
use crate::systems::message::MessageState;

/// Configuration for a session, provided by the embedding layer.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Lives at the start of a round (default: 5).
    pub max_lives: u32,
    /// Feedback pop lifetime in milliseconds (default: 1200).
    pub feedback_ttl_ms: f64,
    /// Status message lifetime in milliseconds (default: 1200).
    pub message_ttl_ms: f64,
    /// Maximum tokens the wire buffer carries per level (default: 512).
    pub max_tokens: usize,
    /// Maximum concurrent feedback events on the wire (default: 32).
    pub max_feedback: usize,
    /// Maximum sound cues per frame (default: 8).
    pub max_sounds: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_lives: 5,
            feedback_ttl_ms: 1200.0,
            message_ttl_ms: 1200.0,
            max_tokens: 512,
            max_feedback: 32,
            max_sounds: 8,
        }
    }
}

/// Read-only state for the presentation layer, refreshed every frame.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSnapshot {
    pub score: u32,
    pub lives: u32,
    pub max_lives: u32,
    pub mode: Mode,
    pub level_completed: bool,
    pub game_over: bool,
    pub level_index: usize,
    pub has_next_level: bool,
    pub muted: bool,
    pub selected: Vec<usize>,
    pub message: Option<String>,
}

/// Per-round tally of the player's annotations against ground truth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationReport {
    /// Flagged tokens that are true indicators.
    pub hits: Vec<usize>,
    /// Flagged tokens that are clean.
    pub false_alarms: Vec<usize>,
    /// True indicators the player never flagged.
    pub missed: Vec<usize>,
}

/// Level content and its token stream, fetched by the UI once per
/// level as JSON rather than crossing the flat state buffer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelPayload<'a> {
    pub level: &'a Level,
    pub tokens: &'a [Token],
    pub level_index: usize,
    pub level_count: usize,
}

pub struct GameSession {
    config: SessionConfig,
    catalog: LevelCatalog,
    tokens: Vec<Token>,
    truth: GroundTruthSet,
    state: RoundState,
    feedback: FeedbackState,
    message: MessageState,
    audio: AudioDirector,
    clock: SessionClock,
}

impl GameSession {
    /// Session over the built-in level catalog.
    pub fn new(config: SessionConfig) -> Self {
        Self::with_catalog(config, LevelCatalog::builtin())
    }

    pub fn with_catalog(config: SessionConfig, catalog: LevelCatalog) -> Self {
        let level = catalog.current();
        let tokens = tokenize(&level.body_text());
        let truth = GroundTruthSet::resolve(level, &tokens);
        info!(
            "session started on level {} ({}): {} tokens, {} indicators",
            catalog.level_index(),
            level.id,
            tokens.len(),
            truth.len()
        );

        let state = RoundState::new(config.max_lives, Mode::default(), catalog.level_index());
        let feedback = FeedbackState::new(config.feedback_ttl_ms);
        let message = MessageState::new(config.message_ttl_ms);
        let audio = AudioDirector::new(config.max_sounds);

        GameSession {
            config,
            catalog,
            tokens,
            truth,
            state,
            feedback,
            message,
            audio,
            clock: SessionClock::new(),
        }
    }

    /// Clear per-frame transients. Call at the top of every frame,
    /// before handling input.
    pub fn begin_frame(&mut self) {
        self.audio.begin_frame();
    }

    /// Process one interaction synchronously.
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::SelectToken { index, x, y } => {
                self.apply_round_event(RoundEvent::SelectToken { index }, Vec2::new(x, y));
            }
            InputEvent::ChooseVerdict { verdict, x, y } => {
                self.apply_round_event(RoundEvent::ChooseVerdict { verdict }, Vec2::new(x, y));
            }
            InputEvent::SetMode { mode } => {
                self.apply_round_event(RoundEvent::SetMode { mode }, Vec2::ZERO);
            }
            InputEvent::Reset => {
                self.apply_round_event(RoundEvent::Reset, Vec2::ZERO);
            }
            InputEvent::AdvanceLevel => self.advance_level(),
            InputEvent::ToggleMute => {
                let muted = self.audio.toggle_mute();
                info!("audio {}", if muted { "muted" } else { "unmuted" });
            }
        }
    }

    /// Advance the session clock and expire timed transients.
    pub fn tick(&mut self, dt_ms: f64) {
        self.clock.advance(dt_ms);
        let now = self.clock.now_ms();
        self.feedback.tick(now);
        self.message.tick(now);
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            score: self.state.score,
            lives: self.state.lives,
            max_lives: self.state.max_lives,
            mode: self.state.mode,
            level_completed: self.state.level_completed,
            game_over: self.state.game_over(),
            level_index: self.state.level_index,
            has_next_level: self.catalog.has_next(),
            muted: self.audio.muted(),
            selected: self.state.selected.iter().copied().collect(),
            message: self.message.text().map(str::to_owned),
        }
    }

    /// Tally the current selections against ground truth.
    pub fn report(&self) -> AnnotationReport {
        let mut hits = Vec::new();
        let mut false_alarms = Vec::new();
        for &index in &self.state.selected {
            if self.truth.contains(index) {
                hits.push(index);
            } else {
                false_alarms.push(index);
            }
        }
        let missed = self
            .truth
            .indices()
            .filter(|i| !self.state.selected.contains(i))
            .collect();
        AnnotationReport {
            hits,
            false_alarms,
            missed,
        }
    }

    pub fn level_payload(&self) -> LevelPayload<'_> {
        LevelPayload {
            level: self.catalog.current(),
            tokens: &self.tokens,
            level_index: self.catalog.level_index(),
            level_count: self.catalog.len(),
        }
    }

    /// The level payload serialized for the UI.
    pub fn level_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.level_payload())
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn level(&self) -> &Level {
        self.catalog.current()
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn feedback(&self) -> &FeedbackState {
        &self.feedback
    }

    pub fn audio(&self) -> &AudioDirector {
        &self.audio
    }

    pub fn message_text(&self) -> Option<&str> {
        self.message.text()
    }

    pub fn has_next_level(&self) -> bool {
        self.catalog.has_next()
    }

    pub fn now_ms(&self) -> f64 {
        self.clock.now_ms()
    }

    fn apply_round_event(&mut self, event: RoundEvent, pos: Vec2) {
        let was_game_over = self.state.game_over();
        let (next, outcome) = apply(&self.state, &self.truth, &event);
        self.state = next;
        let now = self.clock.now_ms();

        match outcome {
            Outcome::Rejected => {}
            Outcome::CorrectFlag => {
                self.feedback
                    .spawn(pos, FeedbackKind::Correct, format!("+{HIT_POINTS}"), now);
                self.message
                    .show(format!("Suspicious spot found! +{HIT_POINTS}"), now);
                self.audio.play(SoundCue::Correct);
            }
            Outcome::WrongFlag => {
                self.feedback
                    .spawn(pos, FeedbackKind::Wrong, format!("-{MISS_PENALTY}"), now);
                self.message
                    .show(format!("Wrong click: -1 life, -{MISS_PENALTY} points"), now);
                self.audio.play(SoundCue::Wrong);
            }
            Outcome::Verdict { correct } => {
                if correct {
                    self.feedback
                        .spawn(pos, FeedbackKind::Correct, format!("+{HIT_POINTS}"), now);
                    self.message
                        .show(format!("Correct call! +{HIT_POINTS}"), now);
                    self.audio.play(SoundCue::Correct);
                } else {
                    self.feedback
                        .spawn(pos, FeedbackKind::Wrong, format!("-{MISS_PENALTY}"), now);
                    self.message
                        .show(format!("Wrong call: -1 life, -{MISS_PENALTY} points"), now);
                    self.audio.play(SoundCue::Wrong);
                }
            }
            Outcome::ModeChanged => {
                info!("mode switched to {:?}", self.state.mode);
            }
            Outcome::ResetDone => {
                self.feedback.clear();
                self.message.clear();
                self.audio.reset();
                info!("round reset on level {}", self.state.level_index);
            }
            // Advance goes through advance_level, never through here.
            Outcome::Advanced => {}
        }

        if self.state.game_over() {
            if !was_game_over {
                info!("game over at score {}", self.state.score);
            }
            self.audio.game_over_once();
        }
    }

    fn advance_level(&mut self) {
        if !self.catalog.has_next() {
            debug!("advance rejected: no next level");
            return;
        }
        let (next, outcome) = apply(&self.state, &self.truth, &RoundEvent::AdvanceLevel);
        if outcome != Outcome::Advanced {
            return;
        }
        self.state = next;
        self.catalog.advance();
        self.load_current_level();
    }

    fn load_current_level(&mut self) {
        let level = self.catalog.current();
        self.tokens = tokenize(&level.body_text());
        self.truth = GroundTruthSet::resolve(level, &self.tokens);
        info!(
            "level {} ({}) loaded: {} tokens, {} indicators",
            self.catalog.level_index(),
            level.id,
            self.tokens.len(),
            self.truth.len()
        );
        self.feedback.clear();
        self.message.clear();
    }
}
