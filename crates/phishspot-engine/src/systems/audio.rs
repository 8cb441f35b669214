//! Sound cue queue and mute state.
//!
//! The engine never plays audio; it queues cues that the presentation
//! layer drains once per frame and maps to actual playback.

use log::debug;

use crate::api::types::SoundCue;

pub struct AudioDirector {
    cues: Vec<SoundCue>,
    muted: bool,
    game_over_latched: bool,
    max_cues: usize,
}

impl AudioDirector {
    pub fn new(max_cues: usize) -> Self {
        AudioDirector {
            cues: Vec::with_capacity(max_cues),
            muted: false,
            game_over_latched: false,
            max_cues,
        }
    }

    /// Queue a cue for this frame. Swallowed while muted.
    pub fn play(&mut self, cue: SoundCue) {
        if self.muted {
            return;
        }
        if self.cues.len() >= self.max_cues {
            debug!("sound cue {cue:?} dropped: frame queue full");
            return;
        }
        self.cues.push(cue);
    }

    /// Queue the game-over cue at most once per depletion. The latch is
    /// consumed even while muted, so unmuting afterwards does not play
    /// a stale jingle; only `rearm` (reset) makes it fire again.
    pub fn game_over_once(&mut self) {
        if self.game_over_latched {
            return;
        }
        self.game_over_latched = true;
        self.play(SoundCue::GameOver);
    }

    pub fn rearm(&mut self) {
        self.game_over_latched = false;
    }

    /// Reset-time cleanup: drop queued cues and re-arm the latch. The
    /// mute flag is left alone.
    pub fn reset(&mut self) {
        self.cues.clear();
        self.game_over_latched = false;
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    /// Drop cues queued last frame. Called at the top of every frame.
    pub fn begin_frame(&mut self) {
        self.cues.clear();
    }

    pub fn cues(&self) -> &[SoundCue] {
        &self.cues
    }
}
