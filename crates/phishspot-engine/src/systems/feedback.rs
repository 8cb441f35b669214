//! Transient visual feedback: the pop circle and floating score label
//! shown at the interaction point.
//!
//! Events live on the session clock. `tick` drops everything past its
//! deadline; nothing here touches wall-clock time.

use glam::Vec2;

use crate::api::types::{FeedbackId, FeedbackKind};

/// One active feedback pop. Expires `ttl_ms` after `created_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackEvent {
    pub id: FeedbackId,
    pub pos: Vec2,
    pub kind: FeedbackKind,
    /// Score-delta text shown above the circle, e.g. "+10" or "-5".
    pub label: String,
    pub created_at: f64,
}

impl FeedbackEvent {
    pub fn age_ms(&self, now_ms: f64) -> f64 {
        now_ms - self.created_at
    }
}

/// Container for all active feedback events.
pub struct FeedbackState {
    events: Vec<FeedbackEvent>,
    next_id: u32,
    ttl_ms: f64,
}

impl FeedbackState {
    pub fn new(ttl_ms: f64) -> Self {
        FeedbackState {
            events: Vec::new(),
            next_id: 1,
            ttl_ms,
        }
    }

    /// Add a feedback pop at `pos`. Returns the id assigned to it.
    pub fn spawn(
        &mut self,
        pos: Vec2,
        kind: FeedbackKind,
        label: impl Into<String>,
        now_ms: f64,
    ) -> FeedbackId {
        let id = FeedbackId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.events.push(FeedbackEvent {
            id,
            pos,
            kind,
            label: label.into(),
            created_at: now_ms,
        });
        id
    }

    /// Drop every event that has reached its deadline.
    pub fn tick(&mut self, now_ms: f64) {
        let ttl = self.ttl_ms;
        self.events.retain(|e| e.age_ms(now_ms) < ttl);
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn events(&self) -> &[FeedbackEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawned_event_carries_its_fields() {
        let mut fb = FeedbackState::new(1200.0);
        let id = fb.spawn(Vec2::new(40.0, 60.0), FeedbackKind::Correct, "+10", 0.0);
        assert_eq!(fb.len(), 1);
        let event = &fb.events()[0];
        assert_eq!(event.id, id);
        assert_eq!(event.pos, Vec2::new(40.0, 60.0));
        assert_eq!(event.kind, FeedbackKind::Correct);
        assert_eq!(event.label, "+10");
    }

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut fb = FeedbackState::new(1200.0);
        let a = fb.spawn(Vec2::ZERO, FeedbackKind::Correct, "+10", 0.0);
        let b = fb.spawn(Vec2::ZERO, FeedbackKind::Wrong, "-5", 0.0);
        assert_ne!(a, b);
    }

    #[test]
    fn event_expires_exactly_at_the_ttl() {
        let mut fb = FeedbackState::new(1200.0);
        fb.spawn(Vec2::ZERO, FeedbackKind::Wrong, "-5", 100.0);

        fb.tick(1299.9);
        assert_eq!(fb.len(), 1);
        fb.tick(1300.0);
        assert!(fb.is_empty());
    }

    #[test]
    fn events_expire_independently() {
        let mut fb = FeedbackState::new(1200.0);
        fb.spawn(Vec2::ZERO, FeedbackKind::Correct, "+10", 0.0);
        fb.spawn(Vec2::ZERO, FeedbackKind::Correct, "+10", 500.0);

        fb.tick(1200.0);
        assert_eq!(fb.len(), 1);
        fb.tick(1700.0);
        assert!(fb.is_empty());
    }

    #[test]
    fn clear_drops_everything_at_once() {
        let mut fb = FeedbackState::new(1200.0);
        fb.spawn(Vec2::ZERO, FeedbackKind::Correct, "+10", 0.0);
        fb.spawn(Vec2::ZERO, FeedbackKind::Wrong, "-5", 10.0);
        fb.clear();
        assert!(fb.is_empty());
    }

    #[test]
    fn age_is_measured_on_the_session_clock() {
        let mut fb = FeedbackState::new(1200.0);
        fb.spawn(Vec2::ZERO, FeedbackKind::Correct, "+10", 250.0);
        assert_eq!(fb.events()[0].age_ms(600.0), 350.0);
    }
}
