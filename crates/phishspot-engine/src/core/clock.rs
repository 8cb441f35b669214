/// Session clock, advanced once per frame by the runner.
///
/// Every timed behavior in the engine (feedback expiry, status-message
/// clearing) compares deadlines against this clock, never against wall-clock
/// time, so expiry logic is testable without waiting.
#[derive(Debug, Clone)]
pub struct SessionClock {
    now_ms: f64,
}

impl SessionClock {
    pub fn new() -> Self {
        Self { now_ms: 0.0 }
    }

    /// Current session time in milliseconds since construction.
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Add frame time. Negative deltas are ignored so a misbehaving host
    /// clock can never rewind scheduled expirations.
    pub fn advance(&mut self, dt_ms: f64) {
        self.now_ms += dt_ms.max(0.0);
    }
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::new()
    }
}
