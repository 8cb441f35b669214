use phishspot_engine::{
    GameSession, InputEvent, InputQueue, LevelCatalog, ProtocolLayout, SessionConfig, StateBuffer,
};

/// Drives the session frame loop and owns the wire buffer.
///
/// JS pushes input between frames; `tick` clears per-frame transients,
/// drains the queue in delivery order, advances the session clock, and
/// repacks the state buffer for the reader side.
pub struct SessionRunner {
    session: GameSession,
    input: InputQueue,
    buffer: StateBuffer,
}

impl SessionRunner {
    pub fn new() -> Self {
        let config = SessionConfig::default();
        let layout = ProtocolLayout::from_config(&config);
        let mut runner = Self {
            session: GameSession::new(config),
            input: InputQueue::new(),
            buffer: StateBuffer::new(layout),
        };
        // Pack once so the buffer is valid before the first tick.
        runner.buffer.pack(&runner.session);
        runner
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame tick.
    pub fn tick(&mut self, dt_ms: f64) {
        self.session.begin_frame();
        for event in self.input.drain() {
            self.session.handle(event);
        }
        self.session.tick(dt_ms);
        self.buffer.pack(&self.session);
    }

    /// Replace the level catalog, restarting the session on its first
    /// level. A rejected catalog leaves the current session running.
    pub fn load_levels(&mut self, json: &str) {
        match LevelCatalog::from_json(json) {
            Ok(catalog) => {
                let config = self.session.config().clone();
                self.session = GameSession::with_catalog(config, catalog);
                self.buffer.pack(&self.session);
            }
            Err(err) => log::error!("level catalog rejected: {err}"),
        }
    }

    /// Level content + tokens as JSON, fetched by the UI once per level.
    pub fn level_json(&self) -> String {
        match self.session.level_json() {
            Ok(json) => json,
            Err(err) => {
                log::error!("level payload serialization failed: {err}");
                String::from("null")
            }
        }
    }

    /// Active status message, or the empty string.
    pub fn message_text(&self) -> String {
        self.session.message_text().unwrap_or_default().to_owned()
    }

    // ---- Pointer accessors for wasm memory reads ----

    pub fn state_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    pub fn state_total_floats(&self) -> u32 {
        self.buffer.total_floats() as u32
    }

    // ---- Capacity accessors (read by TypeScript via wasm_bindgen exports) ----

    pub fn max_tokens(&self) -> u32 {
        self.buffer.layout().max_tokens as u32
    }

    pub fn max_feedback(&self) -> u32 {
        self.buffer.layout().max_feedback as u32
    }

    pub fn max_sounds(&self) -> u32 {
        self.buffer.layout().max_sounds as u32
    }
}

impl Default for SessionRunner {
    fn default() -> Self {
        Self::new()
    }
}
