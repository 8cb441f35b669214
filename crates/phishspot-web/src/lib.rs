use std::cell::RefCell;

use phishspot_engine::{InputEvent, Mode, Verdict};
use wasm_bindgen::prelude::*;

pub mod runner;

pub use runner::SessionRunner;

thread_local! {
    static RUNNER: RefCell<Option<SessionRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut SessionRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("Game not initialized. Call game_init() first.");
        f(runner)
    })
}

#[wasm_bindgen]
pub fn game_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(SessionRunner::new());
    });

    log::info!("phishspot: initialized");
}

#[wasm_bindgen]
pub fn game_tick(dt_ms: f64) {
    with_runner(|r| r.tick(dt_ms));
}

#[wasm_bindgen]
pub fn game_select_token(index: u32, x: f32, y: f32) {
    with_runner(|r| {
        r.push_input(InputEvent::SelectToken {
            index: index as usize,
            x,
            y,
        })
    });
}

#[wasm_bindgen]
pub fn game_choose_verdict(verdict: u32, x: f32, y: f32) {
    with_runner(|r| {
        r.push_input(InputEvent::ChooseVerdict {
            verdict: Verdict::from_wire_id(verdict),
            x,
            y,
        })
    });
}

#[wasm_bindgen]
pub fn game_set_mode(mode: u32) {
    with_runner(|r| {
        r.push_input(InputEvent::SetMode {
            mode: Mode::from_wire_id(mode),
        })
    });
}

#[wasm_bindgen]
pub fn game_reset() {
    with_runner(|r| r.push_input(InputEvent::Reset));
}

#[wasm_bindgen]
pub fn game_advance_level() {
    with_runner(|r| r.push_input(InputEvent::AdvanceLevel));
}

#[wasm_bindgen]
pub fn game_toggle_mute() {
    with_runner(|r| r.push_input(InputEvent::ToggleMute));
}

#[wasm_bindgen]
pub fn game_load_levels(json: &str) {
    with_runner(|r| r.load_levels(json));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_state_ptr() -> *const f32 {
    with_runner(|r| r.state_ptr())
}

#[wasm_bindgen]
pub fn get_state_total_floats() -> u32 {
    with_runner(|r| r.state_total_floats())
}

#[wasm_bindgen]
pub fn get_level_json() -> String {
    with_runner(|r| r.level_json())
}

#[wasm_bindgen]
pub fn get_message_text() -> String {
    with_runner(|r| r.message_text())
}

// ---- Capacity accessors ----

#[wasm_bindgen]
pub fn get_max_tokens() -> u32 {
    with_runner(|r| r.max_tokens())
}

#[wasm_bindgen]
pub fn get_max_feedback() -> u32 {
    with_runner(|r| r.max_feedback())
}

#[wasm_bindgen]
pub fn get_max_sounds() -> u32 {
    with_runner(|r| r.max_sounds())
}
