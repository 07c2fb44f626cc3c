//! Banana Quest core crate.
//!
//! Single-screen alphabet game: the player is asked for a letter, taps it in a
//! grid of A–Z buttons and earns a banana for each match. The quiz state
//! machine in [`quiz`] is plain Rust with an injected clock so it can be tested
//! natively; [`start_game`] mounts the DOM front-end, and [`AlphabetQuest`]
//! exposes the same state machine to a JS host that renders on its own.

use wasm_bindgen::prelude::*;

pub mod alphabet;
pub mod config;
pub mod error;
pub mod quiz;
mod view;

pub use alphabet::{ALPHABET, ALPHABET_LEN, Letter};
pub use config::{QuizConfig, WrongTapPolicy};
pub use error::QuizError;
pub use quiz::{AnswerOutcome, Feedback, Mood, QuizEvent, QuizSession, QuizSnapshot};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

// -----------------------------------------------------------------------------
// Unified entrypoint
// -----------------------------------------------------------------------------

/// Mount the built-in DOM front-end with default timings.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    view::mount(QuizSession::default())
}

/// Same as [`start_game`] with a JSON [`QuizConfig`].
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_game_with_config(json: &str) -> Result<(), JsValue> {
    let config = QuizConfig::from_json(json)?;
    view::mount(QuizSession::new(config))
}

/// JS handle on a quiz session for hosts that draw their own UI.
/// Times are `performance.now()` milliseconds.
#[wasm_bindgen]
pub struct AlphabetQuest {
    session: QuizSession,
}

impl Default for AlphabetQuest {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl AlphabetQuest {
    #[wasm_bindgen(constructor)]
    pub fn new() -> AlphabetQuest {
        AlphabetQuest { session: QuizSession::default() }
    }

    /// Returns "correct", "wrong", "already_answered" or "finished".
    pub fn submit_answer(&mut self, letter: &str, now_ms: f64) -> Result<String, JsValue> {
        let letter: Letter = letter.parse()?;
        Ok(self.session.submit_answer(letter, now_ms).as_str().to_string())
    }

    pub fn advance(&mut self) {
        self.session.advance();
    }

    pub fn retreat(&mut self) {
        self.session.retreat();
    }

    pub fn tick(&mut self, now_ms: f64) {
        self.session.tick(now_ms);
    }

    pub fn target(&self) -> Option<String> {
        self.session.current_target().map(|l| l.to_string())
    }

    pub fn current_index(&self) -> usize {
        self.session.current_index()
    }

    pub fn reward_count(&self) -> u32 {
        self.session.reward_count()
    }

    /// "none", "correct" or "wrong".
    pub fn feedback(&self, letter: &str) -> Result<String, JsValue> {
        let letter: Letter = letter.parse()?;
        let state = self.session.feedback(letter).css_class().unwrap_or("none");
        Ok(state.to_string())
    }

    pub fn is_finished(&self) -> bool {
        self.session.is_finished()
    }
}

#[cfg(feature = "serde_json")]
#[wasm_bindgen]
impl AlphabetQuest {
    pub fn with_config_json(json: &str) -> Result<AlphabetQuest, JsValue> {
        let config = QuizConfig::from_json(json)?;
        Ok(AlphabetQuest { session: QuizSession::new(config) })
    }

    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.session.snapshot()).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Pending events as a JSON array; empties the queue.
    pub fn drain_events_json(&mut self) -> Result<String, JsValue> {
        serde_json::to_string(&self.session.drain_events()).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
