//! Boundary errors. The quiz itself is total; these only come from parsing
//! player input and loading configuration.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("'{0}' is not a letter of the alphabet")]
    InvalidLetter(char),

    #[error("empty input, expected a single letter")]
    EmptyInput,

    #[error("delay '{name}' must be a finite, non-negative number of milliseconds (got {value})")]
    InvalidDelay { name: &'static str, value: f64 },

    #[error("goal must be at least 1")]
    InvalidGoal,

    #[cfg(feature = "serde_json")]
    #[error("invalid quiz config: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<QuizError> for JsValue {
    fn from(err: QuizError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}
