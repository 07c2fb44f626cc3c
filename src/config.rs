//! Tunable timings for the quiz. Defaults match the shipped game.

use crate::alphabet::ALPHABET_LEN;
use crate::error::QuizError;

/// Delay before a correct answer moves on to the next letter.
pub const DEFAULT_ADVANCE_DELAY_MS: f64 = 600.0;
/// Delay before a wrong tap's red feedback disappears.
pub const DEFAULT_WRONG_CLEAR_MS: f64 = 450.0;

/// What a second wrong tap on the same letter does to the first tap's
/// clear timer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WrongTapPolicy {
    /// Cancel the pending clear and start a fresh one.
    #[default]
    Restart,
    /// Keep every timer; the earliest one clears the feedback.
    Stack,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct QuizConfig {
    pub advance_delay_ms: f64,
    pub wrong_clear_ms: f64,
    /// Reward total that fills the progress bar.
    pub goal: u32,
    pub wrong_tap_policy: WrongTapPolicy,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            advance_delay_ms: DEFAULT_ADVANCE_DELAY_MS,
            wrong_clear_ms: DEFAULT_WRONG_CLEAR_MS,
            goal: ALPHABET_LEN as u32,
            wrong_tap_policy: WrongTapPolicy::default(),
        }
    }
}

impl QuizConfig {
    pub fn validate(&self) -> Result<(), QuizError> {
        for (name, value) in [
            ("advance_delay_ms", self.advance_delay_ms),
            ("wrong_clear_ms", self.wrong_clear_ms),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(QuizError::InvalidDelay { name, value });
            }
        }
        if self.goal == 0 {
            return Err(QuizError::InvalidGoal);
        }
        Ok(())
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, QuizError> {
        let cfg: QuizConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }
}
