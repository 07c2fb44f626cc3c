//! Plain read model handed to the presentation layer.

use std::collections::BTreeMap;

/// Per-letter tap annotation. Absent entries mean `None`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Feedback {
    #[default]
    None,
    Correct,
    Wrong,
}

impl Feedback {
    /// CSS class used by the button grid.
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            Feedback::None => None,
            Feedback::Correct => Some("correct"),
            Feedback::Wrong => Some("wrong"),
        }
    }
}

/// Mascot expression, a pure function of the reward count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Mood {
    Neutral,
    Happy,
    Joyful,
}

pub const HAPPY_AT: u32 = 2;
pub const SPARKLES_AT: u32 = 3;
pub const JOYFUL_AT: u32 = 5;

impl Mood {
    pub fn for_rewards(rewards: u32) -> Self {
        if rewards >= JOYFUL_AT {
            Mood::Joyful
        } else if rewards >= HAPPY_AT {
            Mood::Happy
        } else {
            Mood::Neutral
        }
    }
}

impl Mood {
    pub fn css_class(self) -> &'static str {
        match self {
            Mood::Neutral => "neutral",
            Mood::Happy => "happy",
            Mood::Joyful => "joyful",
        }
    }
}

pub fn sparkles(rewards: u32) -> bool {
    rewards >= SPARKLES_AT
}

/// Progress bar fill, rounded and capped at 100.
pub fn progress_percent(value: u32, goal: u32) -> u8 {
    if goal == 0 {
        return 100;
    }
    let pct = (value as f64 / goal as f64 * 100.0).round();
    pct.min(100.0) as u8
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct QuizSnapshot {
    pub index: usize,
    pub target: Option<char>,
    pub reward_count: u32,
    pub goal: u32,
    pub progress_percent: u8,
    pub mood: Mood,
    pub sparkles: bool,
    /// Only letters with visible feedback are present.
    pub feedback: BTreeMap<char, Feedback>,
    pub finished: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_thresholds() {
        assert_eq!(Mood::for_rewards(0), Mood::Neutral);
        assert_eq!(Mood::for_rewards(1), Mood::Neutral);
        assert_eq!(Mood::for_rewards(2), Mood::Happy);
        assert_eq!(Mood::for_rewards(4), Mood::Happy);
        assert_eq!(Mood::for_rewards(5), Mood::Joyful);
        assert!(!sparkles(2));
        assert!(sparkles(3));
    }

    #[test]
    fn test_progress_percent_rounds_and_caps() {
        assert_eq!(progress_percent(0, 26), 0);
        assert_eq!(progress_percent(1, 26), 4);
        assert_eq!(progress_percent(13, 26), 50);
        assert_eq!(progress_percent(26, 26), 100);
        assert_eq!(progress_percent(40, 26), 100);
    }
}
