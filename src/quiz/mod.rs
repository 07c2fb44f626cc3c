//! Quiz progression state machine.
//!
//! A [`QuizSession`] tracks which letter the player is asked to find, the
//! transient feedback shown on each letter button and the banana counter.
//! It is mutated only by player events ([`QuizSession::submit_answer`],
//! [`QuizSession::advance`], [`QuizSession::retreat`]) and by its own timers,
//! which fire from [`QuizSession::tick`]. The caller owns the clock, so the
//! whole thing runs the same in a browser frame loop and in a unit test.
//!
//! Timing rules:
//! - correct tap: the letter turns green, one banana is awarded, and after
//!   `advance_delay_ms` the quiz moves on and every button resets;
//! - wrong tap: the letter turns red for `wrong_clear_ms`, nothing else changes;
//! - a manual advance/retreat cancels every pending timer, so a correct tap
//!   followed quickly by "next" moves forward exactly once.

use std::collections::HashMap;

use log::{debug, info};

use crate::alphabet::{LAST_INDEX, Letter};
use crate::config::{QuizConfig, WrongTapPolicy};

pub mod snapshot;
pub mod timers;

pub use snapshot::{Feedback, Mood, QuizSnapshot};
pub use timers::{TimerQueue, TimerToken};

/// Scheduled state changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Transition {
    AutoAdvance,
    ClearFeedback(Letter),
}

/// Result of a tap, for the caller to pick an animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Matched the target. Carries the new banana total.
    Correct { rewards: u32 },
    Wrong,
    /// Target tapped again while its auto-advance is still pending.
    AlreadyAnswered,
    /// The last letter was already answered; no further bananas until a
    /// retreat. Wrong taps still register as [`AnswerOutcome::Wrong`].
    Finished,
}

impl AnswerOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            AnswerOutcome::Correct { .. } => "correct",
            AnswerOutcome::Wrong => "wrong",
            AnswerOutcome::AlreadyAnswered => "already_answered",
            AnswerOutcome::Finished => "finished",
        }
    }
}

/// Notifications for the presentation layer, drained once per frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum QuizEvent {
    /// Play the banana-fly animation from `letter` to the counter.
    RewardEarned { letter: Letter, total: u32 },
    QuestionChanged { index: usize, target: Letter },
    FeedbackCleared { letter: Letter },
    Finished { rewards: u32 },
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    config: QuizConfig,
    index: usize,
    rewards: u32,
    feedback: HashMap<Letter, Feedback>,
    timers: TimerQueue<Transition>,
    pending_advance: Option<TimerToken>,
    // latest clear timer per letter; used by WrongTapPolicy::Restart
    pending_clears: HashMap<Letter, TimerToken>,
    finished: bool,
    events: Vec<QuizEvent>,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new(QuizConfig::default())
    }
}

impl QuizSession {
    pub fn new(config: QuizConfig) -> Self {
        Self {
            config,
            index: 0,
            rewards: 0,
            feedback: HashMap::new(),
            timers: TimerQueue::new(),
            pending_advance: None,
            pending_clears: HashMap::new(),
            finished: false,
            events: Vec::new(),
        }
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    /// Letter the player must find. Only `None` if the index were ever out of
    /// range, which clamping prevents.
    pub fn current_target(&self) -> Option<Letter> {
        Letter::from_index(self.index)
    }

    pub fn reward_count(&self) -> u32 {
        self.rewards
    }

    pub fn feedback(&self, letter: Letter) -> Feedback {
        self.feedback.get(&letter).copied().unwrap_or_default()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn has_pending_advance(&self) -> bool {
        self.pending_advance.is_some()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn submit_answer(&mut self, letter: Letter, now_ms: f64) -> AnswerOutcome {
        let Some(target) = self.current_target() else {
            return AnswerOutcome::Finished;
        };

        if letter != target {
            self.feedback.insert(letter, Feedback::Wrong);
            if self.config.wrong_tap_policy == WrongTapPolicy::Restart {
                if let Some(old) = self.pending_clears.remove(&letter) {
                    self.timers.cancel(old);
                }
            }
            let token = self
                .timers
                .schedule(now_ms + self.config.wrong_clear_ms, Transition::ClearFeedback(letter));
            self.pending_clears.insert(letter, token);
            debug!("wrong tap {letter} (target {target})");
            return AnswerOutcome::Wrong;
        }

        if self.finished {
            return AnswerOutcome::Finished;
        }
        if self.pending_advance.is_some() {
            return AnswerOutcome::AlreadyAnswered;
        }

        self.feedback.insert(letter, Feedback::Correct);
        self.rewards += 1;
        self.events.push(QuizEvent::RewardEarned { letter, total: self.rewards });
        self.pending_advance = Some(
            self.timers
                .schedule(now_ms + self.config.advance_delay_ms, Transition::AutoAdvance),
        );
        info!("found {letter}, bananas: {}", self.rewards);

        if self.index == LAST_INDEX {
            self.finished = true;
            self.events.push(QuizEvent::Finished { rewards: self.rewards });
            info!("alphabet complete with {} bananas", self.rewards);
        }
        AnswerOutcome::Correct { rewards: self.rewards }
    }

    /// Manual "next question". No reward.
    pub fn advance(&mut self) {
        self.move_to((self.index + 1).min(LAST_INDEX));
    }

    /// Manual "previous question". Re-opens a finished game.
    pub fn retreat(&mut self) {
        self.finished = false;
        self.move_to(self.index.saturating_sub(1));
    }

    /// Fire every timer due at `now_ms`, earliest first.
    pub fn tick(&mut self, now_ms: f64) {
        while let Some((token, transition)) = self.timers.pop_due(now_ms) {
            match transition {
                Transition::AutoAdvance => {
                    self.pending_advance = None;
                    self.move_to((self.index + 1).min(LAST_INDEX));
                }
                Transition::ClearFeedback(letter) => {
                    if self.pending_clears.get(&letter) == Some(&token) {
                        self.pending_clears.remove(&letter);
                    }
                    if self.feedback.remove(&letter).is_some() {
                        self.events.push(QuizEvent::FeedbackCleared { letter });
                    }
                }
            }
        }
    }

    pub fn drain_events(&mut self) -> Vec<QuizEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> QuizSnapshot {
        QuizSnapshot {
            index: self.index,
            target: self.current_target().map(Letter::as_char),
            reward_count: self.rewards,
            goal: self.config.goal,
            progress_percent: snapshot::progress_percent(self.rewards, self.config.goal),
            mood: Mood::for_rewards(self.rewards),
            sparkles: snapshot::sparkles(self.rewards),
            feedback: self
                .feedback
                .iter()
                .filter(|(_, f)| **f != Feedback::None)
                .map(|(l, f)| (l.as_char(), *f))
                .collect(),
            finished: self.finished,
        }
    }

    /// Jump to `index`, dropping all feedback and every pending timer.
    fn move_to(&mut self, index: usize) {
        self.timers.cancel_all();
        self.pending_advance = None;
        self.pending_clears.clear();
        self.feedback.clear();
        if index != self.index {
            self.index = index;
            if let Some(target) = self.current_target() {
                debug!("question {index}: find {target}");
                self.events.push(QuizEvent::QuestionChanged { index, target });
            }
        }
    }
}
