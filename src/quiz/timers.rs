//! Fire-once, cancellable timers driven by an external clock.
//!
//! Nothing here reads the wall clock: callers pass `now_ms` (the same unit as
//! `performance.now()`), which keeps the quiz deterministic under test.
//!
//! Usage:
//!
//! ```text
//! let mut timers = TimerQueue::new();
//! let token = timers.schedule(now + 600.0, Payload::Advance);
//! timers.cancel(token);
//! while let Some(p) = timers.pop_due(now) { ... }
//! ```

/// Handle to a scheduled timer. Never reused within one queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerToken(u64);

#[derive(Debug, Clone)]
struct Entry<T> {
    token: TimerToken,
    deadline_ms: f64,
    payload: T,
}

/// Small pending-timer set. The quiz keeps at most a few dozen timers alive,
/// so a flat vector beats a heap here.
#[derive(Debug, Clone)]
pub struct TimerQueue<T> {
    entries: Vec<Entry<T>>,
    next_token: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self { entries: Vec::new(), next_token: 0 }
    }

    pub fn schedule(&mut self, deadline_ms: f64, payload: T) -> TimerToken {
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        self.entries.push(Entry { token, deadline_ms, payload });
        token
    }

    /// Returns `false` if the timer already fired or was cancelled.
    pub fn cancel(&mut self, token: TimerToken) -> bool {
        match self.entries.iter().position(|e| e.token == token) {
            Some(pos) => {
                self.entries.swap_remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn cancel_all(&mut self) {
        self.entries.clear();
    }

    pub fn is_pending(&self, token: TimerToken) -> bool {
        self.entries.iter().any(|e| e.token == token)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove and return the earliest timer due at `now_ms`. Equal deadlines
    /// fire in scheduling order.
    pub fn pop_due(&mut self, now_ms: f64) -> Option<(TimerToken, T)> {
        let pos = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.deadline_ms <= now_ms)
            .min_by(|(_, a), (_, b)| {
                a.deadline_ms
                    .total_cmp(&b.deadline_ms)
                    .then(a.token.cmp(&b.token))
            })
            .map(|(i, _)| i)?;
        let entry = self.entries.swap_remove(pos);
        Some((entry.token, entry.payload))
    }
}
