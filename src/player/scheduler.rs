//! Single-threaded timer queue
//!
//! Entries are one-shot and keyed by a millisecond timestamp on the caller's
//! monotonic clock. Entries due at the same instant fire in the order they
//! were scheduled. Cancelling an entry removes it from the queue, so a
//! cancelled entry can never fire afterwards.

use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// Milliseconds on the caller's monotonic clock
pub type Millis = u64;

/// Handle for cancelling one scheduled entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

/// Queue of cancellable one-shot entries
#[derive(Debug)]
pub struct Scheduler<E> {
    queue: BTreeMap<(Millis, TimerToken), E>,
    /// Due time per live token, for cancellation by token
    due: FxHashMap<TimerToken, Millis>,
    next_token: u64,
}

impl<E> Scheduler<E> {
    pub fn new() -> Self {
        Scheduler {
            queue: BTreeMap::new(),
            due: FxHashMap::default(),
            next_token: 0,
        }
    }

    /// Schedule `event` to fire at `at`
    pub fn schedule(&mut self, at: Millis, event: E) -> TimerToken {
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        self.queue.insert((at, token), event);
        self.due.insert(token, at);
        token
    }

    /// Cancel one entry. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, token: TimerToken) -> bool {
        match self.due.remove(&token) {
            Some(at) => self.queue.remove(&(at, token)).is_some(),
            None => false,
        }
    }

    /// Remove and return the earliest entry due at or before `now`
    pub fn pop_due(&mut self, now: Millis) -> Option<(Millis, TimerToken, E)> {
        let (&(at, token), _) = self.queue.first_key_value()?;
        if at > now {
            return None;
        }
        let event = self.queue.remove(&(at, token))?;
        self.due.remove(&token);
        Some((at, token, event))
    }

    /// Due time of the earliest pending entry
    pub fn next_due(&self) -> Option<Millis> {
        self.queue.keys().next().map(|&(at, _)| at)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}
