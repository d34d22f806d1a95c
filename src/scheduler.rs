//! One-shot timer scheduling on a virtual clock.
//!
//! The main loop feeds elapsed time into [`Scheduler::advance`], which hands
//! back every event whose deadline has passed. Nothing here sleeps or spawns:
//! timers are plain data, so tests can drive time deterministically and
//! cancellation is just removal from the pending set.
//!
//! Due events come out ordered by deadline, and events that share a deadline
//! come out in the order they were scheduled.

use std::time::Duration;

/// Identifies a scheduled timer. Handles are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    /// Raw id, for logging.
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// A timer that came due during [`Scheduler::advance`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired<E> {
    pub handle: TimerHandle,
    pub event: E,
}

#[derive(Debug)]
struct PendingTimer<E> {
    handle: TimerHandle,
    deadline: Duration,
    event: E,
}

/// Cancellable one-shot timers keyed by [`TimerHandle`].
#[derive(Debug)]
pub struct Scheduler<E> {
    now: Duration,
    next_id: u64,
    pending: Vec<PendingTimer<E>>,
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Scheduler<E> {
    /// Create an empty scheduler with its clock at zero.
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 1,
            pending: Vec::new(),
        }
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Arm a timer that fires `after` from the current virtual time.
    pub fn schedule(&mut self, after: Duration, event: E) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.pending.push(PendingTimer {
            handle,
            deadline: self.now + after,
            event,
        });
        handle
    }

    /// Disarm a timer. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| t.handle != handle);
        self.pending.len() != before
    }

    /// Whether the timer is still armed.
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.iter().any(|t| t.handle == handle)
    }

    /// Number of armed timers.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Earliest armed deadline, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.iter().map(|t| t.deadline).min()
    }

    /// Move the clock to `now` and drain every timer that is due.
    ///
    /// The clock never runs backwards; an earlier `now` is treated as the
    /// current time.
    pub fn advance(&mut self, now: Duration) -> Vec<Fired<E>> {
        if now > self.now {
            self.now = now;
        }
        let current = self.now;

        let (mut due, rest): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|t| t.deadline <= current);
        self.pending = rest;

        due.sort_by_key(|t| (t.deadline, t.handle));
        due.into_iter()
            .map(|t| Fired {
                handle: t.handle,
                event: t.event,
            })
            .collect()
    }

    /// Advance by a relative amount.
    pub fn advance_by(&mut self, delta: Duration) -> Vec<Fired<E>> {
        let now = self.now + delta;
        self.advance(now)
    }
}
