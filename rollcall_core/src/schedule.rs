// Copyright 2026 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0

use std::time::Duration;

/// Identifies a scheduled action so it can be cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    /// Make a handle from its raw value, for schedulers outside this crate.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id, for logging.
    pub const fn to_raw(self) -> u64 {
        self.0
    }
}

/// Runs `action` after `delay`, unless cancelled first.
///
/// Reducers take a `&mut impl Scheduler<A>` instead of calling `setTimeout`,
/// so tests can drive them with a [`ManualClock`].
pub trait Scheduler<A> {
    /// Queues `action` to run once `delay` has passed.
    fn schedule(&mut self, delay: Duration, action: A) -> TimerHandle;

    /// Returns `false` if the timer already fired or was cancelled.
    fn cancel(&mut self, handle: TimerHandle) -> bool;
}

#[derive(Debug)]
struct Pending<A> {
    handle: TimerHandle,
    due: Duration,
    action: A,
}

/// A simulated clock which only moves when told to.
#[derive(Debug)]
pub struct ManualClock<A> {
    now: Duration,
    next_id: u64,
    pending: Vec<Pending<A>>,
}

impl<A> Default for ManualClock<A> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 1,
            pending: Vec::new(),
        }
    }
}

impl<A> ManualClock<A> {
    /// A clock at time zero with nothing scheduled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the clock was created.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of actions still waiting to fire.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Deadline of the earliest pending action.
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.iter().map(|p| p.due).min()
    }

    /// Moves the clock forward and returns every action that became due,
    /// ordered by deadline and then by scheduling order.
    pub fn advance(&mut self, by: Duration) -> Vec<A> {
        self.now += by;
        let now = self.now;
        let (mut due, rest): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|p| p.due <= now);
        self.pending = rest;
        due.sort_by_key(|p| (p.due, p.handle));
        due.into_iter().map(|p| p.action).collect()
    }
}

impl<A> Scheduler<A> for ManualClock<A> {
    fn schedule(&mut self, delay: Duration, action: A) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            handle,
            due: self.now + delay,
            action,
        });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.handle != handle);
        before != self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_in_deadline_order() {
        let mut clock = ManualClock::new();
        clock.schedule(Duration::from_millis(300), "late");
        clock.schedule(Duration::from_millis(100), "early");
        clock.schedule(Duration::from_millis(100), "early-second");

        assert!(clock.advance(Duration::from_millis(99)).is_empty());
        assert_eq!(
            clock.advance(Duration::from_millis(1)),
            vec!["early", "early-second"]
        );
        assert_eq!(clock.next_due(), Some(Duration::from_millis(300)));
        assert_eq!(clock.advance(Duration::from_millis(500)), vec!["late"]);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn cancelled_actions_never_fire() {
        let mut clock = ManualClock::new();
        let handle = clock.schedule(Duration::from_millis(10), ());
        assert!(clock.cancel(handle));
        assert!(!clock.cancel(handle));
        assert!(clock.advance(Duration::from_secs(1)).is_empty());
    }
}
