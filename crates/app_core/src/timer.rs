//! Cancellable timer handles
//!
//! The two timing concerns of the UI (carousel autoplay, resize debounce)
//! are owned single-deadline handles rather than ad hoc captured timer ids.
//! All methods take `now` explicitly so tests drive time without sleeping;
//! the frame loop passes `Instant::now()`.

use std::time::{Duration, Instant};

/// Recurring countdown with a single owned deadline.
///
/// Arming replaces any pending deadline, so at most one tick is ever
/// outstanding regardless of how often `arm` is called.
#[derive(Debug)]
pub struct CountdownTimer {
    interval: Duration,
    deadline: Option<Instant>,
}

impl CountdownTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Schedule the next tick at `now + interval`, replacing any pending one
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }

    /// Cancel the pending tick
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left until the pending tick, zero if already due
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }

    /// True once the deadline has passed, re-arming for the next interval.
    /// Fires at most once per call even if several intervals elapsed.
    pub fn fire_and_rearm(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }
}

/// Trailing-edge debouncer: fires once a full quiet interval has passed
/// since the last poke. Each poke supersedes the prior pending deadline.
#[derive(Debug)]
pub struct Debouncer {
    quiet: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            deadline: None,
        }
    }

    /// Record an event, postponing the pending fire
    pub fn poke(&mut self, now: Instant) {
        self.deadline = Some(now + self.quiet);
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// True once the quiet window has elapsed; clears the deadline
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn countdown_fires_at_deadline_and_not_before() {
        let t0 = Instant::now();
        let mut timer = CountdownTimer::new(100 * MS);

        timer.arm(t0);
        assert!(!timer.fire_and_rearm(t0 + 99 * MS));
        assert!(timer.fire_and_rearm(t0 + 100 * MS));
    }

    #[test]
    fn countdown_rearms_after_firing() {
        let t0 = Instant::now();
        let mut timer = CountdownTimer::new(100 * MS);

        timer.arm(t0);
        assert!(timer.fire_and_rearm(t0 + 100 * MS));
        // Next deadline counts from the fire time
        assert!(!timer.fire_and_rearm(t0 + 150 * MS));
        assert!(timer.fire_and_rearm(t0 + 200 * MS));
    }

    #[test]
    fn arming_replaces_the_pending_deadline() {
        let t0 = Instant::now();
        let mut timer = CountdownTimer::new(100 * MS);

        timer.arm(t0);
        timer.arm(t0 + 50 * MS);

        // The original deadline was superseded
        assert!(!timer.fire_and_rearm(t0 + 100 * MS));
        assert!(timer.fire_and_rearm(t0 + 150 * MS));
    }

    #[test]
    fn cancel_clears_the_pending_tick() {
        let t0 = Instant::now();
        let mut timer = CountdownTimer::new(100 * MS);

        timer.arm(t0);
        timer.cancel();

        assert!(!timer.is_armed());
        assert!(!timer.fire_and_rearm(t0 + 500 * MS));
    }

    #[test]
    fn remaining_counts_down_to_zero() {
        let t0 = Instant::now();
        let mut timer = CountdownTimer::new(100 * MS);

        timer.arm(t0);
        assert_eq!(timer.remaining(t0 + 40 * MS), Some(60 * MS));
        assert_eq!(timer.remaining(t0 + 200 * MS), Some(Duration::ZERO));
    }

    #[test]
    fn debouncer_fires_only_after_a_quiet_window() {
        let t0 = Instant::now();
        let mut debounce = Debouncer::new(100 * MS);

        debounce.poke(t0);
        debounce.poke(t0 + 50 * MS);

        // The first deadline was superseded by the second poke
        assert!(!debounce.fire(t0 + 100 * MS));
        assert!(debounce.fire(t0 + 150 * MS));
    }

    #[test]
    fn debouncer_fires_once_per_burst() {
        let t0 = Instant::now();
        let mut debounce = Debouncer::new(100 * MS);

        debounce.poke(t0);
        assert!(debounce.fire(t0 + 100 * MS));
        assert!(!debounce.is_pending());
        assert!(!debounce.fire(t0 + 500 * MS));
    }
}
