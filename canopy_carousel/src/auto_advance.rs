// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-interval cadence for automatic carousel advancement.

use core::num::NonZeroU64;

/// A fixed-interval cadence evaluated against caller-supplied timestamps.
///
/// This is deliberately not a timer: it owns no thread, task, or clock.
/// Hosts poll it with their own monotonic "now" (milliseconds) and receive
/// `true` once per elapsed interval. Dropping it is cancellation; there is
/// nothing else to tear down, which is what ties the cadence's lifetime to
/// whatever owns it.
///
/// The cadence arms on the first poll, so intervals are measured from when
/// the host starts driving it rather than from construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoAdvance {
    interval_ms: NonZeroU64,
    next_due_ms: Option<u64>,
}

impl AutoAdvance {
    /// Creates a cadence that comes due every `interval_ms` milliseconds.
    #[must_use]
    pub const fn new(interval_ms: NonZeroU64) -> Self {
        Self {
            interval_ms,
            next_due_ms: None,
        }
    }

    /// Returns the interval in milliseconds.
    #[must_use]
    pub const fn interval_ms(&self) -> u64 {
        self.interval_ms.get()
    }

    /// Returns the timestamp the cadence next comes due, once armed.
    ///
    /// Hosts that sleep between polls can use this to pick a wake-up time.
    #[must_use]
    pub const fn next_due_ms(&self) -> Option<u64> {
        self.next_due_ms
    }

    /// Advances the cadence to `now_ms` and reports whether it came due.
    ///
    /// The first poll arms the cadence one interval out and returns `false`.
    /// A due poll re-arms one full interval past `now_ms` before returning
    /// `true`, so a poll that arrives late (or a consumer that skips the
    /// step) never produces a burst of catch-up fires.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.next_due_ms {
            None => {
                self.next_due_ms = Some(now_ms.saturating_add(self.interval_ms.get()));
                false
            }
            Some(due) if now_ms >= due => {
                self.next_due_ms = Some(now_ms.saturating_add(self.interval_ms.get()));
                true
            }
            Some(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AutoAdvance;
    use core::num::NonZeroU64;

    fn cadence(interval_ms: u64) -> AutoAdvance {
        AutoAdvance::new(NonZeroU64::new(interval_ms).unwrap())
    }

    #[test]
    fn first_poll_arms_without_firing() {
        let mut auto = cadence(1000);
        assert_eq!(auto.next_due_ms(), None);
        assert!(!auto.poll(400));
        assert_eq!(auto.next_due_ms(), Some(1400));
    }

    #[test]
    fn fires_once_per_interval() {
        let mut auto = cadence(1000);
        assert!(!auto.poll(0));
        assert!(!auto.poll(999));
        assert!(auto.poll(1000));
        assert!(!auto.poll(1500));
        assert!(auto.poll(2000));
    }

    #[test]
    fn late_polls_do_not_burst() {
        let mut auto = cadence(100);
        assert!(!auto.poll(0));
        // Several intervals elapse before the next poll; only one fire, and
        // the next is measured from the late poll.
        assert!(auto.poll(750));
        assert!(!auto.poll(800));
        assert!(auto.poll(850));
    }
}
