// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll phases reported by the host and the changes handed back to it.

/// The host gesture driver's report of scroll activity.
///
/// Hosts report every scroll the same way, whether a finger or a
/// programmatic animated step drives it: `Dragging` (or straight to
/// `Settling` for programmatic scrolls) while it runs, then `Idle` once the
/// view comes to rest. The carousel relies on that final `Idle` report to
/// know when an invisible boundary correction is safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollPhase {
    /// The view is at rest.
    Idle,
    /// A pointer or finger is actively dragging the view.
    Dragging,
    /// The drag has ended (or a programmatic scroll started) and the snap
    /// animation is still running.
    Settling,
}

impl ScrollPhase {
    /// Returns `true` while any scroll, user-driven or programmatic, is in
    /// flight.
    #[must_use]
    pub const fn is_scrolling(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// How a position change should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    /// A user-visible step: animate the scroll (an eased slide).
    Animated,
    /// A corrective substitution between identical-looking positions: apply
    /// with no animation at all, so the user cannot perceive it.
    Instant,
}

/// A position mutation for the presentation layer to apply.
///
/// Every mutating carousel operation that moves the position returns one of
/// these, so the host always knows both where to scroll and whether the move
/// may be seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionChange {
    /// The position before the change; `None` when this is the first layout.
    pub from: Option<usize>,
    /// The position to scroll to.
    pub to: usize,
    /// Whether the move is visible or corrective.
    pub transition: Transition,
}

#[cfg(test)]
mod tests {
    use super::ScrollPhase;

    #[test]
    fn only_idle_is_at_rest() {
        assert!(!ScrollPhase::Idle.is_scrolling());
        assert!(ScrollPhase::Dragging.is_scrolling());
        assert!(ScrollPhase::Settling.is_scrolling());
    }
}
