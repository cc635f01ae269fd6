// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The carousel controller: position, phase, settling, and auto-advance.

use alloc::vec::Vec;
use core::fmt;
use core::num::NonZeroU64;

use crate::{AutoAdvance, Band, PositionChange, ScrollPhase, Slot, SlotId, Transition};

/// Error returned when constructing a carousel over an empty item set.
///
/// An empty carousel has no meaningful page arithmetic, so construction
/// refuses it up front instead of letting a later `% 0` surface somewhere
/// deep in a render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyCarousel;

impl fmt::Display for EmptyCarousel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("carousel requires at least one item")
    }
}

impl core::error::Error for EmptyCarousel {}

/// Position model for a looping carousel over a tripled virtual sequence.
///
/// The `len` owned items are presented to the host as `3 * len` virtual
/// [`Slot`]s. The scroll position is a flat index into that virtual
/// sequence; at rest it lives in the middle band `len..2 * len`, and the
/// logical page shown to the user is always `position % len`.
///
/// This type:
/// - hands out the tripled sequence for the host to lay out,
/// - tracks the position and the host-reported [`ScrollPhase`],
/// - pulls positions that drifted into the outer bands back to the middle
///   with an [`Transition::Instant`] jump once the view is at rest,
/// - and steps the position forward on a fixed cadence when auto-advance is
///   enabled.
///
/// It does *not* scroll anything itself. Every mutation that moves the
/// position returns a [`PositionChange`] carrying the [`Transition`] the
/// host must apply it with; the loop illusion holds exactly as long as
/// `Instant` changes are rendered without animation.
///
/// The `&mut self` receivers are the writer discipline: position writes
/// cannot interleave, and the auto-advance path *skips* (never waits out)
/// ticks that land while a reported scroll is in flight.
#[derive(Debug, Clone)]
pub struct Carousel<T> {
    items: Vec<T>,
    position: Option<usize>,
    phase: ScrollPhase,
    auto: Option<AutoAdvance>,
}

impl<T> Carousel<T> {
    /// Creates a carousel over `items`.
    ///
    /// Returns [`EmptyCarousel`] when `items` is empty. The position starts
    /// unset; call [`Carousel::ensure_initialized`] once the host has laid
    /// the virtual sequence out.
    pub fn new(items: Vec<T>) -> Result<Self, EmptyCarousel> {
        if items.is_empty() {
            return Err(EmptyCarousel);
        }
        Ok(Self {
            items,
            position: None,
            phase: ScrollPhase::Idle,
            auto: None,
        })
    }

    /// Returns the number of original items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`: construction rejects empty item sets.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Returns the length of the tripled virtual sequence, `3 * len`.
    #[must_use]
    pub fn virtual_len(&self) -> usize {
        self.items.len() * 3
    }

    /// Returns the original items.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns the virtual slot at `index`, if `index < 3 * len`.
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<Slot<'_, T>> {
        let id = SlotId::from_flat(index, self.items.len())?;
        Some(Slot {
            index,
            id,
            item: &self.items[id.original],
        })
    }

    /// Returns the tripled virtual sequence in layout order.
    ///
    /// This is what the host lays out: every item once per [`Band`], each
    /// slot with its own stable [`SlotId`].
    pub fn slots(&self) -> impl Iterator<Item = Slot<'_, T>> {
        let len = self.items.len();
        Band::ALL.into_iter().flat_map(move |band| {
            self.items.iter().enumerate().map(move |(original, item)| Slot {
                index: band.index() * len + original,
                id: SlotId { band, original },
                item,
            })
        })
    }

    /// Returns the current virtual position, or `None` before first layout.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        self.position
    }

    /// Returns the logical page, `position % len`, or `0` while the
    /// position is unset.
    ///
    /// This is defined for every position, including transient excursions
    /// into the outer bands, so indicators never flicker during a swipe
    /// past the ends.
    #[must_use]
    pub fn logical_page(&self) -> usize {
        self.position.map_or(0, |p| p % self.items.len())
    }

    /// Returns the item the current logical page shows.
    #[must_use]
    pub fn current_item(&self) -> &T {
        &self.items[self.logical_page()]
    }

    /// Returns the host-reported scroll phase.
    #[must_use]
    pub const fn phase(&self) -> ScrollPhase {
        self.phase
    }

    /// First-layout hook: sets an unset position to `len`, the start of the
    /// middle band (logical page `0`), and returns that change.
    ///
    /// Subsequent calls are no-ops, so hosts can invoke this from every
    /// layout pass.
    pub fn ensure_initialized(&mut self) -> Option<PositionChange> {
        if self.position.is_some() {
            return None;
        }
        let start = self.items.len();
        self.position = Some(start);
        Some(PositionChange {
            from: None,
            to: start,
            transition: Transition::Instant,
        })
    }

    /// Records a position written by the host's scroll binding (a drag in
    /// progress, or the value a released drag snapped to).
    ///
    /// Out-of-range positions clamp to the virtual sequence and are
    /// debug-asserted.
    pub fn set_position(&mut self, position: usize) {
        debug_assert!(
            position < self.virtual_len(),
            "carousel positions must lie in 0..{}; got {position}",
            self.virtual_len()
        );
        self.position = Some(position.min(self.virtual_len() - 1));
    }

    /// Records a scroll phase report from the host.
    ///
    /// The transition from a scrolling phase to [`ScrollPhase::Idle`] is the
    /// moment the view is provably at rest, so that is when the boundary
    /// correction runs: the returned change, if any, is the
    /// [`Transition::Instant`] jump of [`Carousel::settle`]. Ordering falls
    /// out of the call structure: a correction always completes before the
    /// host can poll [`Carousel::tick`] again.
    pub fn set_phase(&mut self, phase: ScrollPhase) -> Option<PositionChange> {
        let was = self.phase;
        self.phase = phase;
        if was.is_scrolling() && phase == ScrollPhase::Idle {
            self.settle()
        } else {
            None
        }
    }

    /// Pulls a position that drifted into an outer band back to the middle
    /// band slot showing identical content.
    ///
    /// Positions in `0..len` map to `position + len`; positions in
    /// `2 * len..` map to `len + position % len` (which is
    /// `position - len` everywhere in the virtual sequence, and still lands
    /// in the middle band for the transient one-past-the-end overshoot an
    /// auto-advance step can produce). Middle-band and unset positions
    /// return `None`, which also makes the correction idempotent.
    ///
    /// The returned jump is [`Transition::Instant`]: the two positions
    /// render identically, so applying it without animation is what keeps
    /// the loop imperceptible. Only call this while the view is at rest;
    /// [`Carousel::set_phase`] does so at exactly the right moment.
    pub fn settle(&mut self) -> Option<PositionChange> {
        let len = self.items.len();
        let position = self.position?;
        if (len..2 * len).contains(&position) {
            return None;
        }
        let target = len + position % len;
        self.position = Some(target);
        Some(PositionChange {
            from: Some(position),
            to: target,
            transition: Transition::Instant,
        })
    }

    /// Enables auto-advance on a fixed `interval_ms` cadence.
    ///
    /// The cadence is owned by the carousel: re-enabling replaces it (and
    /// restarts the interval), and dropping the carousel cancels it. Drive
    /// it by polling [`Carousel::tick`] with the host clock.
    pub fn enable_auto_advance(&mut self, interval_ms: NonZeroU64) {
        self.auto = Some(AutoAdvance::new(interval_ms));
    }

    /// Cancels auto-advance. Returns `true` if it was enabled.
    pub fn cancel_auto_advance(&mut self) -> bool {
        self.auto.take().is_some()
    }

    /// Returns the auto-advance cadence, if enabled.
    #[must_use]
    pub const fn auto_advance(&self) -> Option<&AutoAdvance> {
        self.auto.as_ref()
    }

    /// Polls the auto-advance cadence at `now_ms` and, when a tick is due
    /// and allowed, steps the position forward by one slot.
    ///
    /// A due tick is consumed (the cadence re-arms one full interval out)
    /// but produces no step when:
    /// - the host reported a scroll still in flight (a tick must never
    ///   fight a finger, so it skips rather than waits);
    /// - the position is unset (nothing laid out yet);
    /// - the position sits outside the middle band, meaning a boundary
    ///   correction is still pending. Deferring here bounds the drift from
    ///   fast cadences to a single uncorrected step.
    ///
    /// A successful step returns a [`Transition::Animated`] change: this is
    /// the one position mutation the user is supposed to see. Hosts must
    /// report the resulting scroll's phases (settling, then idle) just as
    /// for a user scroll, which is what lets the step that lands one past
    /// the middle band get corrected.
    pub fn tick(&mut self, now_ms: u64) -> Option<PositionChange> {
        let len = self.items.len();
        let auto = self.auto.as_mut()?;
        if !auto.poll(now_ms) {
            return None;
        }
        if self.phase.is_scrolling() {
            return None;
        }
        let position = self.position?;
        if !(len..2 * len).contains(&position) {
            return None;
        }
        let target = position + 1;
        self.position = Some(target);
        Some(PositionChange {
            from: Some(position),
            to: target,
            transition: Transition::Animated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Carousel, EmptyCarousel};
    use crate::{Band, ScrollPhase, Transition};
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::num::NonZeroU64;

    fn five() -> Carousel<u32> {
        Carousel::new(vec![10, 20, 30, 40, 50]).unwrap()
    }

    fn interval(ms: u64) -> NonZeroU64 {
        NonZeroU64::new(ms).unwrap()
    }

    #[test]
    fn empty_item_sets_are_rejected() {
        let result = Carousel::<u32>::new(Vec::new());
        assert_eq!(result.unwrap_err(), EmptyCarousel);
        assert_eq!(
            EmptyCarousel.to_string(),
            "carousel requires at least one item"
        );
    }

    #[test]
    fn a_single_item_still_triplicates() {
        let carousel = Carousel::new(vec!["only"]).unwrap();
        assert_eq!(carousel.len(), 1);
        assert_eq!(carousel.virtual_len(), 3);
        let slots: Vec<_> = carousel.slots().collect();
        assert_eq!(slots.len(), 3);
        assert!(slots.iter().all(|slot| *slot.item == "only"));
        assert_eq!(slots[0].id.band, Band::Leading);
        assert_eq!(slots[2].id.band, Band::Trailing);
    }

    #[test]
    fn slots_enumerate_the_tripled_sequence() {
        let carousel = five();
        let slots: Vec<_> = carousel.slots().collect();
        assert_eq!(slots.len(), 15);
        for (index, slot) in slots.iter().enumerate() {
            assert_eq!(slot.index, index);
            assert_eq!(slot.id.flat(5), index);
            assert_eq!(*slot.item, carousel.items()[index % 5]);
        }
        assert!(carousel.slot(15).is_none());
    }

    #[test]
    fn first_layout_starts_on_the_middle_band() {
        let mut carousel = five();
        assert_eq!(carousel.position(), None);
        assert_eq!(carousel.logical_page(), 0);

        let change = carousel.ensure_initialized().unwrap();
        assert_eq!(change.from, None);
        assert_eq!(change.to, 5);
        assert_eq!(change.transition, Transition::Instant);
        assert_eq!(carousel.logical_page(), 0);

        // Later layout passes leave the position alone.
        assert!(carousel.ensure_initialized().is_none());
        assert_eq!(carousel.position(), Some(5));
    }

    #[test]
    fn logical_page_ignores_the_band() {
        let mut carousel = five();
        for position in 0..15 {
            carousel.set_position(position);
            assert_eq!(carousel.logical_page(), position % 5);
        }
        carousel.set_position(13);
        assert_eq!(*carousel.current_item(), 40);
    }

    #[test]
    fn settle_pulls_outer_bands_back_to_the_middle() {
        for (start, corrected) in [(0, 5), (4, 9), (10, 5), (14, 9)] {
            let mut carousel = five();
            carousel.set_position(start);
            let page_before = carousel.logical_page();

            let change = carousel.settle().unwrap();
            assert_eq!(change.from, Some(start));
            assert_eq!(change.to, corrected);
            assert_eq!(change.transition, Transition::Instant);
            assert_eq!(carousel.logical_page(), page_before);

            // Already corrected: settling again is a no-op.
            assert!(carousel.settle().is_none());
        }
    }

    #[test]
    fn settle_leaves_middle_and_unset_positions_alone() {
        let mut carousel = five();
        assert!(carousel.settle().is_none());
        for position in 5..10 {
            carousel.set_position(position);
            assert!(carousel.settle().is_none());
            assert_eq!(carousel.position(), Some(position));
        }
    }

    #[test]
    fn idle_reports_trigger_the_correction() {
        let mut carousel = five();
        carousel.ensure_initialized();

        // Swipe backwards past the start, ending in the leading band.
        assert!(carousel.set_phase(ScrollPhase::Dragging).is_none());
        carousel.set_position(4);
        assert_eq!(carousel.logical_page(), 4);
        assert!(carousel.set_phase(ScrollPhase::Settling).is_none());

        let change = carousel.set_phase(ScrollPhase::Idle).unwrap();
        assert_eq!(change.from, Some(4));
        assert_eq!(change.to, 9);
        assert_eq!(change.transition, Transition::Instant);
        assert_eq!(carousel.logical_page(), 4);

        // Idle-to-idle reports don't re-run the correction.
        assert!(carousel.set_phase(ScrollPhase::Idle).is_none());
    }

    #[test]
    fn auto_advance_walks_pages_and_wraps() {
        let mut carousel = five();
        carousel.ensure_initialized();
        carousel.enable_auto_advance(interval(1000));

        // First poll arms the cadence.
        assert!(carousel.tick(0).is_none());

        let mut now = 0;
        for expected in [6, 7, 8, 9, 10] {
            now += 1000;
            let step = carousel.tick(now).unwrap();
            assert_eq!(step.to, expected);
            assert_eq!(step.transition, Transition::Animated);
            // The host animates the step and reports the scroll's life.
            carousel.set_phase(ScrollPhase::Settling);
            let corrected = carousel.set_phase(ScrollPhase::Idle);
            if expected < 10 {
                assert!(corrected.is_none());
            } else {
                // The fifth step crossed into the trailing band; coming to
                // rest snaps it back with the page unchanged.
                let jump = corrected.unwrap();
                assert_eq!(jump.from, Some(10));
                assert_eq!(jump.to, 5);
                assert_eq!(jump.transition, Transition::Instant);
            }
        }
        assert_eq!(carousel.position(), Some(5));
        assert_eq!(carousel.logical_page(), 0);
    }

    #[test]
    fn due_ticks_skip_while_scrolling() {
        let mut carousel = five();
        carousel.ensure_initialized();
        carousel.enable_auto_advance(interval(1000));
        assert!(carousel.tick(0).is_none());

        carousel.set_phase(ScrollPhase::Dragging);
        assert!(carousel.tick(1000).is_none());
        assert_eq!(carousel.position(), Some(5));
        carousel.set_phase(ScrollPhase::Idle);

        // The skipped tick was consumed; the next fires a full interval on.
        assert!(carousel.tick(1100).is_none());
        assert_eq!(carousel.tick(2000).unwrap().to, 6);
    }

    #[test]
    fn ticks_defer_while_a_correction_is_pending() {
        let mut carousel = five();
        carousel.ensure_initialized();
        carousel.enable_auto_advance(interval(100));
        assert!(carousel.tick(0).is_none());

        // The position drifted into the trailing band and no idle report
        // has arrived yet; the cadence must not pile a step on top.
        carousel.set_position(14);
        assert!(carousel.tick(100).is_none());
        assert_eq!(carousel.position(), Some(14));

        carousel.settle();
        assert_eq!(carousel.tick(200).unwrap().to, 10);
    }

    #[test]
    fn ticks_wait_for_first_layout() {
        let mut carousel = five();
        carousel.enable_auto_advance(interval(100));
        assert!(carousel.tick(0).is_none());
        assert!(carousel.tick(100).is_none());
        assert_eq!(carousel.position(), None);
    }

    #[test]
    fn cancelling_stops_the_cadence() {
        let mut carousel = five();
        carousel.ensure_initialized();
        carousel.enable_auto_advance(interval(100));
        assert!(carousel.tick(0).is_none());

        assert!(carousel.cancel_auto_advance());
        assert!(carousel.auto_advance().is_none());
        assert!(carousel.tick(100).is_none());
        assert!(carousel.tick(10_000).is_none());
        assert!(!carousel.cancel_auto_advance());

        // Re-enabling starts a fresh cadence.
        carousel.enable_auto_advance(interval(100));
        assert!(carousel.tick(20_000).is_none());
        assert_eq!(carousel.tick(20_100).unwrap().to, 6);
    }
}
