// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement of a dense strip of equally-sized items inside a container.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Rect;

use crate::{Axis, RelativeLength};

/// Alignment anchor for snapped scroll positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapAlign {
    /// Align the start (leading/top edge) of the item with the viewport.
    /// Paging over full-container items is this anchor with a step equal to
    /// the viewport.
    Start,
    /// Center the item within the viewport.
    Center,
}

/// A dense strip of `len` identically-sized items laid out along one axis of
/// a container, separated by a uniform gap.
///
/// The container doubles as the viewport: items are sized by resolving a
/// [`RelativeLength`] against the container's extent on the strip axis, and
/// positioned in container space offset by a scroll amount. The cross axis is
/// always filled.
///
/// This type knows nothing about views or gesture handling; hosts feed it a
/// scroll offset and draw the rects it hands back. When the item rule is a
/// [`RelativeLength::Division`] whose `spacing` equals the strip's `gap`,
/// consecutive items land exactly on the division's column grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Strip {
    container: Rect,
    axis: Axis,
    length: RelativeLength,
    gap: f64,
    len: usize,
}

impl Strip {
    /// Creates a strip of `len` items sized by `length` along `axis` of
    /// `container`, with `gap` between consecutive items.
    ///
    /// Negative gaps clamp to zero; non-finite gaps or containers are
    /// debug-asserted.
    #[must_use]
    pub fn new(container: Rect, axis: Axis, length: RelativeLength, gap: f64, len: usize) -> Self {
        debug_assert!(
            container.is_finite(),
            "Strip containers must be finite; got {container:?}"
        );
        debug_assert!(gap.is_finite(), "Strip gaps must be finite; got {gap:?}");
        Self {
            container: container.abs(),
            axis,
            length,
            gap: if gap.is_finite() { gap.max(0.0) } else { 0.0 },
            len,
        }
    }

    /// Returns the container rect.
    #[must_use]
    pub const fn container(&self) -> Rect {
        self.container
    }

    /// Returns the strip axis.
    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// Returns the item length rule.
    #[must_use]
    pub const fn length(&self) -> RelativeLength {
        self.length
    }

    /// Returns the gap between consecutive items.
    #[must_use]
    pub const fn gap(&self) -> f64 {
        self.gap
    }

    /// Returns the number of items.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the strip has no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the viewport extent along the strip axis.
    #[must_use]
    pub fn viewport_extent(&self) -> f64 {
        self.axis.extent_of(self.container)
    }

    /// Returns the resolved extent of one item.
    #[must_use]
    pub fn item_extent(&self) -> f64 {
        self.length.resolve(self.viewport_extent())
    }

    /// Returns the distance between the starts of consecutive items.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.item_extent() + self.gap
    }

    /// Returns the total content extent: `len` items and `len - 1` gaps.
    #[must_use]
    pub fn content_extent(&self) -> f64 {
        if self.len == 0 {
            return 0.0;
        }
        self.item_extent() * self.len as f64 + self.gap * (self.len - 1) as f64
    }

    /// Returns the largest useful scroll offset: content extent minus the
    /// viewport, floored at zero.
    #[must_use]
    pub fn max_scroll_offset(&self) -> f64 {
        (self.content_extent() - self.viewport_extent()).max(0.0)
    }

    /// Clamps a raw scroll offset into `[0, max_scroll_offset]`.
    ///
    /// Non-finite offsets are debug-asserted and clamp to zero.
    #[must_use]
    pub fn clamp_scroll_offset(&self, offset: f64) -> f64 {
        debug_assert!(
            offset.is_finite(),
            "scroll offsets must be finite; got {offset:?}"
        );
        if !offset.is_finite() {
            return 0.0;
        }
        offset.clamp(0.0, self.max_scroll_offset())
    }

    /// Returns the content-space start of item `index`.
    #[must_use]
    pub fn offset_of(&self, index: usize) -> f64 {
        index as f64 * self.step()
    }

    /// Returns the clamped scroll offset that aligns item `index` with the
    /// viewport's `align` anchor.
    ///
    /// Out-of-range indices clamp to the last item.
    #[must_use]
    pub fn offset_for(&self, index: usize, align: SnapAlign) -> f64 {
        if self.len == 0 {
            return 0.0;
        }
        let index = index.min(self.len - 1);
        let start = self.offset_of(index);
        let raw = match align {
            SnapAlign::Start => start,
            SnapAlign::Center => start + self.item_extent() / 2.0 - self.viewport_extent() / 2.0,
        };
        raw.clamp(0.0, self.max_scroll_offset())
    }

    /// Returns the snap target for a raw gesture offset: the index whose
    /// `align` anchor lies nearest to the viewport's.
    ///
    /// This is the inverse of [`Strip::offset_for`] wherever that offset did
    /// not clamp. Empty strips return `0`.
    #[must_use]
    pub fn nearest_index(&self, offset: f64, align: SnapAlign) -> usize {
        let step = self.step();
        if self.len == 0 || step <= 0.0 || !offset.is_finite() {
            return 0;
        }
        let anchor = match align {
            SnapAlign::Start => offset,
            SnapAlign::Center => {
                offset + self.viewport_extent() / 2.0 - self.item_extent() / 2.0
            }
        };
        let nearest = (anchor / step).round();
        if nearest <= 0.0 {
            return 0;
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Index is clamped to bounds immediately after the cast"
        )]
        let nearest = nearest as usize;
        nearest.min(self.len - 1)
    }

    /// Returns the viewport-space rect of item `index` at the given scroll
    /// offset. The cross axis fills the container.
    #[must_use]
    pub fn rect_of(&self, index: usize, scroll_offset: f64) -> Rect {
        let main_start = self.axis.start_of(self.container) + self.offset_of(index) - scroll_offset;
        let cross = match self.axis {
            Axis::Horizontal => self.container.y0..self.container.y1,
            Axis::Vertical => self.container.x0..self.container.x1,
        };
        self.axis.rect_from(main_start, self.item_extent(), cross)
    }

    /// Returns the `[start, end)` range of items whose rects intersect the
    /// viewport at the given scroll offset.
    #[must_use]
    pub fn visible_range(&self, scroll_offset: f64) -> core::ops::Range<usize> {
        let step = self.step();
        let extent = self.item_extent();
        if self.len == 0 || step <= 0.0 || !scroll_offset.is_finite() {
            return 0..0;
        }
        let top = scroll_offset.max(0.0);
        let bottom = scroll_offset + self.viewport_extent();
        if bottom <= 0.0 || top >= self.content_extent() {
            return 0..0;
        }

        #[allow(
            clippy::cast_possible_truncation,
            reason = "Indices are clamped to bounds immediately after the cast"
        )]
        let mut start = ((top / step).floor().max(0.0) as usize).min(self.len - 1);
        // The offset can land in the gap after an item, in which case that
        // item has already scrolled out.
        if self.offset_of(start) + extent <= top {
            start = (start + 1).min(self.len - 1);
        }

        #[allow(
            clippy::cast_possible_truncation,
            reason = "Indices are clamped to bounds immediately after the cast"
        )]
        let last = ((bottom / step).floor().max(0.0) as usize).min(self.len - 1);
        // An item starting exactly at the bottom edge is not yet visible.
        let end = if self.offset_of(last) < bottom {
            last + 1
        } else {
            last
        };

        start..end.max(start)
    }
}

#[cfg(test)]
mod tests {
    use super::{SnapAlign, Strip};
    use crate::{Axis, RelativeLength};
    use core::num::NonZeroUsize;
    use kurbo::Rect;

    fn nz(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "expected {a} to be close to {b}");
    }

    fn pager() -> Strip {
        // Ten full-width pages, no gap: each step is one viewport.
        Strip::new(
            Rect::new(0.0, 0.0, 360.0, 640.0),
            Axis::Horizontal,
            RelativeLength::Fill,
            0.0,
            10,
        )
    }

    fn shelf() -> Strip {
        Strip::new(
            Rect::new(0.0, 0.0, 520.0, 220.0),
            Axis::Horizontal,
            RelativeLength::Division {
                count: nz(5),
                span: nz(4),
                spacing: 16.0,
            },
            16.0,
            8,
        )
    }

    #[test]
    fn extents_and_steps() {
        let pages = pager();
        assert_eq!(pages.item_extent(), 360.0);
        assert_eq!(pages.step(), 360.0);
        assert_eq!(pages.content_extent(), 3600.0);
        assert_eq!(pages.max_scroll_offset(), 3600.0 - 360.0);

        let shelf = shelf();
        let unit = (520.0 - 4.0 * 16.0) / 5.0;
        assert_close(shelf.item_extent(), 4.0 * unit + 3.0 * 16.0);
        assert_close(shelf.step(), shelf.item_extent() + 16.0);
    }

    #[test]
    fn paging_offsets_align_starts() {
        let pages = pager();
        assert_eq!(pages.offset_for(0, SnapAlign::Start), 0.0);
        assert_eq!(pages.offset_for(3, SnapAlign::Start), 3.0 * 360.0);
        // Past-the-end indices clamp to the last page.
        assert_eq!(pages.offset_for(99, SnapAlign::Start), 9.0 * 360.0);
    }

    #[test]
    fn snap_inverts_alignment() {
        let shelf = shelf();
        for align in [SnapAlign::Start, SnapAlign::Center] {
            for i in 2..6 {
                let offset = shelf.offset_for(i, align);
                assert_eq!(shelf.nearest_index(offset, align), i);
            }
        }
        // A drag released a little short of the next card still snaps to it.
        let near_three = shelf.offset_for(3, SnapAlign::Start) - 30.0;
        assert_eq!(shelf.nearest_index(near_three, SnapAlign::Start), 3);
    }

    #[test]
    fn centered_steps_are_translation_invariant() {
        // Three copies of five cards: moving one copy forward shifts the
        // centered offset by exactly five steps, so the two positions render
        // identically.
        let strip = Strip::new(
            Rect::new(0.0, 0.0, 520.0, 220.0),
            Axis::Horizontal,
            RelativeLength::Division {
                count: nz(5),
                span: nz(4),
                spacing: 16.0,
            },
            16.0,
            15,
        );
        let a = strip.offset_for(6, SnapAlign::Center);
        let b = strip.offset_for(11, SnapAlign::Center);
        assert_close(b - a, 5.0 * strip.step());
    }

    #[test]
    fn rects_are_viewport_relative() {
        let pages = pager();
        let scrolled = pages.offset_for(1, SnapAlign::Start);
        let rect = pages.rect_of(1, scrolled);
        assert_eq!(rect, Rect::new(0.0, 0.0, 360.0, 640.0));
        // The following page waits just off the right edge.
        let next = pages.rect_of(2, scrolled);
        assert_eq!(next.x0, 360.0);
    }

    #[test]
    fn vertical_hero_banner() {
        let screen = Rect::new(0.0, 0.0, 390.0, 800.0);
        let hero = Strip::new(screen, Axis::Vertical, RelativeLength::Fraction(0.4), 0.0, 1);
        let rect = hero.rect_of(0, 0.0);
        assert_eq!(rect, Rect::new(0.0, 0.0, 390.0, 320.0));
        // Content shorter than the viewport never scrolls.
        assert_eq!(hero.max_scroll_offset(), 0.0);
        assert_eq!(hero.offset_for(0, SnapAlign::Center), 0.0);
    }

    #[test]
    fn visible_range_tracks_the_viewport() {
        let pages = pager();
        assert_eq!(pages.visible_range(0.0), 0..1);
        // Mid-swipe both neighbors show.
        assert_eq!(pages.visible_range(180.0), 0..2);
        assert_eq!(pages.visible_range(360.0), 1..2);
        assert_eq!(pages.visible_range(pages.max_scroll_offset()), 9..10);

        let shelf = shelf();
        // An 80%-width card always leaves room for the next one to peek.
        let range = shelf.visible_range(shelf.offset_for(2, SnapAlign::Start));
        assert_eq!(range, 2..4);
    }

    #[test]
    fn visible_range_skips_items_ending_in_the_gap() {
        let strip = Strip::new(
            Rect::new(0.0, 0.0, 100.0, 50.0),
            Axis::Horizontal,
            RelativeLength::Fraction(0.4),
            20.0,
            5,
        );
        // Item 0 spans [0, 40); offset 45 sits in the gap after it.
        assert_eq!(strip.visible_range(45.0), 1..3);
    }

    #[test]
    fn empty_and_degenerate_strips() {
        let empty = Strip::new(
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Axis::Horizontal,
            RelativeLength::Fill,
            8.0,
            0,
        );
        assert!(empty.is_empty());
        assert_eq!(empty.content_extent(), 0.0);
        assert_eq!(empty.max_scroll_offset(), 0.0);
        assert_eq!(empty.visible_range(0.0), 0..0);
        assert_eq!(empty.nearest_index(500.0, SnapAlign::Start), 0);

        // Negative gaps clamp to zero.
        let clamped = Strip::new(
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Axis::Horizontal,
            RelativeLength::Fill,
            -4.0,
            2,
        );
        assert_eq!(clamped.gap(), 0.0);
    }
}
