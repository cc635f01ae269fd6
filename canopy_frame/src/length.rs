// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Length rules resolved against a container extent.

use core::num::NonZeroUsize;

use kurbo::Rect;

/// The container dimension a relative rule resolves against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Extents run along x; the cross axis is y.
    Horizontal,
    /// Extents run along y; the cross axis is x.
    Vertical,
}

impl Axis {
    /// Returns the extent of `rect` along this axis.
    #[must_use]
    pub fn extent_of(self, rect: Rect) -> f64 {
        match self {
            Self::Horizontal => rect.width(),
            Self::Vertical => rect.height(),
        }
    }

    /// Returns the extent of `rect` across this axis.
    #[must_use]
    pub fn cross_extent_of(self, rect: Rect) -> f64 {
        match self {
            Self::Horizontal => rect.height(),
            Self::Vertical => rect.width(),
        }
    }

    /// Returns the start coordinate of `rect` along this axis.
    #[must_use]
    pub fn start_of(self, rect: Rect) -> f64 {
        match self {
            Self::Horizontal => rect.x0,
            Self::Vertical => rect.y0,
        }
    }

    /// Builds a rect from a start coordinate and extent along this axis,
    /// spanning `cross` on the other axis.
    #[must_use]
    pub fn rect_from(self, start: f64, extent: f64, cross: core::ops::Range<f64>) -> Rect {
        match self {
            Self::Horizontal => Rect::new(start, cross.start, start + extent, cross.end),
            Self::Vertical => Rect::new(cross.start, start, cross.end, start + extent),
        }
    }
}

/// A length defined as a rule over a container extent.
///
/// These are the three shapes of container-relative sizing the demo screens
/// use. All of them resolve to a concrete extent only once a container is
/// known, so the same rule can serve containers of any size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RelativeLength {
    /// The full container extent.
    Fill,
    /// A fixed fraction of the container extent.
    ///
    /// Fractions above `1.0` are allowed and resolve wider than the
    /// container; negative or non-finite fractions resolve to zero.
    Fraction(f64),
    /// A span of columns in an evenly divided container.
    ///
    /// The container is divided into `count` columns separated by `spacing`.
    /// An item covers `span` adjacent columns *plus* the `span - 1` gaps
    /// between them, so `span == count` tiles the container exactly and
    /// `count: 5, span: 4` yields the "next card peeks in" card width.
    Division {
        /// Number of columns the container is divided into.
        count: NonZeroUsize,
        /// Number of adjacent columns one item covers.
        span: NonZeroUsize,
        /// Gap between adjacent columns.
        spacing: f64,
    },
}

impl RelativeLength {
    /// Divides the container into `count` columns with `spacing` between
    /// them, one column per item.
    #[must_use]
    pub const fn columns(count: NonZeroUsize, spacing: f64) -> Self {
        Self::Division {
            count,
            span: NonZeroUsize::MIN,
            spacing,
        }
    }

    /// Resolves this rule against a container extent.
    ///
    /// The result is always finite and non-negative: spacing wider than the
    /// container clamps to zero-extent items rather than going negative.
    /// Non-finite container extents or fractions are debug-asserted and
    /// resolve to zero.
    #[must_use]
    pub fn resolve(self, container_extent: f64) -> f64 {
        debug_assert!(
            container_extent.is_finite(),
            "RelativeLength container extents must be finite; got {container_extent:?}"
        );
        if !container_extent.is_finite() || container_extent <= 0.0 {
            return 0.0;
        }
        let resolved = match self {
            Self::Fill => container_extent,
            Self::Fraction(factor) => {
                debug_assert!(
                    factor.is_finite(),
                    "RelativeLength fractions must be finite; got {factor:?}"
                );
                if factor.is_finite() {
                    container_extent * factor
                } else {
                    0.0
                }
            }
            Self::Division {
                count,
                span,
                spacing,
            } => {
                debug_assert!(
                    spacing.is_finite(),
                    "RelativeLength spacing must be finite; got {spacing:?}"
                );
                if !spacing.is_finite() {
                    return 0.0;
                }
                let count = count.get() as f64;
                let span = span.get() as f64;
                let unit = (container_extent - (count - 1.0) * spacing) / count;
                span * unit + (span - 1.0) * spacing
            }
        };
        resolved.max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{Axis, RelativeLength};
    use core::num::NonZeroUsize;
    use kurbo::Rect;

    fn nz(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "expected {a} to be close to {b}");
    }

    #[test]
    fn axis_extents() {
        let rect = Rect::new(10.0, 20.0, 370.0, 660.0);
        assert_eq!(Axis::Horizontal.extent_of(rect), 360.0);
        assert_eq!(Axis::Horizontal.cross_extent_of(rect), 640.0);
        assert_eq!(Axis::Vertical.extent_of(rect), 640.0);
        assert_eq!(Axis::Vertical.start_of(rect), 20.0);
    }

    #[test]
    fn axis_rect_from_round_trips() {
        let h = Axis::Horizontal.rect_from(5.0, 100.0, 0.0..40.0);
        assert_eq!(h, Rect::new(5.0, 0.0, 105.0, 40.0));
        let v = Axis::Vertical.rect_from(5.0, 100.0, 0.0..40.0);
        assert_eq!(v, Rect::new(0.0, 5.0, 40.0, 105.0));
    }

    #[test]
    fn fill_and_fraction() {
        assert_eq!(RelativeLength::Fill.resolve(360.0), 360.0);
        assert_eq!(RelativeLength::Fraction(0.4).resolve(800.0), 320.0);
        assert_eq!(RelativeLength::Fraction(0.9).resolve(400.0), 360.0);
        // Wider-than-container fractions are legal.
        assert_eq!(RelativeLength::Fraction(1.5).resolve(100.0), 150.0);
    }

    #[test]
    fn division_units_tile_the_container() {
        // Three columns with 8 between them: 3 units + 2 gaps == container.
        let cell = RelativeLength::columns(nz(3), 8.0).resolve(360.0);
        assert_close(cell * 3.0 + 2.0 * 8.0, 360.0);

        // Five columns, span four: the fifth column peeks past the item.
        let card = RelativeLength::Division {
            count: nz(5),
            span: nz(4),
            spacing: 16.0,
        }
        .resolve(520.0);
        let unit = (520.0 - 4.0 * 16.0) / 5.0;
        assert_close(card, 4.0 * unit + 3.0 * 16.0);
        assert!(card < 520.0);

        // Spanning every column resolves to the full container.
        let full = RelativeLength::Division {
            count: nz(5),
            span: nz(5),
            spacing: 16.0,
        }
        .resolve(520.0);
        assert_close(full, 520.0);
    }

    #[test]
    fn degenerate_inputs_clamp_to_zero() {
        assert_eq!(RelativeLength::Fill.resolve(0.0), 0.0);
        assert_eq!(RelativeLength::Fill.resolve(-200.0), 0.0);
        assert_eq!(RelativeLength::Fraction(-0.5).resolve(100.0), 0.0);
        // Spacing wider than the container would go negative; it clamps.
        assert_eq!(RelativeLength::columns(nz(3), 400.0).resolve(100.0), 0.0);
    }
}
