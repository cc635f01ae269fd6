// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_frame --heading-base-level=0

//! Canopy Frame: container-relative sizing primitives.
//!
//! This crate provides a small, renderer-agnostic core for sizing content
//! against the container it scrolls in, and for placing a dense strip of
//! identically-sized items inside that container. It is built on [`kurbo`]
//! geometry and intended to be shared across UI stacks.
//!
//! The core concepts are:
//!
//! - [`Axis`]: which container dimension extents run along.
//! - [`RelativeLength`]: a rule that resolves to a concrete extent only once
//!   a container is known: fill it, take a fraction of it, or take a span
//!   of an evenly divided column grid over it.
//! - [`Strip`]: `len` items sized by one [`RelativeLength`] along one axis,
//!   separated by a uniform gap, with the container doubling as the
//!   viewport. It answers the questions scrolling hosts ask: where does item
//!   `i` land at this scroll offset, which offset snaps item `i` to an
//!   anchor, which item does a raw offset snap to, and which items are
//!   visible at all.
//! - [`SnapAlign`]: the anchor snapped scrolling aligns, either item start
//!   (paging, leading-aligned shelves) or item center (carousels).
//!
//! This crate deliberately does **not** know about widgets, gestures, or any
//! particular UI framework. Host frameworks own their views, feed scroll
//! offsets in, and draw the rects that come back.
//!
//! ## Minimal example
//!
//! An 80%-width card shelf where the next card peeks in from the edge:
//!
//! ```rust
//! use core::num::NonZeroUsize;
//! use canopy_frame::{Axis, RelativeLength, SnapAlign, Strip};
//! use kurbo::Rect;
//!
//! let cards = RelativeLength::Division {
//!     count: NonZeroUsize::new(5).unwrap(),
//!     span: NonZeroUsize::new(4).unwrap(),
//!     spacing: 16.0,
//! };
//! let shelf = Strip::new(Rect::new(0.0, 0.0, 520.0, 220.0), Axis::Horizontal, cards, 16.0, 8);
//!
//! // Cards are narrower than the viewport, so a neighbor is always visible.
//! assert!(shelf.item_extent() < shelf.viewport_extent());
//!
//! // A drag released between cards snaps to the nearest leading edge.
//! let release = shelf.offset_for(3, SnapAlign::Start) - 40.0;
//! assert_eq!(shelf.nearest_index(release, SnapAlign::Start), 3);
//! ```
//!
//! The same rules express full-container pages (`RelativeLength::Fill` with
//! gap `0`), fraction-of-height hero banners ([`RelativeLength::Fraction`]
//! on [`Axis::Vertical`]), and fixed column grids
//! ([`RelativeLength::columns`]).

#![no_std]

extern crate alloc;

mod length;
mod strip;

pub use length::{Axis, RelativeLength};
pub use strip::{SnapAlign, Strip};
