// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_carousel --heading-base-level=0

//! Canopy Carousel: a position model for seamlessly looping carousels.
//!
//! This crate provides a small, renderer-agnostic core for the classic
//! infinite-carousel trick: lay the items out three times in a row, let the
//! user scroll freely, and whenever the view comes to rest outside the
//! middle copy, jump to the identical-looking slot in the middle copy with
//! no animation. Done at rest between content-equal positions, the jump is
//! imperceptible and the carousel appears endless in both directions.
//!
//! The core concepts are:
//!
//! - [`Slot`], [`SlotId`], [`Band`]: the tripled virtual sequence and the
//!   stable identity of each copy, for hosts with view recycling.
//! - [`Carousel`]: the controller. It owns the items, the virtual position,
//!   the host-reported [`ScrollPhase`], and the optional [`AutoAdvance`]
//!   cadence.
//! - [`PositionChange`] and [`Transition`]: every mutation that moves the
//!   position says whether the host must animate it ([`Transition::Animated`],
//!   the visible auto-advance step) or apply it with no animation at all
//!   ([`Transition::Instant`], first layout and boundary corrections).
//! - [`AutoAdvance`]: a fixed-interval cadence polled with caller-supplied
//!   millisecond timestamps. It owns no thread or task; dropping the
//!   carousel is all the teardown there is.
//!
//! This crate deliberately does **not** scroll, animate, or measure
//! anything. Host frameworks lay out the slots from [`Carousel::slots`]
//! (for example with a placement strip), write gesture positions back via
//! [`Carousel::set_position`], report scroll activity via
//! [`Carousel::set_phase`], and poll [`Carousel::tick`] from their event
//! loop.
//!
//! ## Minimal example
//!
//! ```rust
//! use canopy_carousel::{Carousel, ScrollPhase, Transition};
//!
//! let mut carousel = Carousel::new(vec!["a", "b", "c", "d", "e"]).unwrap();
//!
//! // The host lays out 15 slots and parks the view on the middle copy.
//! assert_eq!(carousel.virtual_len(), 15);
//! let start = carousel.ensure_initialized().unwrap();
//! assert_eq!(start.to, 5);
//! assert_eq!(carousel.logical_page(), 0);
//!
//! // A swipe back past the start comes to rest in the leading copy ...
//! carousel.set_phase(ScrollPhase::Dragging);
//! carousel.set_position(4);
//! carousel.set_phase(ScrollPhase::Settling);
//!
//! // ... and the idle report pulls it back to the identical middle slot.
//! let jump = carousel.set_phase(ScrollPhase::Idle).unwrap();
//! assert_eq!((jump.from, jump.to), (Some(4), 9));
//! assert_eq!(jump.transition, Transition::Instant);
//! assert_eq!(carousel.logical_page(), 4);
//! ```
//!
//! Auto-advance is the same machinery on a clock: [`Carousel::tick`] steps
//! one slot forward per interval with an animated change, skips while the
//! user is scrolling, and relies on the ordinary idle-report correction
//! when a step crosses out of the middle copy.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod auto_advance;
mod carousel;
mod slot;
mod transition;

pub use auto_advance::AutoAdvance;
pub use carousel::{Carousel, EmptyCarousel};
pub use slot::{Band, Slot, SlotId};
pub use transition::{PositionChange, ScrollPhase, Transition};
