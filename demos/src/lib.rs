// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared glue for the Canopy demo binaries.
//!
//! The demos are six headless screens from a fictional comic-reader app,
//! each showing container-relative sizing (and, in the carousel's case, the
//! looping position model) driven to stdout:
//!
//! - `page_viewer`: full-width pages with paging snap.
//! - `thumbnail_grid`: a three-column chapter grid.
//! - `release_shelf`: 80%-width cards with the next card peeking in.
//! - `cover_detail`: a fraction-of-height hero banner over detail rows.
//! - `reading_progress`: 90%-width progress cards and an 85%-width stats box.
//! - `infinite_carousel`: the tripled-sequence carousel with auto-advance.
//!
//! Run any of them with `cargo run -p canopy_demos --example <name>`.
//!
//! This crate holds what the screens share: the sample catalog, a
//! character-cell canvas for rasterizing [`kurbo::Rect`]s onto a text grid,
//! and small formatting helpers.

pub mod canvas;
pub mod catalog;
pub mod text;

pub use canvas::TextCanvas;
