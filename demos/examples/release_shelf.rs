// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal card shelves where the next card peeks in from the edge.
//!
//! Cards span four of five container columns
//! (`RelativeLength::Division { count: 5, span: 4, spacing: 16 }`), leaving
//! one column of the following card visible as a scroll affordance. Snapping
//! is start-aligned, and the shelf content is inset by a 16-unit margin.
//!
//! Run:
//! - `cargo run -p canopy_demos --example release_shelf`

use canopy_demos::TextCanvas;
use canopy_demos::catalog::{Comic, NEW_RELEASES, RECOMMENDED};
use canopy_demos::text::stars;
use canopy_frame::{Axis, RelativeLength, SnapAlign, Strip};
use core::num::NonZeroUsize;
use kurbo::Rect;

const MARGIN: f64 = 16.0;

fn card_rule() -> RelativeLength {
    RelativeLength::Division {
        count: NonZeroUsize::new(5).unwrap(),
        span: NonZeroUsize::new(4).unwrap(),
        spacing: 16.0,
    }
}

fn draw_section(title: &str, comics: &[Comic], snapped: usize) {
    // The content margin insets the scrollable area, like a horizontal
    // content inset on the scroll view.
    let viewport = Rect::new(0.0, 0.0, 360.0, 120.0);
    let content = viewport.inflate(-MARGIN, 0.0);
    let strip = Strip::new(content, Axis::Horizontal, card_rule(), 16.0, comics.len());
    let offset = strip.offset_for(snapped, SnapAlign::Start);

    println!(
        "== {title}: {} cards of {:.1} in a {:.0} viewport, snapped to card {} ==",
        strip.len(),
        strip.item_extent(),
        viewport.width(),
        snapped + 1
    );

    let mut canvas = TextCanvas::new(viewport, 5.0, 20.0);
    for index in strip.visible_range(offset) {
        let rect = strip.rect_of(index, offset);
        let comic = &comics[index];
        canvas.stroke(rect);
        canvas.label(rect, 0, comic.title);
        canvas.label(rect, 1, &format!("{} {:.1}", stars(comic.rating), comic.rating));
        canvas.label(rect, 2, comic.blurb);
        canvas.label(rect, 3, comic.author);
    }
    print!("{}", canvas.render());
    println!();
}

fn main() {
    let rule = card_rule();
    let content_width = 360.0 - 2.0 * MARGIN;
    println!(
        "Cards resolve to {:.1} of a {content_width:.0} content width (about {:.0}%).\n",
        rule.resolve(content_width),
        100.0 * rule.resolve(content_width) / content_width
    );

    draw_section("New releases", NEW_RELEASES, 0);

    // Swipe one card over: the strip is the same, only the offset moves.
    draw_section("New releases", NEW_RELEASES, 1);

    draw_section("Recommended for you", RECOMMENDED, 0);
}
