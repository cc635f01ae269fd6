// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Full-width comic pages with paging snap and a page indicator.
//!
//! Every page takes the whole container width (`RelativeLength::Fill`),
//! so one step of the strip is exactly one viewport and start-aligned
//! snapping behaves like paging.
//!
//! Run:
//! - `cargo run -p canopy_demos --example page_viewer`

use canopy_demos::TextCanvas;
use canopy_demos::catalog::PAGE_COUNT;
use canopy_frame::{Axis, RelativeLength, SnapAlign, Strip};
use kurbo::Rect;

fn indicator(page: usize, total: usize) -> String {
    let prev = if page > 0 { "[< prev]" } else { "(  prev )" };
    let next = if page + 1 < total { "[next >]" } else { "( next  )" };
    format!("{prev}  {} / {total}  {next}", page + 1)
}

fn draw(strip: &Strip, offset: f64) {
    let mut canvas = TextCanvas::new(strip.container(), 6.0, 20.0);
    for index in strip.visible_range(offset) {
        let rect = strip.rect_of(index, offset);
        canvas.stroke(rect);
        canvas.label(rect, 0, "Ashfall Chronicle, Ch. 142");
        canvas.label(rect, 1, &format!("~ page {} art ~", index + 1));
    }
    print!("{}", canvas.render());
}

fn main() {
    let container = Rect::new(0.0, 0.0, 360.0, 200.0);
    let strip = Strip::new(container, Axis::Horizontal, RelativeLength::Fill, 0.0, PAGE_COUNT);

    println!(
        "Page viewer: {} pages, each {} wide (the full container), step {}.",
        strip.len(),
        strip.item_extent(),
        strip.step()
    );

    // Opening spread: the prev button is disabled on page one.
    let mut page = 0;
    println!("\n{}", indicator(page, PAGE_COUNT));
    draw(&strip, strip.offset_for(page, SnapAlign::Start));

    // Tap "next" three times.
    page += 3;
    let offset = strip.offset_for(page, SnapAlign::Start);
    println!("After three taps of next:\n\n{}", indicator(page, PAGE_COUNT));
    draw(&strip, offset);

    // A drag released partway snaps to the nearest page boundary.
    let release = offset + 140.0;
    let snapped = strip.nearest_index(release, SnapAlign::Start);
    println!(
        "A drag released at offset {release:.0} snaps to page {} (offset {:.0}).",
        snapped + 1,
        strip.offset_for(snapped, SnapAlign::Start)
    );

    // The last page disables the next button.
    page = PAGE_COUNT - 1;
    println!("\nJump to the end:\n\n{}", indicator(page, PAGE_COUNT));
    draw(&strip, strip.offset_for(page, SnapAlign::Start));
}
