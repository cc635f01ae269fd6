// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The looping hero carousel: tripled layout, invisible wrap, auto-advance.
//!
//! Five featured series are laid out three times over (15 virtual slots) and
//! the scroll position rests in the middle copy. Swipes and auto-advance
//! steps that drift into an outer copy are pulled back to the middle once the
//! scroll is at rest; the two positions render pixel-identical frames, so the
//! loop never shows a seam.
//!
//! Run:
//! - `cargo run -p canopy_demos --example infinite_carousel`

use canopy_carousel::{Carousel, PositionChange, ScrollPhase, Transition};
use canopy_demos::TextCanvas;
use canopy_demos::catalog::{Comic, EDITORS_PICKS, FEATURED};
use canopy_demos::text::page_dots;
use canopy_frame::{Axis, RelativeLength, SnapAlign, Strip};
use core::num::{NonZeroU64, NonZeroUsize};
use kurbo::Rect;
use std::thread;
use std::time::{Duration, Instant};

/// Auto-advance cadence. The app uses three seconds; the demo is brisker.
const INTERVAL_MS: u64 = 900;

fn hero_strip(viewport: Rect, virtual_len: usize) -> Strip {
    let cards = RelativeLength::Division {
        count: NonZeroUsize::new(5).unwrap(),
        span: NonZeroUsize::new(4).unwrap(),
        spacing: 16.0,
    };
    Strip::new(viewport, Axis::Horizontal, cards, 16.0, virtual_len)
}

fn describe(carousel: &Carousel<Comic>, strip: &Strip, change: PositionChange) {
    let kind = match change.transition {
        Transition::Animated => "animated",
        Transition::Instant => "instant",
    };
    let from = change
        .from
        .map_or_else(|| "unset".to_string(), |p| p.to_string());
    println!(
        "  {kind:>8}  {from:>5} -> {:<2}  offset {:>6.1}  {}  {}",
        change.to,
        strip.offset_for(change.to, SnapAlign::Center),
        page_dots(carousel.len(), carousel.logical_page()),
        carousel.current_item().title
    );
}

fn frame_at(carousel: &Carousel<Comic>, strip: &Strip, position: usize) -> String {
    let offset = strip.offset_for(position, SnapAlign::Center);
    let mut canvas = TextCanvas::new(strip.container(), 6.0, 20.0);
    for index in strip.visible_range(offset) {
        let Some(slot) = carousel.slot(index) else {
            continue;
        };
        let rect = strip.rect_of(index, offset);
        canvas.stroke(rect);
        canvas.label(rect, 0, slot.item.title);
        canvas.label(rect, 1, slot.item.blurb);
        canvas.label(rect, 2, slot.item.author);
    }
    canvas.render()
}

fn main() {
    let Ok(mut featured) = Carousel::new(FEATURED.to_vec()) else {
        return;
    };
    let viewport = Rect::new(0.0, 0.0, 360.0, 240.0);
    let strip = hero_strip(viewport, featured.virtual_len());

    println!(
        "Featured: {} series tripled into {} slots; cards {:.1} wide, step {:.1}.",
        featured.len(),
        featured.virtual_len(),
        strip.item_extent(),
        strip.step()
    );

    // Every copy of an item keeps its own identity, so a recycling host can
    // hold three live views of one series without aliasing them.
    let keys: Vec<String> = featured
        .slots()
        .filter(|slot| slot.id.original == 0)
        .map(|slot| slot.id.key(slot.item.title))
        .collect();
    println!("Slot keys of the first series: {}.", keys.join(", "));

    println!("\n== First layout: centered on the middle copy ==");
    if let Some(change) = featured.ensure_initialized() {
        describe(&featured, &strip, change);
        print!("{}", frame_at(&featured, &strip, change.to));
    }

    println!("\n== Auto-advance on a {INTERVAL_MS} ms cadence ==");
    if let Some(interval) = NonZeroU64::new(INTERVAL_MS) {
        featured.enable_auto_advance(interval);
    }

    // The demo's event loop: a monotonic clock polled between short sleeps,
    // standing in for the host's frame callbacks.
    let clock = Instant::now();
    let now_ms = move || u64::try_from(clock.elapsed().as_millis()).unwrap_or(u64::MAX);

    // The first poll only arms the cadence.
    featured.tick(now_ms());
    let mut wrapped = false;
    while !wrapped {
        thread::sleep(Duration::from_millis(40));
        let Some(step) = featured.tick(now_ms()) else {
            continue;
        };
        describe(&featured, &strip, step);

        // The host animates the step, then reports the scroll settling out.
        featured.set_phase(ScrollPhase::Settling);
        thread::sleep(Duration::from_millis(150));
        if let Some(jump) = featured.set_phase(ScrollPhase::Idle) {
            // The fifth step landed in the trailing copy; at rest it is
            // pulled back to the middle slot showing the same series.
            describe(&featured, &strip, jump);
            if let Some(from) = jump.from {
                let seam = frame_at(&featured, &strip, from)
                    == frame_at(&featured, &strip, jump.to);
                println!("  both ends of the jump render the same frame: {seam}");
            }
            wrapped = true;
        }
    }

    println!("\n== Editors' picks: manual swipes only ==");
    let Ok(mut picks) = Carousel::new(EDITORS_PICKS.to_vec()) else {
        return;
    };
    let picks_strip = hero_strip(viewport, picks.virtual_len());
    if let Some(change) = picks.ensure_initialized() {
        describe(&picks, &picks_strip, change);
    }

    // A swipe back from the first page: the drag crosses into the leading
    // copy and the release snaps one card to the left.
    picks.set_phase(ScrollPhase::Dragging);
    let release = picks_strip.offset_for(4, SnapAlign::Center) - 0.6 * picks_strip.step();
    let snapped = picks_strip.nearest_index(release, SnapAlign::Center);
    picks.set_position(snapped);
    println!(
        "  drag released at offset {release:.1} snaps to slot {snapped} (page {})",
        picks.logical_page() + 1
    );
    picks.set_phase(ScrollPhase::Settling);
    if let Some(jump) = picks.set_phase(ScrollPhase::Idle) {
        describe(&picks, &picks_strip, jump);
    }

    // Sections with nothing to show never construct; hosts skip them.
    if let Err(error) = Carousel::<Comic>::new(Vec::new()) {
        println!("\nAn empty section is skipped up front: {error}.");
    }

    println!("\n== Teardown ==");
    println!("  cadence cancelled: {}", featured.cancel_auto_advance());
    println!("  later polls step: {}", featured.tick(now_ms() + 60_000).is_some());
}
