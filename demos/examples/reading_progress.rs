// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Continue-reading cards at 90% of the container width.
//!
//! Cards resolve `RelativeLength::Fraction(0.9)` against the container and
//! sit centered; the statistics box at the bottom uses `0.85` of the same
//! width. Progress bars pick their accent color from completion thresholds.
//!
//! Run:
//! - `cargo run -p canopy_demos --example reading_progress`

use canopy_demos::TextCanvas;
use canopy_demos::catalog::PROGRESS;
use canopy_demos::text::{last_read_label, percent_label, progress_bar};
use canopy_frame::RelativeLength;
use kurbo::Rect;

const CARD_HEIGHT: f64 = 100.0;
const CARD_GAP: f64 = 12.0;

fn main() {
    let width = 360.0;
    let card_width = RelativeLength::Fraction(0.9).resolve(width);
    let stats_width = RelativeLength::Fraction(0.85).resolve(width);
    println!(
        "Cards are {card_width:.0} wide (90% of {width:.0}), the stats box {stats_width:.0} (85%).\n"
    );

    let cards = PROGRESS;
    let stats_height = 80.0;
    let height = cards.len() as f64 * (CARD_HEIGHT + CARD_GAP) + stats_height;
    let mut canvas = TextCanvas::new(Rect::new(0.0, 0.0, width, height), 6.0, 20.0);

    for (i, entry) in cards.iter().enumerate() {
        let y = i as f64 * (CARD_HEIGHT + CARD_GAP);
        let x = (width - card_width) / 2.0;
        let rect = Rect::new(x, y, x + card_width, y + CARD_HEIGHT);
        canvas.stroke(rect);

        if entry.is_completed() {
            canvas.label(rect, 0, &format!("{}  << COMPLETED >>", entry.title));
        } else {
            canvas.label(rect, 0, entry.title);
        }
        canvas.label(
            rect,
            1,
            &format!(
                "Ch {} / {} - {} left - last read {}",
                entry.current_chapter,
                entry.total_chapters,
                entry.remaining(),
                last_read_label(entry.days_since_read)
            ),
        );
        canvas.label(
            rect,
            2,
            &format!(
                "{} {} ({})",
                progress_bar(entry.rate(), 24),
                percent_label(entry.rate()),
                entry.bar_color()
            ),
        );
    }

    // Totals strip, slightly narrower than the cards.
    let reading = cards.iter().filter(|p| !p.is_completed()).count();
    let completed = cards.len() - reading;
    let chapters_read: u32 = cards.iter().map(|p| p.current_chapter).sum();

    let y = cards.len() as f64 * (CARD_HEIGHT + CARD_GAP) + 10.0;
    let x = (width - stats_width) / 2.0;
    let stats = Rect::new(x, y, x + stats_width, y + stats_height - 20.0);
    canvas.stroke(stats);
    canvas.label(stats, 0, "Library");
    canvas.label(
        stats,
        1,
        &format!("Reading {reading} - Completed {completed} - Chapters read {chapters_read}"),
    );

    print!("{}", canvas.render());
}
