// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A detail page with a hero banner sized as a fraction of the container.
//!
//! The hero takes `RelativeLength::Fraction(0.4)` of the container *height*
//! (the vertical axis for a change); everything below it is ordinary
//! content: credits, a star row, review counts, genre tags, and a synopsis.
//!
//! Run:
//! - `cargo run -p canopy_demos --example cover_detail`

use canopy_demos::TextCanvas;
use canopy_demos::catalog::DETAIL;
use canopy_demos::text::{group_thousands, stars};
use canopy_frame::{Axis, RelativeLength};
use kurbo::Rect;

/// Greedy word wrap for the synopsis block.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

fn main() {
    let screen = Rect::new(0.0, 0.0, 390.0, 800.0);
    let hero_rule = RelativeLength::Fraction(0.4);
    let hero_height = hero_rule.resolve(Axis::Vertical.extent_of(screen));
    let hero = Axis::Vertical.rect_from(0.0, hero_height, 0.0..screen.width());

    println!(
        "Hero banner: 40% of a {:.0}-tall container = {hero_height:.0}.",
        screen.height()
    );
    // The rule, not the number, is what the layout keeps.
    println!(
        "The same rule on a 900-tall container would yield {:.0}.\n",
        hero_rule.resolve(900.0)
    );

    let detail = DETAIL;
    let mut canvas = TextCanvas::new(screen, 6.0, 20.0);

    canvas.stroke(hero);
    canvas.fill(Rect::new(0.0, 0.0, 390.0, hero_height / 2.0), ':');
    canvas.label(hero, 7, &format!("=== {} ===", detail.comic.title));

    // Credit columns under the hero.
    let credits = Rect::new(0.0, hero_height + 10.0, 390.0, hero_height + 110.0);
    canvas.stroke(credits);
    canvas.label(credits, 0, &format!("Story  {}", detail.comic.author));
    canvas.label(credits, 1, &format!("Art    {}", detail.artist));
    canvas.label(credits, 2, &format!("Chapters  {}", detail.total_chapters));
    canvas.label(
        credits,
        3,
        &format!(
            "{}  {:.1}  ({} reviews)",
            stars(detail.comic.rating),
            detail.comic.rating,
            group_thousands(detail.review_count)
        ),
    );

    // Genre tags and synopsis.
    let body = Rect::new(0.0, hero_height + 130.0, 390.0, 790.0);
    canvas.stroke(body);
    let tags: Vec<String> = detail.genres.iter().map(|g| format!("[{g}]")).collect();
    canvas.label(body, 0, &tags.join(" "));
    for (line, chunk) in wrap(detail.synopsis, 58).into_iter().enumerate() {
        canvas.label(body, 2 + line, &chunk);
    }
    canvas.label(body, 8, "( Start Reading )   ( Add to Library )");

    print!("{}", canvas.render());
}
