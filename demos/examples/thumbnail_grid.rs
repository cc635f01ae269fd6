// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A three-column chapter grid sized by container division.
//!
//! Each thumbnail takes one column of `RelativeLength::columns(3, 8.0)`,
//! so three cells and two gaps tile the container width exactly, whatever
//! that width is. Rows are chunked by hand, the way a lazy vertical stack
//! would be fed.
//!
//! Run:
//! - `cargo run -p canopy_demos --example thumbnail_grid`

use canopy_demos::TextCanvas;
use canopy_demos::catalog::latest_chapters;
use canopy_frame::{Axis, RelativeLength, Strip};
use core::num::NonZeroUsize;
use kurbo::Rect;

const COLUMNS: usize = 3;
const CELL_GAP: f64 = 8.0;
const ROW_GAP: f64 = 16.0;

fn main() {
    let width = 360.0;
    let cell = RelativeLength::columns(NonZeroUsize::new(COLUMNS).unwrap(), CELL_GAP);
    let cell_width = cell.resolve(width);
    // Covers keep a 3:4 aspect.
    let cell_height = cell_width * 4.0 / 3.0;

    println!(
        "Chapter grid: {COLUMNS} columns of {cell_width:.1} + {} gaps of {CELL_GAP} = {width} wide.",
        COLUMNS - 1
    );
    println!("Cells are {cell_width:.1} x {cell_height:.1} (3:4 covers).\n");

    let chapters = latest_chapters();
    let rows = chapters.chunks(COLUMNS);
    let row_count = chapters.len().div_ceil(COLUMNS);
    let height = row_count as f64 * (cell_height + ROW_GAP) - ROW_GAP;

    let mut canvas = TextCanvas::new(Rect::new(0.0, 0.0, width, height), 6.0, 19.0);
    for (row_index, row) in rows.enumerate() {
        let y = row_index as f64 * (cell_height + ROW_GAP);
        let row_rect = Rect::new(0.0, y, width, y + cell_height);
        let strip = Strip::new(row_rect, Axis::Horizontal, cell, CELL_GAP, row.len());
        for (column, chapter) in row.iter().enumerate() {
            let rect = strip.rect_of(column, 0.0);
            canvas.stroke(rect);
            canvas.label(rect, 0, &format!("Ch {}", chapter.number));
            if chapter.is_new {
                canvas.label(rect, 1, "NEW");
            }
            canvas.label(rect, 2, ":::::::");
        }
    }
    print!("{}", canvas.render());

    // The same rule on a wider container: nothing about the grid changes
    // except the resolved cell width.
    let wide = 600.0;
    println!(
        "\nOn a {wide}-wide container the same rule resolves to {:.1} per cell.",
        cell.resolve(wide)
    );
}
