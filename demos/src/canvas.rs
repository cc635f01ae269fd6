// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A character-cell canvas for sketching layout rects on stdout.

use kurbo::Rect;

/// Rasterizes [`Rect`]s onto a grid of characters.
///
/// The canvas covers `frame` in the same coordinate space the layout math
/// runs in; `col_points` and `row_points` say how many of those units one
/// character cell covers horizontally and vertically (terminal cells are
/// roughly twice as tall as they are wide, so `row_points` is usually the
/// larger). Everything outside the frame is clipped.
#[derive(Debug, Clone)]
pub struct TextCanvas {
    frame: Rect,
    col_points: f64,
    row_points: f64,
    cols: usize,
    rows: usize,
    cells: Vec<char>,
}

impl TextCanvas {
    /// Creates a blank canvas covering `frame`.
    pub fn new(frame: Rect, col_points: f64, row_points: f64) -> Self {
        let frame = frame.abs();
        let cols = (frame.width() / col_points).round() as usize + 1;
        let rows = (frame.height() / row_points).round() as usize + 1;
        Self {
            frame,
            col_points,
            row_points,
            cols,
            rows,
            cells: vec![' '; cols * rows],
        }
    }

    /// The frame this canvas covers.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    fn col_of(&self, x: f64) -> isize {
        ((x - self.frame.x0) / self.col_points).round() as isize
    }

    fn row_of(&self, y: f64) -> isize {
        ((y - self.frame.y0) / self.row_points).round() as isize
    }

    fn put(&mut self, col: isize, row: isize, ch: char) {
        if col < 0 || row < 0 {
            return;
        }
        let (col, row) = (col as usize, row as usize);
        if col >= self.cols || row >= self.rows {
            return;
        }
        self.cells[row * self.cols + col] = ch;
    }

    /// Draws the border of `rect`.
    pub fn stroke(&mut self, rect: Rect) {
        let rect = rect.abs();
        let (c0, c1) = (self.col_of(rect.x0), self.col_of(rect.x1));
        let (r0, r1) = (self.row_of(rect.y0), self.row_of(rect.y1));
        for c in c0..=c1 {
            self.put(c, r0, '-');
            self.put(c, r1, '-');
        }
        for r in r0..=r1 {
            self.put(c0, r, '|');
            self.put(c1, r, '|');
        }
        for (c, r) in [(c0, r0), (c1, r0), (c0, r1), (c1, r1)] {
            self.put(c, r, '+');
        }
    }

    /// Fills the interior of `rect` with `ch`, leaving room for a border.
    pub fn fill(&mut self, rect: Rect, ch: char) {
        let rect = rect.abs();
        for r in self.row_of(rect.y0) + 1..self.row_of(rect.y1) {
            for c in self.col_of(rect.x0) + 1..self.col_of(rect.x1) {
                self.put(c, r, ch);
            }
        }
    }

    /// Writes `text` on interior line `line` of `rect`, inset past the
    /// border and clipped to the rect.
    pub fn label(&mut self, rect: Rect, line: usize, text: &str) {
        let rect = rect.abs();
        let row = self.row_of(rect.y0) + 1 + line as isize;
        if row >= self.row_of(rect.y1) {
            return;
        }
        let start = self.col_of(rect.x0) + 2;
        let end = self.col_of(rect.x1) - 2;
        for (i, ch) in text.chars().enumerate() {
            let c = start + i as isize;
            if c > end {
                break;
            }
            self.put(c, row, ch);
        }
    }

    /// Renders the canvas, one line per row, trailing blanks trimmed.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.rows * (self.cols + 1));
        for row in 0..self.rows {
            let line: String = self.cells[row * self.cols..(row + 1) * self.cols]
                .iter()
                .collect();
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::TextCanvas;
    use kurbo::Rect;

    #[test]
    fn strokes_land_on_the_grid() {
        let mut canvas = TextCanvas::new(Rect::new(0.0, 0.0, 40.0, 20.0), 10.0, 10.0);
        canvas.stroke(Rect::new(0.0, 0.0, 40.0, 20.0));
        let out = canvas.render();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "+---+");
        assert_eq!(lines[1], "|   |");
        assert_eq!(lines[2], "+---+");
    }

    #[test]
    fn labels_clip_to_their_rect() {
        let mut canvas = TextCanvas::new(Rect::new(0.0, 0.0, 60.0, 30.0), 10.0, 10.0);
        canvas.stroke(Rect::new(0.0, 0.0, 60.0, 30.0));
        canvas.label(Rect::new(0.0, 0.0, 60.0, 30.0), 0, "wider than the box");
        let out = canvas.render();
        let first_interior = out.lines().nth(1).unwrap();
        assert!(first_interior.starts_with("| wid"));
        assert!(first_interior.len() <= 7);
    }
}
