// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small formatting helpers shared by the demo screens.

/// A five-star rating row, whole stars filled.
pub fn stars(rating: f64) -> String {
    let filled = (rating.clamp(0.0, 5.0) as usize).min(5);
    let mut row = "*".repeat(filled);
    row.push_str(&".".repeat(5 - filled));
    row
}

/// Groups digits with thousands separators: `12500` becomes `"12,500"`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// A relative "last read" label from a day count.
pub fn last_read_label(days_ago: u32) -> String {
    match days_ago {
        0 => "today".to_string(),
        1 => "yesterday".to_string(),
        2..=6 => format!("{days_ago} days ago"),
        7..=13 => "1 week ago".to_string(),
        14..=30 => format!("{} weeks ago", days_ago / 7),
        31..=59 => "1 month ago".to_string(),
        _ => format!("{} months ago", days_ago / 30),
    }
}

/// A fixed-width progress bar: `rate` of `width` cells filled.
pub fn progress_bar(rate: f64, width: usize) -> String {
    let filled = ((rate.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    let mut bar = String::with_capacity(width + 2);
    bar.push('[');
    bar.push_str(&"#".repeat(filled));
    bar.push_str(&".".repeat(width - filled));
    bar.push(']');
    bar
}

/// A whole-number percent label: `0.845` becomes `"85%"`.
pub fn percent_label(rate: f64) -> String {
    format!("{:.0}%", rate * 100.0)
}

/// A page-dot indicator with the active page highlighted.
pub fn page_dots(count: usize, active: usize) -> String {
    (0..count)
        .map(|i| if i == active { '\u{25cf}' } else { '\u{25cb}' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{group_thousands, last_read_label, page_dots, progress_bar, stars};

    #[test]
    fn star_rows_truncate_to_whole_stars() {
        assert_eq!(stars(4.8), "****.");
        assert_eq!(stars(5.0), "*****");
        assert_eq!(stars(0.3), ".....");
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(12_500), "12,500");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn relative_labels_cover_the_ranges() {
        assert_eq!(last_read_label(0), "today");
        assert_eq!(last_read_label(1), "yesterday");
        assert_eq!(last_read_label(3), "3 days ago");
        assert_eq!(last_read_label(12), "1 week ago");
        assert_eq!(last_read_label(21), "3 weeks ago");
        assert_eq!(last_read_label(45), "1 month ago");
        assert_eq!(last_read_label(90), "3 months ago");
    }

    #[test]
    fn bars_and_dots() {
        assert_eq!(progress_bar(0.6, 10), "[######....]");
        assert_eq!(progress_bar(0.0, 4), "[....]");
        assert_eq!(progress_bar(1.0, 4), "[####]");
        assert_eq!(page_dots(5, 0), "\u{25cf}\u{25cb}\u{25cb}\u{25cb}\u{25cb}");
    }
}
