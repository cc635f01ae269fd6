// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static sample data shared by the demo screens.

/// A comic in the sample catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comic {
    /// Series title.
    pub title: &'static str,
    /// Writer credit.
    pub author: &'static str,
    /// Average reader rating out of five.
    pub rating: f64,
    /// One-line teaser shown on cards.
    pub blurb: &'static str,
}

/// One chapter tile in the thumbnail grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chapter {
    /// Chapter number.
    pub number: u32,
    /// Whether the chapter gets a NEW badge.
    pub is_new: bool,
}

/// Reading progress for one series on the continue-reading shelf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Series title.
    pub title: &'static str,
    /// Last chapter the reader finished.
    pub current_chapter: u32,
    /// Chapters published so far.
    pub total_chapters: u32,
    /// Days since the series was last opened.
    pub days_since_read: u32,
}

impl Progress {
    /// Completion in `0.0..=1.0`.
    pub fn rate(&self) -> f64 {
        if self.total_chapters == 0 {
            return 0.0;
        }
        f64::from(self.current_chapter) / f64::from(self.total_chapters)
    }

    /// Whether every published chapter has been read.
    pub fn is_completed(&self) -> bool {
        self.current_chapter >= self.total_chapters
    }

    /// Chapters still unread.
    pub fn remaining(&self) -> u32 {
        self.total_chapters.saturating_sub(self.current_chapter)
    }

    /// The accent color a renderer would tint the progress bar with.
    pub fn bar_color(&self) -> &'static str {
        let rate = self.rate();
        if rate >= 0.8 {
            "green"
        } else if rate >= 0.5 {
            "blue"
        } else if rate >= 0.25 {
            "orange"
        } else {
            "red"
        }
    }
}

/// Detail-page data for the cover screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComicDetail {
    /// The series the page is about.
    pub comic: Comic,
    /// Artist credit.
    pub artist: &'static str,
    /// Chapters published so far.
    pub total_chapters: u32,
    /// Number of reader reviews.
    pub review_count: u64,
    /// Genre tags.
    pub genres: &'static [&'static str],
    /// Back-cover synopsis.
    pub synopsis: &'static str,
}

/// The featured series rotated by the auto-advancing carousel.
pub const FEATURED: &[Comic] = &[
    Comic {
        title: "Ashfall Chronicle",
        author: "Rei Takamura",
        rating: 4.8,
        blurb: "A courier crosses a continent buried in volcanic winter.",
    },
    Comic {
        title: "Harbor Lights",
        author: "Mina Okabe",
        rating: 4.6,
        blurb: "Two rival ferry crews, one shrinking harbor town.",
    },
    Comic {
        title: "The Cartographer's Key",
        author: "Juno Vale",
        rating: 4.7,
        blurb: "Maps that redraw themselves, and the girl who reads them.",
    },
    Comic {
        title: "Solar Wind",
        author: "Theo Marsh",
        rating: 4.5,
        blurb: "Racing sail-ships between stations on light alone.",
    },
    Comic {
        title: "Paper Lanterns",
        author: "Aya Kishi",
        rating: 4.9,
        blurb: "A night market that only appears when someone needs it.",
    },
];

/// Hand-picked series for the manually scrolled carousel section.
pub const EDITORS_PICKS: &[Comic] = &[
    Comic {
        title: "Quiet Thunder",
        author: "Selma Iqbal",
        rating: 4.4,
        blurb: "A storm-chaser who can hear weather three days out.",
    },
    Comic {
        title: "Brass & Ivy",
        author: "Callum Weir",
        rating: 4.3,
        blurb: "A botanist and a clockwork detective share an office.",
    },
    Comic {
        title: "Midnight Greenhouse",
        author: "Lena Brandt",
        rating: 4.6,
        blurb: "Plants that bloom only for the night shift.",
    },
    Comic {
        title: "The Salt Road",
        author: "Ingrid Halvorsen",
        rating: 4.2,
        blurb: "Caravans trade memory for salt at the edge of the map.",
    },
];

/// This week's new releases for the horizontal shelf.
pub const NEW_RELEASES: &[Comic] = &[
    Comic {
        title: "Ember Circuit",
        author: "Kazuki Mori",
        rating: 4.5,
        blurb: "A delivery robot wakes up mid-route with someone else's memories.",
    },
    Comic {
        title: "Glass Orchard",
        author: "Petra Lindqvist",
        rating: 4.3,
        blurb: "Fruit grown under glass keeps the last winter out.",
    },
    Comic {
        title: "Northbound",
        author: "Emil Varga",
        rating: 4.6,
        blurb: "A one-way train ticket and a passenger list full of liars.",
    },
    Comic {
        title: "The Tide Library",
        author: "Sana Farouk",
        rating: 4.8,
        blurb: "Books wash ashore twice a day; some of them are due back.",
    },
    Comic {
        title: "Copper Sparrow",
        author: "Daria Volkov",
        rating: 4.4,
        blurb: "A pickpocket in a city where every coin remembers its owners.",
    },
];

/// Recommendations for the shelf's second section.
pub const RECOMMENDED: &[Comic] = &[
    Comic {
        title: "Winter Arcade",
        author: "Joon Park",
        rating: 4.7,
        blurb: "An arcade snowed in for a season, and the high scores that outlast it.",
    },
    Comic {
        title: "The Last Ferry",
        author: "Marta Reyes",
        rating: 4.5,
        blurb: "Every night the same crossing; every night a different far shore.",
    },
    Comic {
        title: "Hollow Crown Radio",
        author: "Felix Adler",
        rating: 4.2,
        blurb: "A pirate station broadcasting to a kingdom that fell years ago.",
    },
];

/// Latest chapters of the featured series, newest first.
pub fn latest_chapters() -> Vec<Chapter> {
    (0..9)
        .map(|i| Chapter {
            number: 142 - i,
            is_new: i < 2,
        })
        .collect()
}

/// The cover detail page's subject.
pub const DETAIL: ComicDetail = ComicDetail {
    comic: Comic {
        title: "Ashfall Chronicle",
        author: "Rei Takamura",
        rating: 4.8,
        blurb: "A courier crosses a continent buried in volcanic winter.",
    },
    artist: "Noor Haddad",
    total_chapters: 142,
    review_count: 12_500,
    genres: &["Adventure", "Drama", "Survival"],
    synopsis: "Ten years after the eruption, the mail still has to move. Kestrel \
               Var carries letters between the buried cities, trading warmth for \
               news and outrunning the ash storms that erase the roads behind her.",
};

/// The continue-reading shelf.
pub const PROGRESS: &[Progress] = &[
    Progress {
        title: "Ashfall Chronicle",
        current_chapter: 120,
        total_chapters: 142,
        days_since_read: 0,
    },
    Progress {
        title: "Harbor Lights",
        current_chapter: 36,
        total_chapters: 60,
        days_since_read: 1,
    },
    Progress {
        title: "Solar Wind",
        current_chapter: 12,
        total_chapters: 40,
        days_since_read: 3,
    },
    Progress {
        title: "Quiet Thunder",
        current_chapter: 3,
        total_chapters: 25,
        days_since_read: 12,
    },
    Progress {
        title: "Paper Lanterns",
        current_chapter: 48,
        total_chapters: 48,
        days_since_read: 45,
    },
];

/// Pages in the page-viewer's sample chapter.
pub const PAGE_COUNT: usize = 10;

#[cfg(test)]
mod tests {
    use super::{PROGRESS, Progress, latest_chapters};

    #[test]
    fn progress_rates_and_colors() {
        let p = |current, total| Progress {
            title: "x",
            current_chapter: current,
            total_chapters: total,
            days_since_read: 0,
        };
        assert_eq!(p(120, 142).bar_color(), "green");
        assert_eq!(p(36, 60).bar_color(), "blue");
        assert_eq!(p(12, 40).bar_color(), "orange");
        assert_eq!(p(3, 25).bar_color(), "red");
        assert!(p(48, 48).is_completed());
        assert_eq!(p(120, 142).remaining(), 22);
        assert!(!PROGRESS[0].is_completed());
    }

    #[test]
    fn newest_two_chapters_are_badged() {
        let chapters = latest_chapters();
        assert_eq!(chapters.len(), 9);
        assert_eq!(chapters[0].number, 142);
        assert!(chapters[0].is_new && chapters[1].is_new);
        assert!(chapters[2..].iter().all(|c| !c.is_new));
    }
}
