//! Column model shared by every renderer.
//!
//! Display and comparison rules mirror the dashboard's table contract:
//! list-valued fields are sorted lexicographically and joined with ", " for
//! both display and ordering, the winner flag renders as Yes/No and orders
//! false before true.

use std::cmp::Ordering;

use flopboard_types::{Movie, ProducerInterval};

/// Sort values lexicographically, then join for display.
pub fn join_sorted(values: &[String]) -> String {
    let mut sorted: Vec<&str> = values.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    sorted.join(", ")
}

/// Columns of the winners table, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovieColumn {
    Title,
    Year,
    Studios,
    Producers,
    Winner,
}

impl MovieColumn {
    pub const ALL: [MovieColumn; 5] = [
        MovieColumn::Title,
        MovieColumn::Year,
        MovieColumn::Studios,
        MovieColumn::Producers,
        MovieColumn::Winner,
    ];

    pub fn title(self) -> &'static str {
        match self {
            MovieColumn::Title => "Title",
            MovieColumn::Year => "Year",
            MovieColumn::Studios => "Studios",
            MovieColumn::Producers => "Producers",
            MovieColumn::Winner => "Winner",
        }
    }

    /// Cell text for one movie.
    pub fn display(self, movie: &Movie) -> String {
        match self {
            MovieColumn::Title => movie.title.clone(),
            MovieColumn::Year => movie.year.to_string(),
            MovieColumn::Studios => join_sorted(&movie.studios),
            MovieColumn::Producers => join_sorted(&movie.producers),
            MovieColumn::Winner => {
                let label = if movie.winner { "Yes" } else { "No" };
                label.to_string()
            }
        }
    }

    /// Column comparator for client-side sorting of the displayed page.
    pub fn compare(self, a: &Movie, b: &Movie) -> Ordering {
        match self {
            MovieColumn::Title => a.title.cmp(&b.title),
            MovieColumn::Year => a.year.cmp(&b.year),
            MovieColumn::Studios => join_sorted(&a.studios).cmp(&join_sorted(&b.studios)),
            MovieColumn::Producers => join_sorted(&a.producers).cmp(&join_sorted(&b.producers)),
            MovieColumn::Winner => u8::from(a.winner).cmp(&u8::from(b.winner)),
        }
    }

    /// The next column in render order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            MovieColumn::Title => MovieColumn::Year,
            MovieColumn::Year => MovieColumn::Studios,
            MovieColumn::Studios => MovieColumn::Producers,
            MovieColumn::Producers => MovieColumn::Winner,
            MovieColumn::Winner => MovieColumn::Title,
        }
    }
}

/// Columns of the interval tables, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalColumn {
    Producer,
    Interval,
    PreviousWin,
    FollowingWin,
}

impl IntervalColumn {
    pub const ALL: [IntervalColumn; 4] = [
        IntervalColumn::Producer,
        IntervalColumn::Interval,
        IntervalColumn::PreviousWin,
        IntervalColumn::FollowingWin,
    ];

    pub fn title(self) -> &'static str {
        match self {
            IntervalColumn::Producer => "Producer",
            IntervalColumn::Interval => "Interval",
            IntervalColumn::PreviousWin => "Previous Win",
            IntervalColumn::FollowingWin => "Following Win",
        }
    }

    pub fn display(self, entry: &ProducerInterval) -> String {
        match self {
            IntervalColumn::Producer => entry.producer.clone(),
            IntervalColumn::Interval => entry.interval.to_string(),
            IntervalColumn::PreviousWin => entry.previous_win.to_string(),
            IntervalColumn::FollowingWin => entry.following_win.to_string(),
        }
    }
}
