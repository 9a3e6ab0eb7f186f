//! Canned domain data for tests.

use flopboard_types::{IntervalBuckets, Movie, ProducerInterval, WinnersPage};

pub fn movie(id: u64, year: i32, title: &str, winner: bool) -> Movie {
    Movie {
        id,
        year,
        title: title.to_string(),
        studios: vec!["Associated Film Distribution".to_string()],
        producers: vec!["Allan Carr".to_string()],
        winner,
    }
}

/// A two-row winners page with the given server-side total.
pub fn winners_page(total: u64) -> WinnersPage {
    WinnersPage {
        content: vec![
            movie(1, 1980, "Can't Stop the Music", true),
            movie(2, 1980, "Cruising", false),
        ],
        total_elements: total,
    }
}

pub fn interval(producer: &str, gap: i32, from: i32, to: i32) -> ProducerInterval {
    ProducerInterval {
        producer: producer.to_string(),
        interval: gap,
        previous_win: from,
        following_win: to,
    }
}

/// Min/max buckets with one producer each.
pub fn interval_buckets() -> IntervalBuckets {
    IntervalBuckets {
        min: vec![interval("John Doe", 2, 1998, 2000)],
        max: vec![interval("Jane Smith", 10, 1985, 1995)],
    }
}
