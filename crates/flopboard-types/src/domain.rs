//! Domain entities as served by the awards API.
//!
//! Wire names are camelCase; everything here is an immutable record with a
//! stable identifying key (`Movie::id`, `ProducerInterval::producer`).

use serde::{Deserialize, Serialize};

/// One nominated movie as returned by the winners endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: u64,
    pub year: i32,
    pub title: String,
    #[serde(default)]
    pub studios: Vec<String>,
    #[serde(default)]
    pub producers: Vec<String>,
    pub winner: bool,
}

/// A producer's gap between two consecutive wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProducerInterval {
    pub producer: String,
    pub interval: i32,
    pub previous_win: i32,
    pub following_win: i32,
}

/// One server-returned batch of movies plus the total match count.
///
/// Invariants the server upholds: `content.len()` never exceeds the
/// requested page size, and `total_elements >= content.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinnersPage {
    pub content: Vec<Movie>,
    pub total_elements: u64,
}

/// The min/max interval rankings, fetched as one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalBuckets {
    #[serde(default)]
    pub min: Vec<ProducerInterval>,
    #[serde(default)]
    pub max: Vec<ProducerInterval>,
}
