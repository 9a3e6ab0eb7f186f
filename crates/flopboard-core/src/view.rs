//! Read-only projection of a controller's fetch lifecycle for renderers.

use flopboard_types::Movie;

use crate::query::Pagination;

/// The one user-facing failure message. The controllers do not distinguish
/// failure kinds; every port error surfaces as this exact text.
pub const FETCH_ERROR_TEXT: &str = "Failed to fetch data";

/// Fetch lifecycle of a synchronized list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Mounted, nothing dispatched yet.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The latest fetch settled successfully.
    Success,
    /// The latest fetch failed; the last query is retained for retry.
    Error,
}

/// Snapshot handed to the presentation layer each frame.
///
/// Borrowed from the controller; renderers never mutate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState<'a> {
    pub loading: bool,
    pub error: Option<&'a str>,
    pub rows: &'a [Movie],
    pub pagination: Pagination,
}
