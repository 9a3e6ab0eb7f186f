//! Pagination cursor and the year-filter completeness gate.

use once_cell::sync::Lazy;
use regex::Regex;

static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{4}$").expect("valid year pattern"));

/// Whether a year filter value may be sent to the API.
///
/// Empty means "no year filter". Anything else must be exactly four ASCII
/// digits; partial or garbled input is displayed but never dispatched.
pub fn year_filter_complete(input: &str) -> bool {
    input.is_empty() || YEAR_RE.is_match(input)
}

/// Pagination cursor plus the server-reported total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based current page.
    pub current: u64,
    pub page_size: u64,
    pub total: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current: 1,
            page_size: 10,
            total: 0,
        }
    }
}

impl Pagination {
    /// Cursor applied whenever a filter changes.
    ///
    /// The page size drops from the initial 10 to 5. That asymmetry comes
    /// straight from the source application and is a deliberate reset
    /// policy, not a bug.
    pub const fn filter_reset() -> Self {
        Self {
            current: 1,
            page_size: 5,
            total: 0,
        }
    }

    /// Number of pages the current total spans (at least 1).
    pub fn page_count(&self) -> u64 {
        if self.page_size == 0 {
            return 1;
        }
        self.total.div_ceil(self.page_size).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_year_is_complete() {
        assert!(year_filter_complete(""));
    }

    #[test]
    fn test_four_digits_are_complete() {
        assert!(year_filter_complete("1999"));
        assert!(year_filter_complete("0001"));
    }

    #[test]
    fn test_partial_year_is_incomplete() {
        assert!(!year_filter_complete("1"));
        assert!(!year_filter_complete("19"));
        assert!(!year_filter_complete("199"));
    }

    #[test]
    fn test_non_numeric_year_is_incomplete() {
        assert!(!year_filter_complete("19a9"));
        assert!(!year_filter_complete("abcd"));
        assert!(!year_filter_complete("19999"));
        assert!(!year_filter_complete(" 1999"));
    }

    #[test]
    fn test_unicode_digits_are_incomplete() {
        // Arabic-Indic and fullwidth digits are not ASCII and must not
        // be dispatched to the API.
        assert!(!year_filter_complete("١٩٩٩"));
        assert!(!year_filter_complete("１９９９"));
    }

    #[test]
    fn test_filter_reset_shrinks_page_size() {
        let reset = Pagination::filter_reset();
        assert_eq!(reset.current, 1);
        assert_eq!(reset.page_size, 5);
        assert_eq!(reset.total, 0);
    }

    #[test]
    fn test_page_count_rounds_up() {
        let p = Pagination {
            current: 1,
            page_size: 5,
            total: 11,
        };
        assert_eq!(p.page_count(), 3);
    }

    #[test]
    fn test_page_count_floors_at_one() {
        assert_eq!(Pagination::default().page_count(), 1);
    }
}
