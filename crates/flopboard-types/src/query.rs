use serde::{Deserialize, Serialize};

/// Filter + pagination parameters for the winners endpoint.
///
/// `year` is either empty or exactly four ASCII digits by the time a query
/// is dispatched; the completeness gate lives in `flopboard-core` and
/// anything else never reaches the port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinnersQuery {
    /// 1-based page cursor.
    pub page: u64,
    pub page_size: u64,
    pub year: String,
    pub winner: bool,
}

impl Default for WinnersQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
            year: String::new(),
            winner: true,
        }
    }
}
