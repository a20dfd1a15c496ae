//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Raw pagination parameters (`?limit=&offset=`).
///
/// Kept as strings so malformed numbers are reported through
/// [`marquee_core::pagination::Pagination::from_raw`] as a JSON 400 rather
/// than an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<String>,
    pub offset: Option<String>,
}
