//! Shared response envelope types for API handlers.

use serde::Serialize;

/// `{ "data": [...], "total": n }` envelope for paginated listings.
///
/// `total` counts every record, not just the ones in `data`.
#[derive(Debug, Serialize)]
pub struct PageResponse<T: Serialize> {
    pub data: Vec<T>,
    pub total: i64,
}
