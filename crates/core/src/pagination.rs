//! `?limit=&offset=` handling for list endpoints.

use crate::error::CoreError;

/// Page size used when `limit` is absent.
pub const DEFAULT_LIMIT: i64 = 10;

/// Offset used when `offset` is absent.
pub const DEFAULT_OFFSET: i64 = 0;

/// A checked page window. Both values are non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: i64,
    pub offset: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
        }
    }
}

impl Pagination {
    /// Build a window from raw query-string values.
    ///
    /// Absent or empty values fall back to the defaults. Anything that is not
    /// a non-negative integer is rejected; there is no upper bound on `limit`.
    pub fn from_raw(limit: Option<&str>, offset: Option<&str>) -> Result<Self, CoreError> {
        Ok(Self {
            limit: parse_non_negative("limit", limit, DEFAULT_LIMIT)?,
            offset: parse_non_negative("offset", offset, DEFAULT_OFFSET)?,
        })
    }
}

fn parse_non_negative(field: &str, raw: Option<&str>, default: i64) -> Result<i64, CoreError> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(default),
        Some(v) => v,
    };
    match raw.parse::<i64>() {
        Ok(v) if v >= 0 => Ok(v),
        Ok(v) => Err(CoreError::Validation(format!(
            "{field} must be >= 0, got {v}"
        ))),
        Err(_) => Err(CoreError::Validation(format!(
            "{field} must be a non-negative integer, got {raw:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn defaults_when_absent() {
        assert_eq!(Pagination::from_raw(None, None).unwrap(), Pagination::default());
        assert_eq!(
            Pagination::from_raw(Some(""), Some(" ")).unwrap(),
            Pagination { limit: 10, offset: 0 }
        );
    }

    #[test]
    fn passes_through_values() {
        assert_eq!(
            Pagination::from_raw(Some("2"), Some("5")).unwrap(),
            Pagination { limit: 2, offset: 5 }
        );
    }

    #[test]
    fn zero_limit_is_allowed() {
        assert_eq!(Pagination::from_raw(Some("0"), None).unwrap().limit, 0);
    }

    #[test]
    fn large_limit_is_not_capped() {
        assert_eq!(Pagination::from_raw(Some("100000"), None).unwrap().limit, 100_000);
    }

    #[test]
    fn rejects_negative() {
        assert_matches!(
            Pagination::from_raw(None, Some("-1")),
            Err(CoreError::Validation(msg)) if msg == "offset must be >= 0, got -1"
        );
    }

    #[test]
    fn rejects_non_numeric() {
        assert_matches!(
            Pagination::from_raw(Some("ten"), None),
            Err(CoreError::Validation(msg)) if msg.starts_with("limit must be")
        );
    }
}
