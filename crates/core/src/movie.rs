//! Field rules for the `Movie` entity.
//!
//! Request bodies arrive loosely typed: every field is optional at the
//! deserialization step and `yearOfRelease` may be sent either as a JSON
//! number or as a numeric string. The helpers here turn that loose input
//! into checked values or a [`CoreError::Validation`].

use serde::Deserialize;

use crate::error::CoreError;
use crate::types::DbId;

/// Entity name used in not-found errors and log fields.
pub const MOVIE_ENTITY: &str = "Movie";

/// An integer field as it may appear in a JSON body.
///
/// `Other` catches any remaining JSON value (floats, booleans, objects) so
/// the mismatch is reported by [`IntegerInput::coerce`] instead of failing
/// deserialization of the whole body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum IntegerInput {
    Number(i64),
    Text(String),
    Other(serde_json::Value),
}

impl IntegerInput {
    /// Coerce to `i64`. Surrounding whitespace in the text form is ignored.
    pub fn coerce(&self, field: &str) -> Result<i64, CoreError> {
        match self {
            IntegerInput::Number(n) => Ok(*n),
            IntegerInput::Text(s) => s.trim().parse::<i64>().map_err(|_| {
                CoreError::Validation(format!("{field} must be an integer, got {s:?}"))
            }),
            IntegerInput::Other(v) => Err(CoreError::Validation(format!(
                "{field} must be an integer, got {v}"
            ))),
        }
    }
}

/// Require a non-blank text field.
///
/// The value is stored as given; only the blank check trims.
pub fn require_text(field: &str, value: Option<String>) -> Result<String, CoreError> {
    match value {
        None => Err(CoreError::Validation(format!("{field} is required"))),
        Some(v) if v.trim().is_empty() => {
            Err(CoreError::Validation(format!("{field} must not be empty")))
        }
        Some(v) => Ok(v),
    }
}

/// Require an integer field, coercing numeric strings.
pub fn require_integer(field: &str, value: Option<&IntegerInput>) -> Result<i64, CoreError> {
    value
        .ok_or_else(|| CoreError::Validation(format!("{field} is required")))?
        .coerce(field)
}

/// Parse a movie id taken from a URL path segment.
///
/// Returns `None` for anything that is not an integer; such a key can never
/// match a stored record.
pub fn parse_movie_id(raw: &str) -> Option<DbId> {
    raw.trim().parse::<DbId>().ok()
}
