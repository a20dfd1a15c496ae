//! Movie row and request payloads.

use marquee_core::error::CoreError;
use marquee_core::movie::{require_integer, require_text, IntegerInput};
use marquee_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `movies` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub year_of_release: i64,
    pub synopsis: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Checked field values for an insert or a full overwrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieFields {
    pub title: String,
    pub year_of_release: i64,
    pub synopsis: String,
}

/// Request body for create and update, before validation.
///
/// Fields are optional here so a missing field is reported as a validation
/// error by [`MovieInput::validate`] rather than as a body parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieInput {
    pub title: Option<String>,
    pub year_of_release: Option<IntegerInput>,
    pub synopsis: Option<String>,
}

impl MovieInput {
    /// Read a request body that has already parsed as JSON.
    ///
    /// A body that is valid JSON but has the wrong shape (not an object, or
    /// a text field holding a number) is a validation error, not a transport
    /// failure.
    pub fn from_json(body: serde_json::Value) -> Result<Self, CoreError> {
        serde_json::from_value(body)
            .map_err(|e| CoreError::Validation(format!("invalid movie body: {e}")))
    }

    /// Check that every field is present and well formed.
    pub fn validate(self) -> Result<MovieFields, CoreError> {
        let year_of_release = require_integer("yearOfRelease", self.year_of_release.as_ref())?;
        Ok(MovieFields {
            title: require_text("title", self.title)?,
            year_of_release,
            synopsis: require_text("synopsis", self.synopsis)?,
        })
    }
}

/// One page of movies plus the total row count.
#[derive(Debug, Clone)]
pub struct MoviePage {
    pub items: Vec<Movie>,
    pub total: i64,
}
