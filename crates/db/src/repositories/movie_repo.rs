//! Repository for the `movies` table.

use marquee_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::movie::{Movie, MovieFields, MoviePage};

/// Column list for `movies` queries.
const COLUMNS: &str = "id, title, year_of_release, synopsis, created_at, updated_at";

/// UTC timestamp in the same RFC 3339 shape the column defaults produce.
const NOW: &str = "strftime('%Y-%m-%dT%H:%M:%fZ', 'now')";

/// Provides data access for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie, returning the stored row with its assigned id.
    pub async fn create(pool: &SqlitePool, fields: &MovieFields) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies (title, year_of_release, synopsis) \
             VALUES (?1, ?2, ?3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&fields.title)
            .bind(fields.year_of_release)
            .bind(&fields.synopsis)
            .fetch_one(pool)
            .await
    }

    /// Return up to `limit` movies starting at `offset`, in insertion order,
    /// together with the count of all movies.
    ///
    /// Both reads run in one transaction so `total` matches the page.
    pub async fn list_page(
        pool: &SqlitePool,
        limit: i64,
        offset: i64,
    ) -> Result<MoviePage, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM movies")
            .fetch_one(&mut *tx)
            .await?;

        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY id LIMIT ?1 OFFSET ?2");
        let items = sqlx::query_as::<_, Movie>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(MoviePage { items, total })
    }

    /// Find a movie by its id.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = ?1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite all mutable fields of a movie.
    ///
    /// Returns `None` without side effects if no movie has this id.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        fields: &MovieFields,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "UPDATE movies SET \
                 title = ?2, \
                 year_of_release = ?3, \
                 synopsis = ?4, \
                 updated_at = {NOW} \
             WHERE id = ?1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(&fields.title)
            .bind(fields.year_of_release)
            .bind(&fields.synopsis)
            .fetch_optional(pool)
            .await
    }

    /// Delete a movie by id.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
