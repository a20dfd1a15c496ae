//! Destructive demo bootstrap.
//!
//! Only runs when the operator opts in (`RESET_DB_ON_START=true`). Wipes the
//! `movies` table, restarts id assignment at 1 and inserts three sample rows.

use crate::models::movie::MovieFields;
use crate::DbPool;

/// The sample rows inserted by [`reset_and_seed`], in insertion order.
pub fn demo_movies() -> Vec<MovieFields> {
    [(1, 2020), (2, 2019), (3, 2018)]
        .into_iter()
        .map(|(n, year)| MovieFields {
            title: format!("Movie {n}"),
            year_of_release: year,
            synopsis: format!("Synopsis of Movie {n}"),
        })
        .collect()
}

/// Drop all movies and insert the demo set. Returns the number inserted.
///
/// Runs in a single transaction; on failure the table is left untouched.
pub async fn reset_and_seed(pool: &DbPool) -> Result<usize, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let removed = sqlx::query("DELETE FROM movies")
        .execute(&mut *tx)
        .await?
        .rows_affected();
    sqlx::query("DELETE FROM sqlite_sequence WHERE name = 'movies'")
        .execute(&mut *tx)
        .await?;

    let movies = demo_movies();
    for movie in &movies {
        sqlx::query("INSERT INTO movies (title, year_of_release, synopsis) VALUES (?1, ?2, ?3)")
            .bind(&movie.title)
            .bind(movie.year_of_release)
            .bind(&movie.synopsis)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    tracing::info!(removed, inserted = movies.len(), "Movies table reset and seeded");
    Ok(movies.len())
}
