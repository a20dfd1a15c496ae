//! Handlers for the `/movies` resource.
//!
//! Bodies are taken as untyped JSON and converted with
//! [`MovieInput::from_json`], so only syntactically broken JSON is rejected
//! by the extractor; a wrong-typed field is a 400 `VALIDATION_ERROR`.
//!
//! Each handler is independent: it extracts its input, calls
//! [`MovieRepo`] with the pool from [`AppState`], and maps the outcome to a
//! status code. Errors propagate as [`AppError`] and are rendered by its
//! `IntoResponse` impl.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use marquee_core::error::CoreError;
use marquee_core::movie::{parse_movie_id, MOVIE_ENTITY};
use marquee_core::pagination::Pagination;
use marquee_db::models::movie::{Movie, MovieInput};
use marquee_db::repositories::MovieRepo;
use marquee_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::response::PageResponse;
use crate::state::AppState;

/// Load the movie named by a raw path segment, or fail with 404.
async fn find_movie(pool: &DbPool, raw_id: &str) -> AppResult<Movie> {
    let id = parse_movie_id(raw_id).ok_or_else(|| not_found(raw_id))?;
    MovieRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

fn not_found(key: impl std::fmt::Display) -> AppError {
    AppError::Core(CoreError::not_found(MOVIE_ENTITY, key))
}

/// POST /movies
pub async fn create_movie(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> AppResult<impl IntoResponse> {
    let fields = MovieInput::from_json(body)?.validate()?;
    let movie = MovieRepo::create(&state.pool, &fields).await?;

    tracing::info!(movie_id = movie.id, title = %movie.title, "Movie created");

    Ok((StatusCode::CREATED, Json(movie)))
}

/// GET /movies?limit=&offset=
///
/// Defaults to `limit=10`, `offset=0`. An unparseable query string (for
/// example a repeated `limit`) is reported as a validation error.
pub async fn list_movies(
    State(state): State<AppState>,
    query: Result<Query<PaginationParams>, QueryRejection>,
) -> AppResult<Json<PageResponse<Movie>>> {
    let Query(params) =
        query.map_err(|rejection| CoreError::Validation(rejection.body_text()))?;
    let page = Pagination::from_raw(params.limit.as_deref(), params.offset.as_deref())?;
    let result = MovieRepo::list_page(&state.pool, page.limit, page.offset).await?;

    Ok(Json(PageResponse {
        data: result.items,
        total: result.total,
    }))
}

/// GET /movies/{id}
pub async fn get_movie(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Movie>> {
    let movie = find_movie(&state.pool, &raw_id).await?;
    Ok(Json(movie))
}

/// PUT /movies/{id}
///
/// Overwrites title, year and synopsis together. The existence check runs
/// before body validation, so an unknown id is always a 404 and never
/// creates a record.
pub async fn update_movie(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> AppResult<Json<Movie>> {
    let existing = find_movie(&state.pool, &raw_id).await?;
    let fields = MovieInput::from_json(body)?.validate()?;

    // The row can vanish between the two calls; treat that as not found.
    let movie = MovieRepo::update(&state.pool, existing.id, &fields)
        .await?
        .ok_or_else(|| not_found(existing.id))?;

    tracing::info!(movie_id = movie.id, title = %movie.title, "Movie updated");

    Ok(Json(movie))
}

/// DELETE /movies/{id}
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<StatusCode> {
    let existing = find_movie(&state.pool, &raw_id).await?;

    if !MovieRepo::delete(&state.pool, existing.id).await? {
        return Err(not_found(existing.id));
    }

    tracing::info!(movie_id = existing.id, "Movie deleted");

    Ok(StatusCode::NO_CONTENT)
}
