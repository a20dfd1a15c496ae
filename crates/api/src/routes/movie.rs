use axum::routing::get;
use axum::Router;

use crate::handlers::movie;
use crate::state::AppState;

/// Movie routes mounted at `/movies`.
///
/// ```text
/// GET    /        -> list_movies
/// POST   /        -> create_movie
/// GET    /{id}    -> get_movie
/// PUT    /{id}    -> update_movie
/// DELETE /{id}    -> delete_movie
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movie::list_movies).post(movie::create_movie))
        .route(
            "/{id}",
            get(movie::get_movie)
                .put(movie::update_movie)
                .delete(movie::delete_movie),
        )
}
