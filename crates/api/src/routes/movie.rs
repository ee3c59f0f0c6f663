//! Route definitions for the `/movies` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::movie;
use crate::state::AppState;

/// Routes mounted at `/movies`.
///
/// ```text
/// GET    /        -> list        (get:movie)
/// POST   /        -> create      (add:movie)
/// GET    /{id}    -> get_by_id   (get:movie)
/// PATCH  /{id}    -> update      (modify:movie)
/// DELETE /{id}    -> delete      (delete:movie)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movie::list).post(movie::create))
        .route(
            "/{id}",
            get(movie::get_by_id)
                .patch(movie::update)
                .delete(movie::delete),
        )
}
