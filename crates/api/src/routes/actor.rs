//! Route definitions for the `/actors` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::actor;
use crate::state::AppState;

/// Routes mounted at `/actors`.
///
/// ```text
/// GET    /        -> list        (get:actors)
/// POST   /        -> create      (add:actors)
/// GET    /{id}    -> get_by_id   (get:actors)
/// PATCH  /{id}    -> update      (modify:actors)
/// DELETE /{id}    -> delete      (delete:actors)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(actor::list).post(actor::create))
        .route(
            "/{id}",
            get(actor::get_by_id)
                .patch(actor::update)
                .delete(actor::delete),
        )
}
