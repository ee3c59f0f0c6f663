pub mod actor;
pub mod health;
pub mod movie;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// ```text
/// /actors                 list, create
/// /actors/{id}            get, update, delete
///
/// /movies                 list, create
/// /movies/{id}            get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/actors", actor::router())
        .nest("/movies", movie::router())
}
