//! Handlers for the `/movies` resource.
//!
//! Every endpoint requires a bearer token carrying the matching `*:movie`
//! permission; see [`crate::middleware::rbac`].

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use casting_core::error::CoreError;
use casting_core::release_date;
use casting_core::types::DbId;
use casting_db::models::movie::{CreateMovie, Movie, MovieChanges, NewMovie, UpdateMovie};
use casting_db::repositories::MovieRepo;
use serde::Serialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::middleware::rbac::{AddMovie, Authorized, DeleteMovie, GetMovie, ModifyMovie};
use crate::query::PageParams;
use crate::response::{Created, Success, DELETED};
use crate::state::AppState;

/// One page of movies.
///
/// Existing clients read the list from the `actors` key, so the field is
/// serialized under that name.
#[derive(Debug, Serialize)]
pub struct MoviePage<'a> {
    #[serde(rename = "actors")]
    pub movies: &'a [Movie],
    pub page: i64,
}

#[derive(Debug, Serialize)]
pub struct MovieDetails {
    pub movie_details: Movie,
}

#[derive(Debug, Serialize)]
pub struct MovieUpdated {
    pub movie_id: DbId,
}

#[derive(Debug, Serialize)]
pub struct MovieDeleted {
    pub movie_id: DbId,
    pub status: &'static str,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Movie", id })
}

/// POST /movies
pub async fn create(
    auth: Authorized<AddMovie>,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateMovie>,
) -> AppResult<Json<Success<Created>>> {
    input.validate()?;
    let new = NewMovie::try_from(input)?;

    let movie = MovieRepo::insert(&state.pool, &new).await?;

    tracing::info!(
        movie_id = movie.id,
        identifier = %movie.identifier,
        release_date = %release_date::render(&movie.release_date),
        subject = %auth.user.subject,
        "Movie created",
    );

    Ok(Json(Success::new(Created {
        id: movie.id,
        identifier: movie.identifier,
    })))
}

/// GET /movies?page=N
///
/// 404 when no movies exist at all; an out-of-range page is an empty list.
pub async fn list(
    _auth: Authorized<GetMovie>,
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PageParams>,
) -> AppResult<Response> {
    let movies = MovieRepo::find_all(&state.pool).await?;
    if movies.is_empty() {
        return Err(AppError::Core(CoreError::EmptyCollection { entity: "Movie" }));
    }

    let page = params.page();
    let body = Success::new(MoviePage {
        movies: page.slice(&movies),
        page: page.number(),
    });

    Ok(Json(body).into_response())
}

/// GET /movies/{id}
pub async fn get_by_id(
    _auth: Authorized<GetMovie>,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Success<MovieDetails>>> {
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(Success::new(MovieDetails {
        movie_details: movie,
    })))
}

/// PATCH /movies/{id}
///
/// Applies only the fields present in the body; `id` and `identifier`
/// never change.
pub async fn update(
    auth: Authorized<ModifyMovie>,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateMovie>,
) -> AppResult<Json<Success<MovieUpdated>>> {
    input.validate()?;
    let changes = MovieChanges::try_from(input)?;

    let movie = MovieRepo::update(&state.pool, id, &changes)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(movie_id = movie.id, subject = %auth.user.subject, "Movie updated");

    Ok(Json(Success::new(MovieUpdated { movie_id: movie.id })))
}

/// DELETE /movies/{id}
pub async fn delete(
    auth: Authorized<DeleteMovie>,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Success<MovieDeleted>>> {
    if !MovieRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    tracing::info!(movie_id = id, subject = %auth.user.subject, "Movie deleted");

    Ok(Json(Success::new(MovieDeleted {
        movie_id: id,
        status: DELETED,
    })))
}
