//! Handlers for the `/actors` resource.
//!
//! Every endpoint requires a bearer token carrying the matching
//! `*:actors` permission; see [`crate::middleware::rbac`].

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use casting_core::error::CoreError;
use casting_core::types::DbId;
use casting_db::models::actor::{Actor, ActorChanges, CreateActor, NewActor, UpdateActor};
use casting_db::repositories::ActorRepo;
use serde::Serialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::middleware::rbac::{AddActors, Authorized, DeleteActors, GetActors, ModifyActors};
use crate::query::PageParams;
use crate::response::{Created, Success, DELETED};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ActorPage<'a> {
    pub actors: &'a [Actor],
    pub page: i64,
}

#[derive(Debug, Serialize)]
pub struct ActorDetails {
    pub actor_details: Actor,
}

#[derive(Debug, Serialize)]
pub struct ActorUpdated {
    pub actor_id: DbId,
}

#[derive(Debug, Serialize)]
pub struct ActorDeleted {
    pub actor_id: DbId,
    pub status: &'static str,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Actor", id })
}

/// POST /actors
pub async fn create(
    auth: Authorized<AddActors>,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateActor>,
) -> AppResult<Json<Success<Created>>> {
    input.validate()?;

    let actor = ActorRepo::insert(&state.pool, &NewActor::from(input)).await?;

    tracing::info!(
        actor_id = actor.id,
        identifier = %actor.identifier,
        subject = %auth.user.subject,
        "Actor created",
    );

    Ok(Json(Success::new(Created {
        id: actor.id,
        identifier: actor.identifier,
    })))
}

/// GET /actors?page=N
///
/// 404 when no actors exist at all; an out-of-range page is an empty list.
pub async fn list(
    _auth: Authorized<GetActors>,
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PageParams>,
) -> AppResult<Response> {
    let actors = ActorRepo::find_all(&state.pool).await?;
    if actors.is_empty() {
        return Err(AppError::Core(CoreError::EmptyCollection { entity: "Actor" }));
    }

    let page = params.page();
    let body = Success::new(ActorPage {
        actors: page.slice(&actors),
        page: page.number(),
    });

    Ok(Json(body).into_response())
}

/// GET /actors/{id}
pub async fn get_by_id(
    _auth: Authorized<GetActors>,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Success<ActorDetails>>> {
    let actor = ActorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(Success::new(ActorDetails {
        actor_details: actor,
    })))
}

/// PATCH /actors/{id}
///
/// Applies only the fields present in the body; `id` and `identifier`
/// never change.
pub async fn update(
    auth: Authorized<ModifyActors>,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateActor>,
) -> AppResult<Json<Success<ActorUpdated>>> {
    input.validate()?;

    let actor = ActorRepo::update(&state.pool, id, &ActorChanges::from(input))
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(actor_id = actor.id, subject = %auth.user.subject, "Actor updated");

    Ok(Json(Success::new(ActorUpdated { actor_id: actor.id })))
}

/// DELETE /actors/{id}
pub async fn delete(
    auth: Authorized<DeleteActors>,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Success<ActorDeleted>>> {
    if !ActorRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    tracing::info!(actor_id = id, subject = %auth.user.subject, "Actor deleted");

    Ok(Json(Success::new(ActorDeleted {
        actor_id: id,
        status: DELETED,
    })))
}
