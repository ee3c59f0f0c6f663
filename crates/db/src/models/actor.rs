//! Actor entity model and DTOs.

use casting_core::gender::Gender;
use casting_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// An actor row from the `actors` table.
///
/// Serializes to the external shape `{ id, name, age, gender, identifier }`
/// with `gender` spelled out (`"Male"`, `"Female"`, `"Unknown"`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Actor {
    pub id: DbId,
    pub name: String,
    pub age: i32,
    #[sqlx(try_from = "String")]
    pub gender: Gender,
    pub identifier: String,
}

/// Request body for creating an actor.
///
/// `gender` is free-form; see [`Gender::from_input`].
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateActor {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(range(min = 0, max = 150, message = "age must be between 0 and 150"))]
    pub age: i32,
    pub gender: Option<String>,
}

/// Request body for a partial actor update. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateActor {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[validate(range(min = 0, max = 150, message = "age must be between 0 and 150"))]
    pub age: Option<i32>,
    pub gender: Option<String>,
}

/// Normalized column values for a new `actors` row.
///
/// The primary key and identifier are assigned by the repository.
#[derive(Debug, Clone)]
pub struct NewActor {
    pub name: String,
    pub age: i32,
    pub gender: Gender,
}

/// Normalized column changes for an existing actor.
#[derive(Debug, Clone, Default)]
pub struct ActorChanges {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<Gender>,
}

impl From<CreateActor> for NewActor {
    fn from(input: CreateActor) -> Self {
        Self {
            name: input.name,
            age: input.age,
            gender: Gender::from_input(input.gender.as_deref()),
        }
    }
}

impl From<UpdateActor> for ActorChanges {
    fn from(input: UpdateActor) -> Self {
        Self {
            name: input.name,
            age: input.age,
            gender: input
                .gender
                .as_deref()
                .map(|value| Gender::from_input(Some(value))),
        }
    }
}
