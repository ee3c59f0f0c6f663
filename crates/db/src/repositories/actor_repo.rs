//! Repository for the `actors` table.

use casting_core::types::{new_identifier, DbId};
use sqlx::PgPool;

use crate::models::actor::{Actor, ActorChanges, NewActor};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, age, gender, identifier";

/// Provides CRUD operations for actors.
pub struct ActorRepo;

impl ActorRepo {
    /// Insert a new actor with a freshly generated identifier, returning the
    /// created row.
    pub async fn insert(pool: &PgPool, input: &NewActor) -> Result<Actor, sqlx::Error> {
        let query = format!(
            "INSERT INTO actors (name, age, gender, identifier)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );

        let mut tx = pool.begin().await?;
        let actor = sqlx::query_as::<_, Actor>(&query)
            .bind(&input.name)
            .bind(input.age)
            .bind(input.gender.code())
            .bind(new_identifier())
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(actor)
    }

    /// Find an actor by primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Actor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actors WHERE id = $1");
        sqlx::query_as::<_, Actor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every actor in primary key order.
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Actor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actors ORDER BY id");
        sqlx::query_as::<_, Actor>(&query).fetch_all(pool).await
    }

    /// Update an actor. Only non-`None` fields in `changes` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        changes: &ActorChanges,
    ) -> Result<Option<Actor>, sqlx::Error> {
        let query = format!(
            "UPDATE actors SET
                name = COALESCE($2, name),
                age = COALESCE($3, age),
                gender = COALESCE($4, gender)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );

        let mut tx = pool.begin().await?;
        let actor = sqlx::query_as::<_, Actor>(&query)
            .bind(id)
            .bind(&changes.name)
            .bind(changes.age)
            .bind(changes.gender.map(|g| g.code()))
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(actor)
    }

    /// Permanently delete an actor. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let result = sqlx::query("DELETE FROM actors WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }
}
