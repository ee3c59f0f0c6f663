//! Repository for the `movies` table.

use casting_core::types::{new_identifier, DbId};
use sqlx::PgPool;

use crate::models::movie::{Movie, MovieChanges, NewMovie};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, release_date, production_house, ott_partner, identifier";

/// Provides CRUD operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie with a freshly generated identifier, returning the
    /// created row.
    pub async fn insert(pool: &PgPool, input: &NewMovie) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies (title, release_date, production_house, ott_partner, identifier)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );

        let mut tx = pool.begin().await?;
        let movie = sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(input.release_date)
            .bind(&input.production_house)
            .bind(&input.ott_partner)
            .bind(new_identifier())
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(movie)
    }

    /// Find a movie by primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every movie in primary key order.
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY id");
        sqlx::query_as::<_, Movie>(&query).fetch_all(pool).await
    }

    /// Update a movie. Only non-`None` fields in `changes` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        changes: &MovieChanges,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "UPDATE movies SET
                title = COALESCE($2, title),
                release_date = COALESCE($3, release_date),
                production_house = COALESCE($4, production_house),
                ott_partner = COALESCE($5, ott_partner)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );

        let mut tx = pool.begin().await?;
        let movie = sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(&changes.title)
            .bind(changes.release_date)
            .bind(&changes.production_house)
            .bind(&changes.ott_partner)
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(movie)
    }

    /// Permanently delete a movie. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }
}
