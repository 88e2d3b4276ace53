//! Workout session repository
//!
//! Sessions live in the `sessions` table and always belong to a member.
//! Deleting a session never touches its member.

use sqlx::{FromRow, PgPool};

use super::{foreign_key, DbError};
use crate::db::pool::acquire;
use crate::models::NewWorkout;

/// Session record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Workout {
    pub sesh_id: i64,
    pub date: String,
    pub member_id: i64,
    pub workout_type: String,
}

/// Workout session repository
pub struct WorkoutRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> WorkoutRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every session in storage order.
    pub async fn list(&self) -> Result<Vec<Workout>, DbError> {
        let mut conn = acquire(self.pool).await?;

        let workouts: Vec<Workout> =
            sqlx::query_as("SELECT sesh_id, date, member_id, workout_type FROM sessions")
                .fetch_all(&mut *conn)
                .await?;

        tracing::debug!(count = workouts.len(), "listed sessions");
        Ok(workouts)
    }

    /// Get a single session by id.
    pub async fn get(&self, sesh_id: i64) -> Result<Option<Workout>, DbError> {
        let mut conn = acquire(self.pool).await?;

        let workout = sqlx::query_as(
            "SELECT sesh_id, date, member_id, workout_type FROM sessions WHERE sesh_id = $1",
        )
        .bind(sesh_id)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(workout)
    }

    /// Insert a session, returning the store-generated id.
    ///
    /// An unknown `member_id` is reported as `MissingReference`.
    pub async fn insert(&self, workout: &NewWorkout) -> Result<i64, DbError> {
        let mut conn = acquire(self.pool).await?;

        let (sesh_id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO sessions (date, member_id, workout_type)
            VALUES ($1, $2, $3)
            RETURNING sesh_id
            "#,
        )
        .bind(&workout.date)
        .bind(workout.member_id)
        .bind(&workout.workout_type)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| foreign_key(e, "member_id", workout.member_id))?;

        tracing::debug!(sesh_id, member_id = workout.member_id, "inserted session");
        Ok(sesh_id)
    }

    /// Overwrite every non-key field of a session.
    ///
    /// Returns the number of rows matched; zero is not an error here.
    pub async fn update(&self, sesh_id: i64, workout: &NewWorkout) -> Result<u64, DbError> {
        let mut conn = acquire(self.pool).await?;

        let result = sqlx::query(
            r#"
            UPDATE sessions
            SET date = $1, member_id = $2, workout_type = $3
            WHERE sesh_id = $4
            "#,
        )
        .bind(&workout.date)
        .bind(workout.member_id)
        .bind(&workout.workout_type)
        .bind(sesh_id)
        .execute(&mut *conn)
        .await
        .map_err(|e| foreign_key(e, "member_id", workout.member_id))?;

        tracing::debug!(sesh_id, rows = result.rows_affected(), "updated session");
        Ok(result.rows_affected())
    }

    /// Delete one session. Returns the number of rows removed.
    pub async fn delete(&self, sesh_id: i64) -> Result<u64, DbError> {
        let mut conn = acquire(self.pool).await?;

        let removed = sqlx::query("DELETE FROM sessions WHERE sesh_id = $1")
            .bind(sesh_id)
            .execute(&mut *conn)
            .await?
            .rows_affected();

        tracing::debug!(sesh_id, removed, "deleted session");
        Ok(removed)
    }
}
