//! Table bootstrap for members and sessions
//!
//! Idempotent `CREATE ... IF NOT EXISTS` statements, run by `swolectl init-db`
//! or `swolectl serve --init-db`. There is no versioned migration history.

use sqlx::PgPool;

use super::pool::acquire;
use super::repos::DbError;

/// Statements creating the two tables and their supporting index.
///
/// `sessions.member_id` references `members` without `ON DELETE CASCADE`:
/// dependents are removed explicitly by `MemberRepo::delete_cascade`.
pub const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS members (
        member_id BIGINT GENERATED ALWAYS AS IDENTITY PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        phone TEXT NOT NULL,
        membership_type TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS sessions (
        sesh_id BIGINT GENERATED ALWAYS AS IDENTITY PRIMARY KEY,
        date TEXT NOT NULL,
        member_id BIGINT NOT NULL REFERENCES members(member_id),
        workout_type TEXT NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_sessions_member_id ON sessions(member_id)",
];

/// Create the tables if they do not exist yet.
pub async fn bootstrap(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Bootstrapping swolectl schema...");

    let mut conn = acquire(pool).await?;
    for statement in SCHEMA {
        sqlx::query(statement).execute(&mut *conn).await?;
    }

    tracing::info!("Schema ready");
    Ok(())
}
