//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Borrows one pooled connection per operation (released on drop)
//! - Binds every value as a parameter, never interpolates
//! - Uses a transaction for the multi-statement member delete

pub mod members;
pub mod workouts;

pub use members::{Member, MemberRepo, RemovedMember};
pub use workouts::{Workout, WorkoutRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// No connection could be obtained; no statement was run.
    #[error("database unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),

    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    /// A foreign key pointed at a row that does not exist.
    #[error("{field} '{id}' does not reference an existing row")]
    MissingReference { field: &'static str, id: i64 },
}

impl DbError {
    pub(crate) fn not_found(resource: &'static str, id: i64) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}

/// Map a foreign-key violation on `field` to [`DbError::MissingReference`].
pub(crate) fn foreign_key(err: sqlx::Error, field: &'static str, id: i64) -> DbError {
    match &err {
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
            DbError::MissingReference { field, id }
        }
        _ => DbError::Sqlx(err),
    }
}
