//! Member repository
//!
//! Handles member CRUD with:
//! - list/get/insert/update on a single borrowed connection
//! - cascade delete of sessions and member inside one transaction

use sqlx::{Connection, FromRow, PgPool};

use super::DbError;
use crate::db::pool::acquire;
use crate::models::NewMember;

/// Member record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Member {
    pub member_id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub membership_type: String,
}

/// Outcome of a cascade delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovedMember {
    pub member_id: i64,
    pub sessions_removed: u64,
}

/// Member repository
pub struct MemberRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> MemberRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every member in storage order. An empty table is `Ok(vec![])`.
    pub async fn list(&self) -> Result<Vec<Member>, DbError> {
        let mut conn = acquire(self.pool).await?;

        let members: Vec<Member> = sqlx::query_as(
            "SELECT member_id, name, email, phone, membership_type FROM members",
        )
        .fetch_all(&mut *conn)
        .await?;

        tracing::debug!(count = members.len(), "listed members");
        Ok(members)
    }

    /// Get a single member by id.
    pub async fn get(&self, member_id: i64) -> Result<Option<Member>, DbError> {
        let mut conn = acquire(self.pool).await?;

        let member = sqlx::query_as(
            r#"
            SELECT member_id, name, email, phone, membership_type
            FROM members
            WHERE member_id = $1
            "#,
        )
        .bind(member_id)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(member)
    }

    /// Insert a member, returning the store-generated id.
    pub async fn insert(&self, member: &NewMember) -> Result<i64, DbError> {
        let mut conn = acquire(self.pool).await?;

        let (member_id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO members (name, email, phone, membership_type)
            VALUES ($1, $2, $3, $4)
            RETURNING member_id
            "#,
        )
        .bind(&member.name)
        .bind(&member.email)
        .bind(&member.phone)
        .bind(&member.membership_type)
        .fetch_one(&mut *conn)
        .await?;

        tracing::debug!(member_id, "inserted member");
        Ok(member_id)
    }

    /// Overwrite every non-key field of a member.
    ///
    /// Returns the number of rows matched; zero is not an error here.
    pub async fn update(&self, member_id: i64, member: &NewMember) -> Result<u64, DbError> {
        let mut conn = acquire(self.pool).await?;

        let result = sqlx::query(
            r#"
            UPDATE members
            SET name = $1, email = $2, phone = $3, membership_type = $4
            WHERE member_id = $5
            "#,
        )
        .bind(&member.name)
        .bind(&member.email)
        .bind(&member.phone)
        .bind(&member.membership_type)
        .bind(member_id)
        .execute(&mut *conn)
        .await?;

        tracing::debug!(member_id, rows = result.rows_affected(), "updated member");
        Ok(result.rows_affected())
    }

    /// Delete a member together with all of its sessions (atomic).
    ///
    /// The member row is locked first; if it does not exist nothing is
    /// changed and `NotFound` is returned. Sessions are removed before the
    /// member so the foreign key never dangles. Any error drops the
    /// transaction, which rolls it back.
    pub async fn delete_cascade(&self, member_id: i64) -> Result<RemovedMember, DbError> {
        let mut conn = acquire(self.pool).await?;
        let mut tx = conn.begin().await?;

        let existing: Option<(i64,)> =
            sqlx::query_as("SELECT member_id FROM members WHERE member_id = $1 FOR UPDATE")
                .bind(member_id)
                .fetch_optional(&mut *tx)
                .await?;

        if existing.is_none() {
            return Err(DbError::not_found("member", member_id));
        }

        let sessions_removed = sqlx::query("DELETE FROM sessions WHERE member_id = $1")
            .bind(member_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        sqlx::query("DELETE FROM members WHERE member_id = $1")
            .bind(member_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(member_id, sessions_removed, "deleted member with sessions");
        Ok(RemovedMember {
            member_id,
            sessions_removed,
        })
    }
}
