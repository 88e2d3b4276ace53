//! Member endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use serde_json::{json, Value};

use crate::db::repos::{Member, MemberRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{JsonRecord, ValidId};
use crate::http::server::AppState;
use crate::models::NewMember;

/// Member response
///
/// Field order is the public contract and does not follow the table.
#[derive(Debug, Serialize)]
pub struct MemberResponse {
    pub member_id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub membership_type: String,
}

impl From<Member> for MemberResponse {
    fn from(m: Member) -> Self {
        Self {
            member_id: m.member_id,
            name: m.name,
            email: m.email,
            phone: m.phone,
            membership_type: m.membership_type,
        }
    }
}

/// GET /members - list all members
async fn list_members(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MemberResponse>>, ApiError> {
    let members = MemberRepo::new(&state.pool).list().await?;
    Ok(Json(members.into_iter().map(MemberResponse::from).collect()))
}

/// POST /members - create a new member
async fn create_member(
    State(state): State<Arc<AppState>>,
    JsonRecord(body): JsonRecord,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let member = NewMember::from_json(&body)?;
    let member_id = MemberRepo::new(&state.pool).insert(&member).await?;
    tracing::info!(member_id, "member added");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "New member added successfully",
            "member_id": member_id
        })),
    ))
}

/// GET /members/{member_id} - get a single member
async fn get_member(
    State(state): State<Arc<AppState>>,
    ValidId(member_id): ValidId,
) -> Result<Json<MemberResponse>, ApiError> {
    let member = MemberRepo::new(&state.pool)
        .get(member_id)
        .await?
        .ok_or_else(|| ApiError::not_found("member", member_id))?;

    Ok(Json(MemberResponse::from(member)))
}

/// PUT /members/{member_id} - overwrite a member
async fn update_member(
    State(state): State<Arc<AppState>>,
    ValidId(member_id): ValidId,
    JsonRecord(body): JsonRecord,
) -> Result<Json<Value>, ApiError> {
    let member = NewMember::from_json(&body)?;
    let rows = MemberRepo::new(&state.pool).update(member_id, &member).await?;
    if rows == 0 {
        return Err(ApiError::not_found("member", member_id));
    }

    Ok(Json(json!({
        "message": "Member details were successfully updated!"
    })))
}

/// DELETE /members/{member_id} - remove a member and all of its sessions
async fn delete_member(
    State(state): State<Arc<AppState>>,
    ValidId(member_id): ValidId,
) -> Result<Json<Value>, ApiError> {
    let removed = MemberRepo::new(&state.pool).delete_cascade(member_id).await?;
    tracing::info!(
        member_id,
        sessions_removed = removed.sessions_removed,
        "member removed"
    );

    Ok(Json(json!({
        "message": "Member removed successfully",
        "sessions_removed": removed.sessions_removed
    })))
}

/// Member routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/members", get(list_members).post(create_member))
        .route(
            "/members/{member_id}",
            get(get_member).put(update_member).delete(delete_member),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_fields_render_in_declared_order() {
        let member = Member {
            member_id: 1,
            name: "Alice".into(),
            email: "a@x.com".into(),
            phone: "555".into(),
            membership_type: "gold".into(),
        };
        let rendered = serde_json::to_string(&MemberResponse::from(member)).unwrap();
        assert_eq!(
            rendered,
            r#"{"member_id":1,"name":"Alice","email":"a@x.com","phone":"555","membership_type":"gold"}"#
        );
    }
}
