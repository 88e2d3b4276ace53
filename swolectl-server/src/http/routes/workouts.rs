//! Workout session endpoints
//!
//! Collection lives at `/dank_sesh`, single sessions at `/workouts/{id}`.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use serde_json::{json, Value};

use crate::db::repos::{Workout, WorkoutRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{JsonRecord, ValidId};
use crate::http::server::AppState;
use crate::models::NewWorkout;

/// Workout response
#[derive(Debug, Serialize)]
pub struct WorkoutResponse {
    pub sesh_id: i64,
    pub date: String,
    pub member_id: i64,
    pub workout_type: String,
}

impl From<Workout> for WorkoutResponse {
    fn from(w: Workout) -> Self {
        Self {
            sesh_id: w.sesh_id,
            date: w.date,
            member_id: w.member_id,
            workout_type: w.workout_type,
        }
    }
}

/// GET /dank_sesh - list all sessions
async fn list_workouts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<WorkoutResponse>>, ApiError> {
    let workouts = WorkoutRepo::new(&state.pool).list().await?;
    Ok(Json(workouts.into_iter().map(WorkoutResponse::from).collect()))
}

/// POST /dank_sesh - log a new session
async fn create_workout(
    State(state): State<Arc<AppState>>,
    JsonRecord(body): JsonRecord,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let workout = NewWorkout::from_json(&body)?;
    let sesh_id = WorkoutRepo::new(&state.pool).insert(&workout).await?;
    tracing::info!(sesh_id, member_id = workout.member_id, "workout added");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "New workout added successfully",
            "sesh_id": sesh_id
        })),
    ))
}

/// GET /workouts/{id} - get a single session
async fn get_workout(
    State(state): State<Arc<AppState>>,
    ValidId(sesh_id): ValidId,
) -> Result<Json<WorkoutResponse>, ApiError> {
    let workout = WorkoutRepo::new(&state.pool)
        .get(sesh_id)
        .await?
        .ok_or_else(|| ApiError::not_found("workout", sesh_id))?;

    Ok(Json(WorkoutResponse::from(workout)))
}

/// PUT /workouts/{id} - overwrite a session
async fn update_workout(
    State(state): State<Arc<AppState>>,
    ValidId(sesh_id): ValidId,
    JsonRecord(body): JsonRecord,
) -> Result<Json<Value>, ApiError> {
    let workout = NewWorkout::from_json(&body)?;
    let rows = WorkoutRepo::new(&state.pool).update(sesh_id, &workout).await?;
    if rows == 0 {
        return Err(ApiError::not_found("workout", sesh_id));
    }

    Ok(Json(json!({
        "message": "Workout details were successfully updated!"
    })))
}

/// DELETE /workouts/{id} - remove a single session
async fn delete_workout(
    State(state): State<Arc<AppState>>,
    ValidId(sesh_id): ValidId,
) -> Result<Json<Value>, ApiError> {
    let removed = WorkoutRepo::new(&state.pool).delete(sesh_id).await?;
    if removed == 0 {
        return Err(ApiError::not_found("workout", sesh_id));
    }

    Ok(Json(json!({
        "message": "Workout removed successfully"
    })))
}

/// Workout routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/dank_sesh", get(list_workouts).post(create_workout))
        .route(
            "/workouts/{id}",
            get(get_workout).put(update_workout).delete(delete_workout),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workout_fields_render_in_declared_order() {
        let workout = Workout {
            sesh_id: 4,
            date: "2024-05-01".into(),
            member_id: 1,
            workout_type: "legs".into(),
        };
        let rendered = serde_json::to_string(&WorkoutResponse::from(workout)).unwrap();
        assert_eq!(
            rendered,
            r#"{"sesh_id":4,"date":"2024-05-01","member_id":1,"workout_type":"legs"}"#
        );
    }
}
