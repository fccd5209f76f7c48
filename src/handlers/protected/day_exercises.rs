use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    Extension,
};
use serde_json::Value;
use uuid::Uuid;

use crate::api::body::require_str;
use crate::database::models::{DayExercise, DayExerciseEntry};
use crate::database::store::{day_exercises, exercises};
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;

use super::utils::owned_day;

/// GET /api/routines/:id/days/:id/exercises - Assignments with nested exercise
pub async fn list(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path((routine_id, day_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Vec<DayExerciseEntry>>, ApiError> {
    let (_, day) = owned_day(&state.pool, &user, routine_id, day_id).await?;

    let entries = day_exercises::list_for_day(&state.pool, day.id)
        .await?
        .into_iter()
        .map(|exercise| DayExerciseEntry::new(day.id, exercise))
        .collect();

    Ok(Json(entries))
}

/// POST /api/routines/:id/days/:id/exercises - Assign a catalog exercise
pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path((routine_id, day_id)): Path<(Uuid, Uuid)>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<DayExercise>), ApiError> {
    let (_, day) = owned_day(&state.pool, &user, routine_id, day_id).await?;

    let exercise_id = require_str(&body, "exerciseId")?
        .parse::<Uuid>()
        .map_err(|_| ApiError::bad_request("exerciseId must be a valid id"))?;

    let exercise = exercises::find_by_id(&state.pool, exercise_id)
        .await?
        .ok_or_else(|| ApiError::not_found("exercise not found"))?;

    if day_exercises::find(&state.pool, day.id, exercise.id)
        .await?
        .is_some()
    {
        return Err(ApiError::conflict("exercise already added to this day"));
    }

    let assignment = day_exercises::create(&state.pool, day.id, exercise.id).await?;
    Ok((StatusCode::CREATED, Json(assignment)))
}

/// DELETE /api/routines/:id/days/:id/exercises/:id
pub async fn remove(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path((routine_id, day_id, exercise_id)): Path<(Uuid, Uuid, Uuid)>,
) -> Result<Json<DayExercise>, ApiError> {
    let (_, day) = owned_day(&state.pool, &user, routine_id, day_id).await?;

    let assignment = day_exercises::find(&state.pool, day.id, exercise_id)
        .await?
        .ok_or_else(|| ApiError::not_found("exercise not assigned to this day"))?;

    day_exercises::delete(&state.pool, day.id, exercise_id).await?;
    Ok(Json(assignment))
}
