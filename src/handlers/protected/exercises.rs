use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    Extension,
};
use serde_json::Value;
use uuid::Uuid;

use crate::api::body::require_str;
use crate::database::models::Exercise;
use crate::database::store::exercises;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;

/// GET /api/exercises - The shared catalog, visible to every user
pub async fn list(
    State(state): State<AppState>,
    Extension(_user): Extension<AuthUser>,
) -> Result<Json<Vec<Exercise>>, ApiError> {
    let exercises = exercises::list(&state.pool).await?;
    Ok(Json(exercises))
}

/// POST /api/exercises - Add a catalog entry; names are globally unique
pub async fn create(
    State(state): State<AppState>,
    Extension(_user): Extension<AuthUser>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Exercise>), ApiError> {
    let name = require_str(&body, "name")?;

    if exercises::find_by_name(&state.pool, &name).await?.is_some() {
        return Err(ApiError::conflict("exercise name already in use"));
    }

    let exercise = exercises::create(&state.pool, &name).await?;
    Ok((StatusCode::CREATED, Json(exercise)))
}

/// GET /api/exercises/:id
pub async fn get(
    State(state): State<AppState>,
    Extension(_user): Extension<AuthUser>,
    Path(exercise_id): Path<Uuid>,
) -> Result<Json<Exercise>, ApiError> {
    let exercise = exercises::find_by_id(&state.pool, exercise_id)
        .await?
        .ok_or_else(|| ApiError::not_found("exercise not found"))?;
    Ok(Json(exercise))
}

/// DELETE /api/exercises/:id - Remove an exercise plus its assignments and
/// weight history
pub async fn remove(
    State(state): State<AppState>,
    Extension(_user): Extension<AuthUser>,
    Path(exercise_id): Path<Uuid>,
) -> Result<Json<Exercise>, ApiError> {
    let exercise = exercises::find_by_id(&state.pool, exercise_id)
        .await?
        .ok_or_else(|| ApiError::not_found("exercise not found"))?;

    exercises::delete_with_history(&state.pool, exercise.id).await?;
    Ok(Json(exercise))
}
