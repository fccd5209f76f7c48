use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    Extension,
};
use serde_json::Value;
use uuid::Uuid;

use crate::api::body::require_str;
use crate::database::models::{Routine, Weekday};
use crate::database::store::routines;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;

use super::utils::owned_routine;

/// GET /api/routines - List the caller's routines
pub async fn list(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<Routine>>, ApiError> {
    let routines = routines::list_for_user(&state.pool, user.id).await?;
    Ok(Json(routines))
}

/// POST /api/routines - Create a routine; names are unique per user
pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Routine>), ApiError> {
    let name = require_str(&body, "name")?;

    if routines::find_by_name_for_user(&state.pool, user.id, &name)
        .await?
        .is_some()
    {
        return Err(ApiError::conflict("routine name already in use"));
    }

    let routine = routines::create(&state.pool, user.id, &name).await?;
    Ok((StatusCode::CREATED, Json(routine)))
}

/// GET /api/routines/today - The routine scheduled for today's weekday, or null
pub async fn today(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Option<Routine>>, ApiError> {
    let routine = routines::find_for_weekday(&state.pool, user.id, Weekday::today()).await?;
    Ok(Json(routine))
}

/// GET /api/routines/:id
pub async fn get(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(routine_id): Path<Uuid>,
) -> Result<Json<Routine>, ApiError> {
    let routine = owned_routine(&state.pool, &user, routine_id).await?;
    Ok(Json(routine))
}

/// PUT /api/routines/:id - Rename a routine
pub async fn update(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(routine_id): Path<Uuid>,
    Json(body): Json<Value>,
) -> Result<Json<Routine>, ApiError> {
    let routine = owned_routine(&state.pool, &user, routine_id).await?;
    let name = require_str(&body, "name")?;

    if let Some(existing) = routines::find_by_name_for_user(&state.pool, user.id, &name).await? {
        if existing.id != routine.id {
            return Err(ApiError::conflict("routine name already in use"));
        }
    }

    let updated = routines::rename(&state.pool, routine.id, &name).await?;
    Ok(Json(updated))
}

/// DELETE /api/routines/:id - Delete a routine; its days cascade with it
pub async fn remove(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(routine_id): Path<Uuid>,
) -> Result<Json<Routine>, ApiError> {
    let routine = owned_routine(&state.pool, &user, routine_id).await?;
    routines::delete(&state.pool, routine.id).await?;
    Ok(Json(routine))
}
