//! Weight-log handlers. Records are reachable both nested under their
//! exercise and flat under /api/weights/:id; both paths share the same
//! ownership rule: only the user who logged a record may read or mutate it.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    Extension,
};
use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use crate::api::body::{optional_positive_int, optional_positive_number, require_positive_number};
use crate::database::models::Weight;
use crate::database::store::{exercises, weights};
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;

/// GET /api/exercises/:id/weights - The caller's history for one exercise
pub async fn list(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(exercise_id): Path<Uuid>,
) -> Result<Json<Vec<Weight>>, ApiError> {
    require_exercise(&state.pool, exercise_id).await?;
    let records = weights::list_for_exercise(&state.pool, exercise_id, user.id).await?;
    Ok(Json(records))
}

/// POST /api/exercises/:id/weights - Log a record: {weight, reps?, sets?}
pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(exercise_id): Path<Uuid>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Weight>), ApiError> {
    require_exercise(&state.pool, exercise_id).await?;

    let amount = require_positive_number(&body, "weight")?;
    let reps = optional_positive_int(&body, "reps")?;
    let sets = optional_positive_int(&body, "sets")?;

    let record = weights::create(&state.pool, exercise_id, user.id, amount, reps, sets).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/exercises/:id/weights/:id
pub async fn get_nested(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path((exercise_id, weight_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Weight>, ApiError> {
    let record = owned_weight_in_exercise(&state.pool, &user, exercise_id, weight_id).await?;
    Ok(Json(record))
}

/// PUT /api/exercises/:id/weights/:id - Partial update
pub async fn update_nested(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path((exercise_id, weight_id)): Path<(Uuid, Uuid)>,
    Json(body): Json<Value>,
) -> Result<Json<Weight>, ApiError> {
    let record = owned_weight_in_exercise(&state.pool, &user, exercise_id, weight_id).await?;
    apply_update(&state.pool, record, &body).await
}

/// DELETE /api/exercises/:id/weights/:id
pub async fn remove_nested(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path((exercise_id, weight_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Weight>, ApiError> {
    let record = owned_weight_in_exercise(&state.pool, &user, exercise_id, weight_id).await?;
    weights::delete(&state.pool, record.id).await?;
    Ok(Json(record))
}

/// GET /api/weights/:id
pub async fn get_flat(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(weight_id): Path<Uuid>,
) -> Result<Json<Weight>, ApiError> {
    let record = owned_weight(&state.pool, &user, weight_id).await?;
    Ok(Json(record))
}

/// PUT /api/weights/:id - Partial update, flat variant
pub async fn update_flat(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(weight_id): Path<Uuid>,
    Json(body): Json<Value>,
) -> Result<Json<Weight>, ApiError> {
    let record = owned_weight(&state.pool, &user, weight_id).await?;
    apply_update(&state.pool, record, &body).await
}

/// DELETE /api/weights/:id
pub async fn remove_flat(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(weight_id): Path<Uuid>,
) -> Result<Json<Weight>, ApiError> {
    let record = owned_weight(&state.pool, &user, weight_id).await?;
    weights::delete(&state.pool, record.id).await?;
    Ok(Json(record))
}

async fn require_exercise(pool: &PgPool, exercise_id: Uuid) -> Result<(), ApiError> {
    exercises::find_by_id(pool, exercise_id)
        .await?
        .ok_or_else(|| ApiError::not_found("exercise not found"))?;
    Ok(())
}

async fn owned_weight(
    pool: &PgPool,
    caller: &AuthUser,
    weight_id: Uuid,
) -> Result<Weight, ApiError> {
    let record = weights::find_by_id(pool, weight_id)
        .await?
        .ok_or_else(|| ApiError::not_found("weight record not found"))?;

    if record.user_id != caller.id {
        return Err(ApiError::forbidden("not the owner of this weight record"));
    }

    Ok(record)
}

async fn owned_weight_in_exercise(
    pool: &PgPool,
    caller: &AuthUser,
    exercise_id: Uuid,
    weight_id: Uuid,
) -> Result<Weight, ApiError> {
    require_exercise(pool, exercise_id).await?;
    let record = owned_weight(pool, caller, weight_id).await?;

    if record.exercise_id != exercise_id {
        return Err(ApiError::bad_request(
            "weight record does not belong to this exercise",
        ));
    }

    Ok(record)
}

/// Merge partial input into the loaded record and write it back. A field
/// present with null clears it; an absent field keeps its current value.
async fn apply_update(
    pool: &PgPool,
    record: Weight,
    body: &Value,
) -> Result<Json<Weight>, ApiError> {
    let amount = optional_positive_number(body, "weight")?.unwrap_or(record.amount);
    let reps = if body.get("reps").is_some() {
        optional_positive_int(body, "reps")?
    } else {
        record.reps
    };
    let sets = if body.get("sets").is_some() {
        optional_positive_int(body, "sets")?
    } else {
        record.sets
    };

    let updated = weights::update(pool, record.id, amount, reps, sets).await?;
    Ok(Json(updated))
}
