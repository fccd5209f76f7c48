use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    Extension,
};
use serde_json::Value;
use uuid::Uuid;

use crate::api::body::require_str;
use crate::database::models::{Day, Weekday};
use crate::database::store::days;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;

use super::utils::{owned_day, owned_routine};

/// GET /api/routines/:id/days
pub async fn list(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(routine_id): Path<Uuid>,
) -> Result<Json<Vec<Day>>, ApiError> {
    let routine = owned_routine(&state.pool, &user, routine_id).await?;
    let days = days::list_for_routine(&state.pool, routine.id).await?;
    Ok(Json(days))
}

/// POST /api/routines/:id/days - Add a weekday slot to a routine
pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(routine_id): Path<Uuid>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Day>), ApiError> {
    let routine = owned_routine(&state.pool, &user, routine_id).await?;
    let weekday = parse_weekday(&body)?;

    if days::find_by_weekday(&state.pool, routine.id, weekday)
        .await?
        .is_some()
    {
        return Err(ApiError::conflict("weekday already present in routine"));
    }

    let day = days::create(&state.pool, routine.id, weekday).await?;
    Ok((StatusCode::CREATED, Json(day)))
}

/// GET /api/routines/:id/days/:id
pub async fn get(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path((routine_id, day_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Day>, ApiError> {
    let (_, day) = owned_day(&state.pool, &user, routine_id, day_id).await?;
    Ok(Json(day))
}

/// PUT /api/routines/:id/days/:id - Move the slot to another weekday
pub async fn update(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path((routine_id, day_id)): Path<(Uuid, Uuid)>,
    Json(body): Json<Value>,
) -> Result<Json<Day>, ApiError> {
    let (routine, day) = owned_day(&state.pool, &user, routine_id, day_id).await?;
    let weekday = parse_weekday(&body)?;

    if let Some(existing) = days::find_by_weekday(&state.pool, routine.id, weekday).await? {
        if existing.id != day.id {
            return Err(ApiError::conflict("weekday already present in routine"));
        }
    }

    let updated = days::update_weekday(&state.pool, day.id, weekday).await?;
    Ok(Json(updated))
}

/// DELETE /api/routines/:id/days/:id
pub async fn remove(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path((routine_id, day_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Day>, ApiError> {
    let (_, day) = owned_day(&state.pool, &user, routine_id, day_id).await?;
    days::delete(&state.pool, day.id).await?;
    Ok(Json(day))
}

fn parse_weekday(body: &Value) -> Result<Weekday, ApiError> {
    let raw = require_str(body, "weekday")?;
    Weekday::parse(&raw)
        .ok_or_else(|| ApiError::bad_request("weekday must be one of MONDAY through SUNDAY"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_weekday_accepts_valid_names() {
        assert_eq!(parse_weekday(&json!({ "weekday": "MONDAY" })).unwrap(), Weekday::Monday);
        assert_eq!(parse_weekday(&json!({ "weekday": "friday" })).unwrap(), Weekday::Friday);
    }

    #[test]
    fn parse_weekday_rejects_bad_input() {
        assert_eq!(parse_weekday(&json!({})).unwrap_err().status_code(), 400);
        assert_eq!(
            parse_weekday(&json!({ "weekday": "SOMEDAY" })).unwrap_err().status_code(),
            400
        );
        assert_eq!(
            parse_weekday(&json!({ "weekday": 3 })).unwrap_err().status_code(),
            400
        );
    }
}
