use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use crate::api::body::require_str;
use crate::database::store::users;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/auth/login - Exchange username/password for a bearer token
///
/// Unknown usernames and wrong passwords produce the same 401 so the
/// response does not reveal which accounts exist.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let username = require_str(&body, "username")?;
    let password = require_str(&body, "password")?;

    let user = users::find_by_username(&state.pool, &username)
        .await?
        .ok_or_else(|| ApiError::unauthorized("invalid credentials"))?;

    let password_ok = bcrypt::verify(&password, &user.password_hash).map_err(|e| {
        tracing::error!("bcrypt verify failed: {}", e);
        ApiError::internal_server_error("an error occurred while processing your request")
    })?;

    if !password_ok {
        return Err(ApiError::unauthorized("invalid credentials"));
    }

    let token = state.tokens.issue(user.id, &user.username).map_err(|e| {
        tracing::error!("token issue failed: {}", e);
        ApiError::internal_server_error("an error occurred while processing your request")
    })?;

    tracing::info!(username = %user.username, "user logged in");

    Ok(Json(json!({ "user": user, "token": token })))
}
