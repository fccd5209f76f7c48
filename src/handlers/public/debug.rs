//! Unauthenticated seed/stats endpoints for local development. Both refuse
//! to run outside the development environment.

use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::{json, Value};

use crate::database::store::{self, exercises, users};
use crate::error::ApiError;
use crate::state::AppState;

const SEED_USERNAME: &str = "demo";
const SEED_PASSWORD: &str = "demo";
const SEED_EXERCISES: [&str; 4] = ["SQUAT", "BENCH PRESS", "DEADLIFT", "OVERHEAD PRESS"];

/// POST /api/debug/seed - Create a demo account and a starter exercise catalog
pub async fn seed(State(state): State<AppState>) -> Result<(StatusCode, Json<Value>), ApiError> {
    ensure_development(&state)?;

    let user = match users::find_by_username(&state.pool, SEED_USERNAME).await? {
        Some(existing) => existing,
        None => {
            let hash = bcrypt::hash(SEED_PASSWORD, bcrypt::DEFAULT_COST).map_err(|e| {
                tracing::error!("bcrypt hash failed: {}", e);
                ApiError::internal_server_error("an error occurred while processing your request")
            })?;
            users::create(&state.pool, SEED_USERNAME, &hash).await?
        }
    };

    let mut created = Vec::new();
    for name in SEED_EXERCISES {
        if exercises::find_by_name(&state.pool, name).await?.is_none() {
            created.push(exercises::create(&state.pool, name).await?);
        }
    }

    tracing::info!(new_exercises = created.len(), "seeded development data");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "user": user, "exercises": created })),
    ))
}

/// GET /api/debug/stats - Row counts per table
pub async fn stats(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    ensure_development(&state)?;

    let counts = store::table_counts(&state.pool).await?;
    Ok(Json(json!(counts)))
}

fn ensure_development(state: &AppState) -> Result<(), ApiError> {
    if state.config.is_development() {
        Ok(())
    } else {
        Err(ApiError::forbidden("debug endpoints are disabled"))
    }
}
