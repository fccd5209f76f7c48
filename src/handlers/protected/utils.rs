//! Ownership-chain resolution shared by every nested-resource handler.
//!
//! The chain is always the same: the routine must exist (404), it must belong
//! to the caller (403), and a day referenced underneath it must exist (404)
//! and actually sit in that routine (400).

use sqlx::PgPool;
use uuid::Uuid;

use crate::database::models::{Day, Routine};
use crate::database::store::{days, routines};
use crate::error::ApiError;
use crate::middleware::AuthUser;

pub async fn owned_routine(
    pool: &PgPool,
    caller: &AuthUser,
    routine_id: Uuid,
) -> Result<Routine, ApiError> {
    let routine = routines::find_by_id(pool, routine_id)
        .await?
        .ok_or_else(|| ApiError::not_found("routine not found"))?;

    if routine.user_id != caller.id {
        return Err(ApiError::forbidden("not the owner of this routine"));
    }

    Ok(routine)
}

pub async fn owned_day(
    pool: &PgPool,
    caller: &AuthUser,
    routine_id: Uuid,
    day_id: Uuid,
) -> Result<(Routine, Day), ApiError> {
    let routine = owned_routine(pool, caller, routine_id).await?;

    let day = days::find_by_id(pool, day_id)
        .await?
        .ok_or_else(|| ApiError::not_found("day not found"))?;

    if day.routine_id != routine.id {
        return Err(ApiError::bad_request("day does not belong to this routine"));
    }

    Ok((routine, day))
}
