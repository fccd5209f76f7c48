use sqlx::PgPool;
use uuid::Uuid;

use crate::database::models::{Routine, Weekday};

pub async fn list_for_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<Routine>, sqlx::Error> {
    sqlx::query_as::<_, Routine>(
        "SELECT id, name, user_id, created_at FROM routines
         WHERE user_id = $1 ORDER BY created_at",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Routine>, sqlx::Error> {
    sqlx::query_as::<_, Routine>("SELECT id, name, user_id, created_at FROM routines WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Routine-name uniqueness is scoped per user
pub async fn find_by_name_for_user(
    pool: &PgPool,
    user_id: Uuid,
    name: &str,
) -> Result<Option<Routine>, sqlx::Error> {
    sqlx::query_as::<_, Routine>(
        "SELECT id, name, user_id, created_at FROM routines
         WHERE user_id = $1 AND name = $2",
    )
    .bind(user_id)
    .bind(name)
    .fetch_optional(pool)
    .await
}

/// The caller's routine containing a day for the given weekday, if any
pub async fn find_for_weekday(
    pool: &PgPool,
    user_id: Uuid,
    weekday: Weekday,
) -> Result<Option<Routine>, sqlx::Error> {
    sqlx::query_as::<_, Routine>(
        "SELECT r.id, r.name, r.user_id, r.created_at FROM routines r
         JOIN days d ON d.routine_id = r.id
         WHERE r.user_id = $1 AND d.weekday = $2
         LIMIT 1",
    )
    .bind(user_id)
    .bind(weekday)
    .fetch_optional(pool)
    .await
}

pub async fn create(pool: &PgPool, user_id: Uuid, name: &str) -> Result<Routine, sqlx::Error> {
    sqlx::query_as::<_, Routine>(
        "INSERT INTO routines (name, user_id) VALUES ($1, $2)
         RETURNING id, name, user_id, created_at",
    )
    .bind(name)
    .bind(user_id)
    .fetch_one(pool)
    .await
}

pub async fn rename(pool: &PgPool, id: Uuid, name: &str) -> Result<Routine, sqlx::Error> {
    sqlx::query_as::<_, Routine>(
        "UPDATE routines SET name = $2 WHERE id = $1
         RETURNING id, name, user_id, created_at",
    )
    .bind(id)
    .bind(name)
    .fetch_one(pool)
    .await
}

/// Days and day assignments go with the routine via FK cascade
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM routines WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
