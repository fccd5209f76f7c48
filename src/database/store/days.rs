use sqlx::PgPool;
use uuid::Uuid;

use crate::database::models::{Day, Weekday};

pub async fn list_for_routine(pool: &PgPool, routine_id: Uuid) -> Result<Vec<Day>, sqlx::Error> {
    sqlx::query_as::<_, Day>(
        "SELECT id, weekday, routine_id, created_at FROM days
         WHERE routine_id = $1 ORDER BY created_at",
    )
    .bind(routine_id)
    .fetch_all(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Day>, sqlx::Error> {
    sqlx::query_as::<_, Day>("SELECT id, weekday, routine_id, created_at FROM days WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// At most one day per weekday within a routine
pub async fn find_by_weekday(
    pool: &PgPool,
    routine_id: Uuid,
    weekday: Weekday,
) -> Result<Option<Day>, sqlx::Error> {
    sqlx::query_as::<_, Day>(
        "SELECT id, weekday, routine_id, created_at FROM days
         WHERE routine_id = $1 AND weekday = $2",
    )
    .bind(routine_id)
    .bind(weekday)
    .fetch_optional(pool)
    .await
}

pub async fn create(pool: &PgPool, routine_id: Uuid, weekday: Weekday) -> Result<Day, sqlx::Error> {
    sqlx::query_as::<_, Day>(
        "INSERT INTO days (weekday, routine_id) VALUES ($1, $2)
         RETURNING id, weekday, routine_id, created_at",
    )
    .bind(weekday)
    .bind(routine_id)
    .fetch_one(pool)
    .await
}

pub async fn update_weekday(pool: &PgPool, id: Uuid, weekday: Weekday) -> Result<Day, sqlx::Error> {
    sqlx::query_as::<_, Day>(
        "UPDATE days SET weekday = $2 WHERE id = $1
         RETURNING id, weekday, routine_id, created_at",
    )
    .bind(id)
    .bind(weekday)
    .fetch_one(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM days WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
