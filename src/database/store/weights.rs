use sqlx::PgPool;
use uuid::Uuid;

use crate::database::models::Weight;

/// The caller's weight history for one exercise, oldest first
pub async fn list_for_exercise(
    pool: &PgPool,
    exercise_id: Uuid,
    user_id: Uuid,
) -> Result<Vec<Weight>, sqlx::Error> {
    sqlx::query_as::<_, Weight>(
        "SELECT id, amount, reps, sets, exercise_id, user_id, created_at FROM weights
         WHERE exercise_id = $1 AND user_id = $2 ORDER BY created_at",
    )
    .bind(exercise_id)
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Weight>, sqlx::Error> {
    sqlx::query_as::<_, Weight>(
        "SELECT id, amount, reps, sets, exercise_id, user_id, created_at FROM weights
         WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn create(
    pool: &PgPool,
    exercise_id: Uuid,
    user_id: Uuid,
    amount: f64,
    reps: Option<i32>,
    sets: Option<i32>,
) -> Result<Weight, sqlx::Error> {
    sqlx::query_as::<_, Weight>(
        "INSERT INTO weights (amount, reps, sets, exercise_id, user_id)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id, amount, reps, sets, exercise_id, user_id, created_at",
    )
    .bind(amount)
    .bind(reps)
    .bind(sets)
    .bind(exercise_id)
    .bind(user_id)
    .fetch_one(pool)
    .await
}

/// Full-row update; the handler merges partial input into the loaded record
pub async fn update(
    pool: &PgPool,
    id: Uuid,
    amount: f64,
    reps: Option<i32>,
    sets: Option<i32>,
) -> Result<Weight, sqlx::Error> {
    sqlx::query_as::<_, Weight>(
        "UPDATE weights SET amount = $2, reps = $3, sets = $4 WHERE id = $1
         RETURNING id, amount, reps, sets, exercise_id, user_id, created_at",
    )
    .bind(id)
    .bind(amount)
    .bind(reps)
    .bind(sets)
    .fetch_one(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM weights WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
