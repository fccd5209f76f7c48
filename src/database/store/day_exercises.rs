use sqlx::PgPool;
use uuid::Uuid;

use crate::database::models::{DayExercise, Exercise};

/// Exercises assigned to a day, in assignment order
pub async fn list_for_day(pool: &PgPool, day_id: Uuid) -> Result<Vec<Exercise>, sqlx::Error> {
    sqlx::query_as::<_, Exercise>(
        "SELECT e.id, e.name, e.created_at FROM exercises e
         JOIN day_exercises de ON de.exercise_id = e.id
         WHERE de.day_id = $1 ORDER BY de.created_at",
    )
    .bind(day_id)
    .fetch_all(pool)
    .await
}

pub async fn find(
    pool: &PgPool,
    day_id: Uuid,
    exercise_id: Uuid,
) -> Result<Option<DayExercise>, sqlx::Error> {
    sqlx::query_as::<_, DayExercise>(
        "SELECT day_id, exercise_id, created_at FROM day_exercises
         WHERE day_id = $1 AND exercise_id = $2",
    )
    .bind(day_id)
    .bind(exercise_id)
    .fetch_optional(pool)
    .await
}

pub async fn create(
    pool: &PgPool,
    day_id: Uuid,
    exercise_id: Uuid,
) -> Result<DayExercise, sqlx::Error> {
    sqlx::query_as::<_, DayExercise>(
        "INSERT INTO day_exercises (day_id, exercise_id) VALUES ($1, $2)
         RETURNING day_id, exercise_id, created_at",
    )
    .bind(day_id)
    .bind(exercise_id)
    .fetch_one(pool)
    .await
}

pub async fn delete(pool: &PgPool, day_id: Uuid, exercise_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM day_exercises WHERE day_id = $1 AND exercise_id = $2")
        .bind(day_id)
        .bind(exercise_id)
        .execute(pool)
        .await?;
    Ok(())
}
