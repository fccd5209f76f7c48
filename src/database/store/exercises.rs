use sqlx::PgPool;
use uuid::Uuid;

use crate::database::models::Exercise;

pub async fn list(pool: &PgPool) -> Result<Vec<Exercise>, sqlx::Error> {
    sqlx::query_as::<_, Exercise>("SELECT id, name, created_at FROM exercises ORDER BY name")
        .fetch_all(pool)
        .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Exercise>, sqlx::Error> {
    sqlx::query_as::<_, Exercise>("SELECT id, name, created_at FROM exercises WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Exercise names are unique across the whole catalog, unlike routine names
pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Exercise>, sqlx::Error> {
    sqlx::query_as::<_, Exercise>("SELECT id, name, created_at FROM exercises WHERE name = $1")
        .bind(name)
        .fetch_optional(pool)
        .await
}

pub async fn create(pool: &PgPool, name: &str) -> Result<Exercise, sqlx::Error> {
    sqlx::query_as::<_, Exercise>(
        "INSERT INTO exercises (name) VALUES ($1) RETURNING id, name, created_at",
    )
    .bind(name)
    .fetch_one(pool)
    .await
}

/// Remove an exercise together with its day assignments and weight history.
/// The cleanup is explicit rather than FK-cascaded, in one transaction.
pub async fn delete_with_history(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM day_exercises WHERE exercise_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM weights WHERE exercise_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM exercises WHERE id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await
}
