//! Typed query functions over the relational store. Each function is a single
//! lookup or mutation; ownership decisions live in the handlers.

pub mod day_exercises;
pub mod days;
pub mod exercises;
pub mod routines;
pub mod users;
pub mod weights;

use serde::Serialize;
use sqlx::PgPool;

/// Row counts per table, for the debug stats endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCounts {
    pub users: i64,
    pub routines: i64,
    pub days: i64,
    pub exercises: i64,
    pub day_exercises: i64,
    pub weights: i64,
}

pub async fn table_counts(pool: &PgPool) -> Result<TableCounts, sqlx::Error> {
    let (users, routines, days, exercises, day_exercises, weights): (
        i64,
        i64,
        i64,
        i64,
        i64,
        i64,
    ) = sqlx::query_as(
        "SELECT (SELECT count(*) FROM users),
                (SELECT count(*) FROM routines),
                (SELECT count(*) FROM days),
                (SELECT count(*) FROM exercises),
                (SELECT count(*) FROM day_exercises),
                (SELECT count(*) FROM weights)",
    )
    .fetch_one(pool)
    .await?;

    Ok(TableCounts {
        users,
        routines,
        days,
        exercises,
        day_exercises,
        weights,
    })
}
