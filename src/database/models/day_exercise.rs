use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::Exercise;

/// Join row linking a day to an exercise. Presence only, no scheduling order.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DayExercise {
    pub day_id: Uuid,
    pub exercise_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Listing shape for a day's assignments: the join keys plus the nested
/// exercise record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayExerciseEntry {
    pub day_id: Uuid,
    pub exercise_id: Uuid,
    pub exercise: Exercise,
}

impl DayExerciseEntry {
    pub fn new(day_id: Uuid, exercise: Exercise) -> Self {
        Self {
            day_id,
            exercise_id: exercise.id,
            exercise,
        }
    }
}
