use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One logged training record for an exercise. The user_id ties the record
/// to the account that logged it; only that account may read or mutate it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Weight {
    pub id: Uuid,
    pub amount: f64,
    pub reps: Option<i32>,
    pub sets: Option<i32>,
    pub exercise_id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}
