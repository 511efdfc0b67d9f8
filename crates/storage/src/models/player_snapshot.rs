use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Baseline statistics recorded the first time a player was seen.
///
/// `player_id` is unique across the table; `captured_at` is the time the
/// row was written, not the time the upstream produced the numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PlayerSnapshot {
    pub snapshot_id: Uuid,
    pub player_id: String,
    pub username: String,
    pub play_count: i64,
    pub pp_rank: i64,
    pub pp_raw: f64,
    pub accuracy: f64,
    pub total_seconds_played: i64,
    pub captured_at: DateTime<Utc>,
}
