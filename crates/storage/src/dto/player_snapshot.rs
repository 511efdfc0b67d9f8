use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NewPlayerSnapshot {
    pub player_id: String,
    pub username: String,
    pub play_count: i64,
    pub pp_rank: i64,
    pub pp_raw: f64,
    pub accuracy: f64,
    pub total_seconds_played: i64,
}
