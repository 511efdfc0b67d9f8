use osu_api::User;
use serde::{Deserialize, Serialize};
use storage::dto::player_snapshot::NewPlayerSnapshot;
use storage::models::PlayerSnapshot;
use utoipa::ToSchema;

/// Live value minus baseline value, field by field.
///
/// A negative `rank` means the player climbed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Delta {
    pub play_count: i64,
    pub rank: i64,
    pub pp: f64,
    pub acc: f64,
    pub total_play: i64,
}

impl Delta {
    pub fn between(live: &User, baseline: &PlayerSnapshot) -> Self {
        Self {
            play_count: live.playcount - baseline.play_count,
            rank: live.pp_rank - baseline.pp_rank,
            pp: live.pp_raw - baseline.pp_raw,
            acc: live.accuracy - baseline.accuracy,
            total_play: live.total_seconds_played - baseline.total_seconds_played,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// The row written the first time a player is seen.
pub fn baseline_from(live: &User) -> NewPlayerSnapshot {
    NewPlayerSnapshot {
        player_id: live.user_id.clone(),
        username: live.username.clone(),
        play_count: live.playcount,
        pp_rank: live.pp_rank,
        pp_raw: live.pp_raw,
        accuracy: live.accuracy,
        total_seconds_played: live.total_seconds_played,
    }
}
