use osu_api::User;
use serde::Serialize;
use utoipa::ToSchema;

use crate::delta::Delta;

/// What a caller gets back for a player: the live record and, unless this
/// is the first time the player was seen, the change since the baseline.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PlayerView {
    pub latest_data: User,
    pub diff: Option<Delta>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::user;
    use serde_json::Value;

    #[test]
    fn test_first_sight_serializes_null_diff() {
        let view = PlayerView {
            latest_data: user("2", "peppy", 1, 2, 3.0, 4.0, 5),
            diff: None,
        };
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["diff"], Value::Null);
        assert_eq!(json["latest_data"]["username"], "peppy");
        assert_eq!(json["latest_data"]["pp_rank"], 2);
    }

    #[test]
    fn test_diff_field_names() {
        let view = PlayerView {
            latest_data: user("2", "peppy", 1, 2, 3.0, 4.0, 5),
            diff: Some(Delta {
                play_count: 1,
                rank: -2,
                pp: 0.5,
                acc: 0.0,
                total_play: 60,
            }),
        };
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["diff"]["play_count"], 1);
        assert_eq!(json["diff"]["rank"], -2);
        assert_eq!(json["diff"]["total_play"], 60);
    }
}
