use osu_api::RecentPlay;

/// How many recent plays a filtered lookup scans. Older plays are never
/// considered, even if they would match.
pub const RECENT_PLAY_WINDOW: i32 = 50;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentPlayFilter {
    pub beatmap_id: Option<String>,
    pub perfect_only: bool,
}

impl RecentPlayFilter {
    pub fn on_beatmap(beatmap_id: impl Into<String>) -> Self {
        Self {
            beatmap_id: Some(beatmap_id.into()),
            perfect_only: false,
        }
    }

    pub fn perfect() -> Self {
        Self {
            beatmap_id: None,
            perfect_only: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.beatmap().is_none() && !self.perfect_only
    }

    pub fn matches(&self, play: &RecentPlay) -> bool {
        if let Some(beatmap_id) = self.beatmap() {
            if play.beatmap_id != beatmap_id {
                return false;
            }
        }
        !self.perfect_only || play.perfect
    }

    /// First play in `plays` (newest first) that passes the filter.
    pub fn first_match(&self, plays: Vec<RecentPlay>) -> Option<RecentPlay> {
        plays.into_iter().find(|play| self.matches(play))
    }

    fn beatmap(&self) -> Option<&str> {
        self.beatmap_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::play;

    #[test]
    fn test_empty_filter() {
        assert!(RecentPlayFilter::default().is_empty());
        assert!(RecentPlayFilter::on_beatmap("  ").is_empty());
        assert!(!RecentPlayFilter::on_beatmap("1").is_empty());
        assert!(!RecentPlayFilter::perfect().is_empty());
    }

    #[test]
    fn test_beatmap_and_perfect_combine() {
        let filter = RecentPlayFilter {
            beatmap_id: Some("100".to_string()),
            perfect_only: true,
        };
        let plays = vec![play("100", false, 0), play("200", true, 1), play("100", true, 2)];

        let found = filter.first_match(plays).unwrap();
        assert_eq!(found.beatmap_id, "100");
        assert!(found.perfect);
        assert_eq!(found.score, 2);
    }

    #[test]
    fn test_first_match_prefers_most_recent() {
        let plays = vec![play("1", true, 10), play("2", true, 20)];
        let found = RecentPlayFilter::perfect().first_match(plays).unwrap();
        assert_eq!(found.score, 10);
    }
}
