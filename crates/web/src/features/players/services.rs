use osu_api::{GameMode, RecentPlay, UserBestScore};
use tracker::{PlayerView, RecentPlayFilter, Result};

use crate::state::AppTracker;

/// Live stats plus change since first sight
pub async fn get_player_stat(tracker: &AppTracker, name: &str) -> Result<PlayerView> {
    let view = tracker.get_player_stat(name).await?;
    tracing::info!(
        "Served stats for {} (first sight: {})",
        view.latest_data.username,
        view.diff.is_none()
    );
    Ok(view)
}

/// Most recent play matching the filter
pub async fn get_recent_play(
    tracker: &AppTracker,
    name: &str,
    filter: &RecentPlayFilter,
) -> Result<RecentPlay> {
    tracker.get_recent_play(name, filter).await
}

/// Top scores in one game mode
pub async fn get_best_scores(
    tracker: &AppTracker,
    name: &str,
    mode: Option<GameMode>,
    limit: i32,
) -> Result<Vec<UserBestScore>> {
    tracker.get_best_scores(name, mode, limit).await
}
