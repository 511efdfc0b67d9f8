use osu_api::{Beatmap, BeatmapQuery, GameMode, RecentPlay, User, UserBestScore};
use storage::StorageError;
use storage::models::PlayerSnapshot;
use tracing::{debug, info, warn};

use crate::delta::{Delta, baseline_from};
use crate::error::{Result, TrackerError};
use crate::recent::{RECENT_PLAY_WINDOW, RecentPlayFilter};
use crate::traits::{PlayerSource, SnapshotStore};
use crate::view::PlayerView;

/// Stateless reconciliation service. Every call is an independent
/// fetch-then-compare-then-maybe-write; all state lives in the store.
///
/// The baseline written on first sight is never updated, so `diff` always
/// measures the change since the player was first seen.
pub struct Tracker<U, S> {
    source: U,
    store: S,
}

impl<U, S> Tracker<U, S>
where
    U: PlayerSource,
    S: SnapshotStore,
{
    pub fn new(source: U, store: S) -> Self {
        Self { source, store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Live statistics for `name` plus the change since the stored baseline.
    pub async fn get_player_stat(&self, name: &str) -> Result<PlayerView> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TrackerError::PlayerNotFound(name.to_string()));
        }

        // The first match is authoritative.
        let live = self
            .source
            .fetch_user(name)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| TrackerError::PlayerNotFound(name.to_string()))?;

        match self.find_baseline(&live).await? {
            Some(baseline) => {
                let diff = Delta::between(&live, &baseline);
                if diff.is_zero() {
                    debug!(
                        "Player {} unchanged since baseline from {}",
                        live.username, baseline.captured_at
                    );
                } else {
                    debug!(
                        "Player {} compared against baseline from {}",
                        live.username, baseline.captured_at
                    );
                }
                Ok(PlayerView {
                    latest_data: live,
                    diff: Some(diff),
                })
            }
            None => {
                self.record_baseline(&live).await;
                Ok(PlayerView {
                    latest_data: live,
                    diff: None,
                })
            }
        }
    }

    /// Stored baseline for `live`, by username first and then by player id
    /// so that a renamed player still finds the row written under the old name.
    async fn find_baseline(&self, live: &User) -> Result<Option<PlayerSnapshot>> {
        match self.store.lookup_by_username(&live.username).await {
            Ok(baseline) => return Ok(Some(baseline)),
            Err(StorageError::NotFound) => {}
            Err(e) => return Err(e.into()),
        }

        match self.store.lookup_by_player_id(&live.user_id).await {
            Ok(baseline) => {
                debug!(
                    "Player {} found under previous name {}",
                    live.user_id, baseline.username
                );
                Ok(Some(baseline))
            }
            Err(StorageError::NotFound) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Best-effort: the caller already has the live record, so a failed
    /// write is only logged.
    async fn record_baseline(&self, live: &User) {
        match self.store.insert(&baseline_from(live)).await {
            Ok(_) => info!(
                "Recorded baseline for player {} ({})",
                live.username, live.user_id
            ),
            Err(StorageError::DuplicateKey(_)) => info!(
                "Baseline for player {} ({}) was recorded by a concurrent request",
                live.username, live.user_id
            ),
            Err(e) => warn!(
                "Failed to record baseline for player {} ({}): {}",
                live.username, live.user_id, e
            ),
        }
    }

    /// Most recent play of `name` that satisfies `filter`.
    ///
    /// Filtered lookups only scan the last [`RECENT_PLAY_WINDOW`] plays; an
    /// older match is reported as `PlayNotFound`.
    pub async fn get_recent_play(&self, name: &str, filter: &RecentPlayFilter) -> Result<RecentPlay> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TrackerError::InvalidInput(
                "player name must not be empty".to_string(),
            ));
        }

        let not_found = || TrackerError::PlayNotFound(name.to_string());

        if filter.is_empty() {
            return self
                .source
                .fetch_user_recent(name, 1)
                .await?
                .into_iter()
                .next()
                .ok_or_else(not_found);
        }

        let plays = self
            .source
            .fetch_user_recent(name, RECENT_PLAY_WINDOW)
            .await?;
        debug!("Scanning {} recent plays of {}", plays.len(), name);

        filter.first_match(plays).ok_or_else(not_found)
    }

    pub async fn get_best_scores(
        &self,
        name: &str,
        mode: Option<GameMode>,
        limit: i32,
    ) -> Result<Vec<UserBestScore>> {
        Ok(self.source.fetch_user_best(name, mode, limit).await?)
    }

    pub async fn get_beatmaps(&self, query: &BeatmapQuery) -> Result<Vec<Beatmap>> {
        Ok(self.source.fetch_beatmaps(query).await?)
    }
}

#[cfg(test)]
impl<U, S> Tracker<U, S> {
    pub(crate) fn source(&self) -> &U {
        &self.source
    }
}
