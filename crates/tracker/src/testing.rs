//! In-memory stand-ins for the upstream client and the snapshot store.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{TimeZone, Utc};
use osu_api::{Beatmap, BeatmapQuery, GameMode, RecentPlay, UpstreamError, User, UserBestScore};
use serde_json::json;
use storage::StorageError;
use storage::dto::player_snapshot::NewPlayerSnapshot;
use storage::models::PlayerSnapshot;
use tokio::sync::Barrier;
use uuid::Uuid;

use crate::traits::{PlayerSource, SnapshotStore};

pub fn user(
    user_id: &str,
    username: &str,
    playcount: i64,
    pp_rank: i64,
    pp_raw: f64,
    accuracy: f64,
    total_seconds_played: i64,
) -> User {
    serde_json::from_value(json!({
        "user_id": user_id,
        "username": username,
        "playcount": playcount.to_string(),
        "pp_rank": pp_rank.to_string(),
        "pp_raw": pp_raw.to_string(),
        "accuracy": accuracy.to_string(),
        "total_seconds_played": total_seconds_played.to_string(),
        "country": "JP"
    }))
    .unwrap()
}

pub fn snapshot_of(live: &User) -> PlayerSnapshot {
    PlayerSnapshot {
        snapshot_id: Uuid::new_v4(),
        player_id: live.user_id.clone(),
        username: live.username.clone(),
        play_count: live.playcount,
        pp_rank: live.pp_rank,
        pp_raw: live.pp_raw,
        accuracy: live.accuracy,
        total_seconds_played: live.total_seconds_played,
        captured_at: Utc::now(),
    }
}

/// `score` doubles as a marker so tests can tell plays apart.
pub fn play(beatmap_id: &str, perfect: bool, score: i64) -> RecentPlay {
    serde_json::from_value(json!({
        "beatmap_id": beatmap_id,
        "score": score.to_string(),
        "perfect": if perfect { "1" } else { "0" },
        "user_id": "2",
        "date": Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap().to_rfc3339(),
        "rank": "A"
    }))
    .unwrap()
}

#[derive(Default)]
pub struct FakeSource {
    users: Mutex<HashMap<String, Vec<User>>>,
    malformed_users: bool,
    recent: Mutex<Vec<RecentPlay>>,
    user_calls: AtomicUsize,
    pub recent_limits: Mutex<Vec<i32>>,
}

impl FakeSource {
    pub fn with_user(self, live: User) -> Self {
        self.set_user(live);
        self
    }

    /// Answer every user lookup with an HTML error page.
    pub fn malformed(mut self) -> Self {
        self.malformed_users = true;
        self
    }

    pub fn with_recent(self, plays: Vec<RecentPlay>) -> Self {
        *self.recent.lock().unwrap() = plays;
        self
    }

    /// Replace what the upstream reports for this player.
    pub fn set_user(&self, live: User) {
        self.users
            .lock()
            .unwrap()
            .entry(live.username.to_lowercase())
            .or_default()
            .insert(0, live);
    }

    pub fn user_calls(&self) -> usize {
        self.user_calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl PlayerSource for FakeSource {
    async fn fetch_user(&self, username: &str) -> osu_api::Result<Vec<User>> {
        self.user_calls.fetch_add(1, Ordering::SeqCst);
        if self.malformed_users {
            return Err(UpstreamError::MalformedResponse {
                body: "<html>oops</html>".to_string(),
                reason: "expected value at line 1 column 1".to_string(),
            });
        }
        Ok(self
            .users
            .lock()
            .unwrap()
            .get(&username.to_lowercase())
            .cloned()
            .unwrap_or_default())
    }

    async fn fetch_user_recent(
        &self,
        _username: &str,
        limit: i32,
    ) -> osu_api::Result<Vec<RecentPlay>> {
        self.recent_limits.lock().unwrap().push(limit);
        let plays = self.recent.lock().unwrap();
        Ok(plays.iter().take(limit as usize).cloned().collect())
    }

    async fn fetch_user_best(
        &self,
        _username: &str,
        _mode: Option<GameMode>,
        _limit: i32,
    ) -> osu_api::Result<Vec<UserBestScore>> {
        Ok(Vec::new())
    }

    async fn fetch_beatmaps(&self, query: &BeatmapQuery) -> osu_api::Result<Vec<Beatmap>> {
        query.param()?;
        Ok(Vec::new())
    }
}

/// Failure the fake store should produce instead of answering.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum StoreFault {
    None,
    LookupUnavailable,
    IdLookupUnavailable,
    InsertUnavailable,
}

pub struct FakeStore {
    rows: Mutex<Vec<PlayerSnapshot>>,
    fault: StoreFault,
    lookup_barrier: Option<Barrier>,
    insert_attempts: AtomicUsize,
}

impl Default for FakeStore {
    fn default() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            fault: StoreFault::None,
            lookup_barrier: None,
            insert_attempts: AtomicUsize::new(0),
        }
    }
}

impl FakeStore {
    pub fn with_row(self, row: PlayerSnapshot) -> Self {
        self.rows.lock().unwrap().push(row);
        self
    }

    pub fn with_fault(mut self, fault: StoreFault) -> Self {
        self.fault = fault;
        self
    }

    /// Hold every id lookup until `parties` of them are in flight, so that
    /// concurrent first-time requests all miss before any of them inserts.
    pub fn with_lookup_barrier(mut self, parties: usize) -> Self {
        self.lookup_barrier = Some(Barrier::new(parties));
        self
    }

    pub fn rows(&self) -> Vec<PlayerSnapshot> {
        self.rows.lock().unwrap().clone()
    }

    pub fn insert_attempts(&self) -> usize {
        self.insert_attempts.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl SnapshotStore for FakeStore {
    async fn lookup_by_username(&self, username: &str) -> storage::Result<PlayerSnapshot> {
        if self.fault == StoreFault::LookupUnavailable {
            return Err(StorageError::Unavailable("connection refused".to_string()));
        }
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.username == username)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    async fn lookup_by_player_id(&self, player_id: &str) -> storage::Result<PlayerSnapshot> {
        if self.fault == StoreFault::IdLookupUnavailable {
            return Err(StorageError::Unavailable("connection refused".to_string()));
        }
        let found = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.player_id == player_id)
            .cloned();
        if let Some(barrier) = &self.lookup_barrier {
            barrier.wait().await;
        }
        found.ok_or(StorageError::NotFound)
    }

    async fn insert(&self, snapshot: &NewPlayerSnapshot) -> storage::Result<PlayerSnapshot> {
        self.insert_attempts.fetch_add(1, Ordering::SeqCst);
        if self.fault == StoreFault::InsertUnavailable {
            return Err(StorageError::Unavailable("connection reset".to_string()));
        }

        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|row| row.player_id == snapshot.player_id) {
            return Err(StorageError::DuplicateKey(format!(
                "player_id {} already recorded",
                snapshot.player_id
            )));
        }
        let row = PlayerSnapshot {
            snapshot_id: Uuid::new_v4(),
            player_id: snapshot.player_id.clone(),
            username: snapshot.username.clone(),
            play_count: snapshot.play_count,
            pp_rank: snapshot.pp_rank,
            pp_raw: snapshot.pp_raw,
            accuracy: snapshot.accuracy,
            total_seconds_played: snapshot.total_seconds_played,
            captured_at: Utc::now(),
        };
        rows.push(row.clone());
        Ok(row)
    }
}
