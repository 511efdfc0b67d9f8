use osu_api::{Beatmap, BeatmapQuery, GameMode, OsuClient, RecentPlay, User, UserBestScore};
use storage::Database;
use storage::dto::player_snapshot::NewPlayerSnapshot;
use storage::models::PlayerSnapshot;
use storage::repository::SnapshotRepository;

/// Where live player data comes from.
#[async_trait::async_trait]
pub trait PlayerSource: Send + Sync {
    async fn fetch_user(&self, username: &str) -> osu_api::Result<Vec<User>>;

    async fn fetch_user_recent(&self, username: &str, limit: i32)
    -> osu_api::Result<Vec<RecentPlay>>;

    async fn fetch_user_best(
        &self,
        username: &str,
        mode: Option<GameMode>,
        limit: i32,
    ) -> osu_api::Result<Vec<UserBestScore>>;

    async fn fetch_beatmaps(&self, query: &BeatmapQuery) -> osu_api::Result<Vec<Beatmap>>;
}

/// Where baselines are kept. `insert` must report an existing row for the
/// same player as `StorageError::DuplicateKey`.
#[async_trait::async_trait]
pub trait SnapshotStore: Send + Sync {
    async fn lookup_by_username(&self, username: &str) -> storage::Result<PlayerSnapshot>;

    async fn lookup_by_player_id(&self, player_id: &str) -> storage::Result<PlayerSnapshot>;

    async fn insert(&self, snapshot: &NewPlayerSnapshot) -> storage::Result<PlayerSnapshot>;
}

#[async_trait::async_trait]
impl PlayerSource for OsuClient {
    async fn fetch_user(&self, username: &str) -> osu_api::Result<Vec<User>> {
        OsuClient::fetch_user(self, username).await
    }

    async fn fetch_user_recent(
        &self,
        username: &str,
        limit: i32,
    ) -> osu_api::Result<Vec<RecentPlay>> {
        OsuClient::fetch_user_recent(self, username, limit).await
    }

    async fn fetch_user_best(
        &self,
        username: &str,
        mode: Option<GameMode>,
        limit: i32,
    ) -> osu_api::Result<Vec<UserBestScore>> {
        OsuClient::fetch_user_best(self, username, mode, limit).await
    }

    async fn fetch_beatmaps(&self, query: &BeatmapQuery) -> osu_api::Result<Vec<Beatmap>> {
        OsuClient::fetch_beatmaps(self, query).await
    }
}

#[async_trait::async_trait]
impl SnapshotStore for Database {
    async fn lookup_by_username(&self, username: &str) -> storage::Result<PlayerSnapshot> {
        SnapshotRepository::new(self.pool())
            .find_by_username(username)
            .await
    }

    async fn lookup_by_player_id(&self, player_id: &str) -> storage::Result<PlayerSnapshot> {
        SnapshotRepository::new(self.pool())
            .find_by_player_id(player_id)
            .await
    }

    async fn insert(&self, snapshot: &NewPlayerSnapshot) -> storage::Result<PlayerSnapshot> {
        SnapshotRepository::new(self.pool()).insert(snapshot).await
    }
}
