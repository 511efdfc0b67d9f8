use std::time::Duration;

use chrono::Utc;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::decode::decode_list;
use crate::error::{Result, UpstreamError};
use crate::models::{Beatmap, RecentPlay, User, UserBestScore};
use crate::query::{self, BeatmapQuery, GameMode};

pub const DEFAULT_BASE_URL: &str = "https://osu.ppy.sh/api";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
    /// Upper bound on a whole request, connect through body.
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Keyed client for the osu! v1 API. Holds no state besides its config.
#[derive(Debug, Clone)]
pub struct OsuClient {
    config: ClientConfig,
    client: Client,
}

impl OsuClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(UpstreamError::Configuration(
                "osu! API key must not be empty".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("osu-stats/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { config, client })
    }

    /// Look a player up by display name. An empty result means the player
    /// does not exist; it is not an error.
    pub async fn fetch_user(&self, username: &str) -> Result<Vec<User>> {
        let username = query::username(username)?;
        let captured_at = Utc::now();

        let mut users: Vec<User> = self
            .get("get_user", &[("u", username), ("type", "string")])
            .await?;
        for user in &mut users {
            user.captured_at = captured_at;
        }

        Ok(users)
    }

    pub async fn fetch_beatmaps(&self, query: &BeatmapQuery) -> Result<Vec<Beatmap>> {
        let (key, id) = query.param()?;
        self.get("get_beatmaps", &[(key, id)]).await
    }

    /// Best scores for `username`. `mode` defaults to standard and a zero
    /// `limit` to [`query::DEFAULT_BEST_LIMIT`].
    pub async fn fetch_user_best(
        &self,
        username: &str,
        mode: Option<GameMode>,
        limit: i32,
    ) -> Result<Vec<UserBestScore>> {
        let username = query::username(username)?;
        let limit = query::best_limit(limit)?.to_string();
        let mode = mode.unwrap_or_default();

        self.get(
            "get_user_best",
            &[
                ("u", username),
                ("type", "string"),
                ("m", mode.as_param()),
                ("limit", limit.as_str()),
            ],
        )
        .await
    }

    /// Most recent plays, newest first.
    pub async fn fetch_user_recent(&self, username: &str, limit: i32) -> Result<Vec<RecentPlay>> {
        let username = query::username(username)?;
        let limit = query::recent_limit(limit)?.to_string();

        self.get(
            "get_user_recent",
            &[("u", username), ("type", "string"), ("limit", limit.as_str())],
        )
        .await
    }

    async fn get<T: DeserializeOwned>(&self, method: &str, params: &[(&str, &str)]) -> Result<Vec<T>> {
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), method);

        tracing::debug!("Querying upstream method {} with {:?}", method, params);

        let response = self
            .client
            .get(&url)
            .query(&[("k", self.config.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            tracing::debug!("Upstream method {} answered {}", method, status);
        }

        decode_list(&body)
    }
}
