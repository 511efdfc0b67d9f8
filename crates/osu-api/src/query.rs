use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{Result, UpstreamError};

/// Number of best scores requested when the caller passes `0`.
pub const DEFAULT_BEST_LIMIT: i32 = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    #[default]
    Standard,
    Taiko,
    Catch,
    Mania,
}

impl GameMode {
    /// Value of the upstream `m` parameter.
    pub fn as_param(self) -> &'static str {
        match self {
            GameMode::Standard => "0",
            GameMode::Taiko => "1",
            GameMode::Catch => "2",
            GameMode::Mania => "3",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameMode::Standard => "standard",
            GameMode::Taiko => "taiko",
            GameMode::Catch => "catch",
            GameMode::Mania => "mania",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for GameMode {
    type Err = UpstreamError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "0" | "osu" | "std" | "standard" => Ok(GameMode::Standard),
            "1" | "taiko" => Ok(GameMode::Taiko),
            "2" | "catch" | "ctb" | "fruits" => Ok(GameMode::Catch),
            "3" | "mania" => Ok(GameMode::Mania),
            other => Err(UpstreamError::InvalidQuery(format!(
                "unknown game mode '{}'",
                other
            ))),
        }
    }
}

/// Selects beatmaps either by set or by individual map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BeatmapQuery {
    pub set_id: Option<String>,
    pub beatmap_id: Option<String>,
}

impl BeatmapQuery {
    /// The single upstream parameter this query resolves to. A map id wins
    /// over a set id; blank ids count as absent.
    pub fn param(&self) -> Result<(&'static str, &str)> {
        fn non_blank(id: &Option<String>) -> Option<&str> {
            id.as_deref().map(str::trim).filter(|id| !id.is_empty())
        }

        if let Some(beatmap_id) = non_blank(&self.beatmap_id) {
            return Ok(("b", beatmap_id));
        }
        if let Some(set_id) = non_blank(&self.set_id) {
            return Ok(("s", set_id));
        }
        Err(UpstreamError::InvalidQuery(
            "either a beatmap set id or a beatmap id is required".to_string(),
        ))
    }
}

pub(crate) fn best_limit(limit: i32) -> Result<i32> {
    match limit {
        0 => Ok(DEFAULT_BEST_LIMIT),
        l if l < 0 => Err(UpstreamError::InvalidQuery(format!(
            "limit must not be negative, got {}",
            l
        ))),
        l => Ok(l),
    }
}

pub(crate) fn recent_limit(limit: i32) -> Result<i32> {
    if limit <= 0 {
        return Err(UpstreamError::InvalidQuery(format!(
            "limit must be positive, got {}",
            limit
        )));
    }
    Ok(limit)
}

pub(crate) fn username(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(UpstreamError::InvalidQuery(
            "username must not be empty".to_string(),
        ));
    }
    Ok(name)
}
