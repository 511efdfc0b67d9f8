use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A player as returned by `get_user`.
///
/// Field names follow the upstream payload. `captured_at` is not part of the
/// upstream response; the client stamps it with the time of the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    #[serde(deserialize_with = "de::id")]
    pub user_id: String,
    pub username: String,
    #[serde(default, deserialize_with = "de::optional_timestamp")]
    pub join_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "de::number")]
    pub count300: i64,
    #[serde(default, deserialize_with = "de::number")]
    pub count100: i64,
    #[serde(default, deserialize_with = "de::number")]
    pub count50: i64,
    #[serde(default, deserialize_with = "de::number")]
    pub playcount: i64,
    #[serde(default, deserialize_with = "de::number")]
    pub ranked_score: i64,
    #[serde(default, deserialize_with = "de::number")]
    pub total_score: i64,
    /// Global rank, 0 when the player is unranked.
    #[serde(default, deserialize_with = "de::number")]
    pub pp_rank: i64,
    #[serde(default, deserialize_with = "de::number")]
    pub level: f64,
    #[serde(default, deserialize_with = "de::number")]
    pub pp_raw: f64,
    #[serde(default, deserialize_with = "de::number")]
    pub accuracy: f64,
    #[serde(default, deserialize_with = "de::number")]
    pub count_rank_ss: i64,
    #[serde(default, deserialize_with = "de::number")]
    pub count_rank_ssh: i64,
    #[serde(default, deserialize_with = "de::number")]
    pub count_rank_s: i64,
    #[serde(default, deserialize_with = "de::number")]
    pub count_rank_sh: i64,
    #[serde(default, deserialize_with = "de::number")]
    pub count_rank_a: i64,
    #[serde(default)]
    pub country: String,
    #[serde(default, deserialize_with = "de::number")]
    pub total_seconds_played: i64,
    #[serde(default, deserialize_with = "de::number")]
    pub pp_country_rank: i64,
    #[serde(skip_deserializing, default = "Utc::now")]
    pub captured_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Beatmap {
    #[serde(deserialize_with = "de::id")]
    pub beatmapset_id: String,
    #[serde(deserialize_with = "de::id")]
    pub beatmap_id: String,
    /// Ranked status: -2 graveyard through 4 loved.
    #[serde(default, deserialize_with = "de::number")]
    pub approved: i32,
    #[serde(default, deserialize_with = "de::number")]
    pub total_length: i64,
    #[serde(default, deserialize_with = "de::number")]
    pub hit_length: i64,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub file_md5: String,
    #[serde(default, deserialize_with = "de::number")]
    pub diff_size: f64,
    #[serde(default, deserialize_with = "de::number")]
    pub diff_overall: f64,
    #[serde(default, deserialize_with = "de::number")]
    pub diff_approach: f64,
    #[serde(default, deserialize_with = "de::number")]
    pub diff_drain: f64,
    #[serde(default, deserialize_with = "de::number")]
    pub mode: i32,
    #[serde(default, deserialize_with = "de::optional_timestamp")]
    pub approved_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "de::optional_timestamp")]
    pub last_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub creator: String,
    #[serde(default, deserialize_with = "de::id")]
    pub creator_id: String,
    #[serde(default, deserialize_with = "de::number")]
    pub bpm: f64,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default, deserialize_with = "de::number")]
    pub favourite_count: i64,
    #[serde(default, deserialize_with = "de::number")]
    pub playcount: i64,
    #[serde(default, deserialize_with = "de::number")]
    pub passcount: i64,
    #[serde(default, deserialize_with = "de::optional_number")]
    pub max_combo: Option<i64>,
    #[serde(default, deserialize_with = "de::number")]
    pub difficultyrating: f64,
}

/// One of a player's top scores, from `get_user_best`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserBestScore {
    #[serde(deserialize_with = "de::id")]
    pub beatmap_id: String,
    #[serde(default, deserialize_with = "de::id")]
    pub score_id: String,
    #[serde(default, deserialize_with = "de::number")]
    pub score: i64,
    #[serde(default, deserialize_with = "de::number")]
    pub maxcombo: i64,
    #[serde(default, deserialize_with = "de::number")]
    pub count50: i64,
    #[serde(default, deserialize_with = "de::number")]
    pub count100: i64,
    #[serde(default, deserialize_with = "de::number")]
    pub count300: i64,
    #[serde(default, deserialize_with = "de::number")]
    pub countmiss: i64,
    #[serde(default, deserialize_with = "de::number")]
    pub countkatu: i64,
    #[serde(default, deserialize_with = "de::number")]
    pub countgeki: i64,
    #[serde(default, deserialize_with = "de::flag")]
    pub perfect: bool,
    #[serde(default, deserialize_with = "de::number")]
    pub enabled_mods: i64,
    #[serde(default, deserialize_with = "de::id")]
    pub user_id: String,
    #[serde(deserialize_with = "de::timestamp")]
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub rank: String,
    #[serde(default, deserialize_with = "de::number")]
    pub pp: f64,
}

/// A single play from `get_user_recent`. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecentPlay {
    #[serde(deserialize_with = "de::id")]
    pub beatmap_id: String,
    #[serde(default, deserialize_with = "de::number")]
    pub score: i64,
    #[serde(default, deserialize_with = "de::number")]
    pub maxcombo: i64,
    #[serde(default, deserialize_with = "de::number")]
    pub count50: i64,
    #[serde(default, deserialize_with = "de::number")]
    pub count100: i64,
    #[serde(default, deserialize_with = "de::number")]
    pub count300: i64,
    #[serde(default, deserialize_with = "de::number")]
    pub countmiss: i64,
    #[serde(default, deserialize_with = "de::number")]
    pub countkatu: i64,
    #[serde(default, deserialize_with = "de::number")]
    pub countgeki: i64,
    /// Full combo with no misses.
    #[serde(default, deserialize_with = "de::flag")]
    pub perfect: bool,
    #[serde(default, deserialize_with = "de::number")]
    pub enabled_mods: i64,
    #[serde(default, deserialize_with = "de::id")]
    pub user_id: String,
    #[serde(deserialize_with = "de::timestamp")]
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub rank: String,
}

/// Body of a failed request, e.g. `{"error": "Please provide a valid API key."}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

/// The v1 API encodes almost every scalar as a JSON string, and uses null
/// for statistics of players who never played.
mod de {
    use std::fmt::Display;
    use std::str::FromStr;

    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose<T> {
        Value(T),
        Text(String),
    }

    pub fn number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + FromStr + Default,
        T::Err: Display,
    {
        Ok(optional_number(deserializer)?.unwrap_or_default())
    }

    pub fn optional_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + FromStr,
        T::Err: Display,
    {
        match Option::<Loose<T>>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Loose::Value(value)) => Ok(Some(value)),
            Some(Loose::Text(text)) if text.trim().is_empty() => Ok(None),
            Some(Loose::Text(text)) => text.trim().parse().map(Some).map_err(|e| {
                D::Error::custom(format!("invalid number {:?}: {}", text, e))
            }),
        }
    }

    pub fn id<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Loose<i64>>::deserialize(deserializer)? {
            None => String::new(),
            Some(Loose::Value(value)) => value.to_string(),
            Some(Loose::Text(text)) => text,
        })
    }

    pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Loose<bool>>::deserialize(deserializer)? {
            None => Ok(false),
            Some(Loose::Value(value)) => Ok(value),
            Some(Loose::Text(text)) => match text.as_str() {
                "1" | "true" => Ok(true),
                "0" | "false" | "" => Ok(false),
                other => Err(D::Error::custom(format!("invalid flag {:?}", other))),
            },
        }
    }

    pub fn timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        optional_timestamp(deserializer)?.ok_or_else(|| D::Error::custom("missing timestamp"))
    }

    /// Upstream timestamps are UTC without an offset; RFC 3339 is accepted too.
    pub fn optional_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(text) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        if text.is_empty() {
            return Ok(None);
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(&text, TIMESTAMP_FORMAT) {
            return Ok(Some(naive.and_utc()));
        }
        DateTime::parse_from_rfc3339(&text)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(|e| D::Error::custom(format!("invalid timestamp {:?}: {}", text, e)))
    }
}
