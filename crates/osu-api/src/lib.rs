//! Client for the osu! v1 web API.
//!
//! Every query is a keyed `GET <base>/<method>?k=<key>&...` returning a JSON
//! array on success and a JSON object with an `error` field on failure.

pub mod client;
pub mod decode;
pub mod error;
pub mod models;
pub mod query;

pub use client::{ClientConfig, OsuClient};
pub use error::{Result, UpstreamError};
pub use models::{Beatmap, RecentPlay, User, UserBestScore};
pub use query::{BeatmapQuery, GameMode};
