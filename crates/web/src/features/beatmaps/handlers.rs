use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use osu_api::{Beatmap, BeatmapQuery};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::error::WebError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BeatmapsQuery {
    /// Beatmap set id
    pub set_id: Option<String>,
    /// Beatmap id, takes precedence over `set_id`
    pub beatmap_id: Option<String>,
}

impl From<BeatmapsQuery> for BeatmapQuery {
    fn from(query: BeatmapsQuery) -> Self {
        BeatmapQuery {
            set_id: query.set_id,
            beatmap_id: query.beatmap_id,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/beatmaps",
    params(BeatmapsQuery),
    responses(
        (status = 200, description = "Beatmaps of a set, or a single beatmap", body = Vec<Beatmap>),
        (status = 400, description = "Neither set_id nor beatmap_id given")
    ),
    tag = "beatmaps"
)]
pub async fn list_beatmaps(
    State(state): State<AppState>,
    Query(query): Query<BeatmapsQuery>,
) -> Result<Response, WebError> {
    let beatmaps = state.tracker.get_beatmaps(&query.into()).await?;

    Ok(Json(beatmaps).into_response())
}
