use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use osu_api::{RecentPlay, UserBestScore};
use tracker::PlayerView;
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::dto::{BestScoresQuery, RecentPlayQuery};
use super::services;

#[utoipa::path(
    get,
    path = "/api/v1/players/{name}",
    params(
        ("name" = String, Path, description = "Player display name")
    ),
    responses(
        (status = 200, description = "Live statistics and change since first seen", body = PlayerView),
        (status = 404, description = "Player not found"),
        (status = 502, description = "osu! API failure")
    ),
    tag = "players"
)]
pub async fn get_player_stat(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response, WebError> {
    let view = services::get_player_stat(&state.tracker, &name).await?;

    Ok(Json(view).into_response())
}

#[utoipa::path(
    get,
    path = "/api/v1/players/{name}/recent",
    params(
        ("name" = String, Path, description = "Player display name"),
        RecentPlayQuery
    ),
    responses(
        (status = 200, description = "Most recent matching play within the last 50", body = RecentPlay),
        (status = 400, description = "Invalid query parameters"),
        (status = 404, description = "No matching play")
    ),
    tag = "players"
)]
pub async fn get_recent_play(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<RecentPlayQuery>,
) -> Result<Response, WebError> {
    query.validate()?;

    let play = services::get_recent_play(&state.tracker, &name, &query.filter()?).await?;

    Ok(Json(play).into_response())
}

#[utoipa::path(
    get,
    path = "/api/v1/players/{name}/best",
    params(
        ("name" = String, Path, description = "Player display name"),
        BestScoresQuery
    ),
    responses(
        (status = 200, description = "Best scores", body = Vec<UserBestScore>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "players"
)]
pub async fn get_best_scores(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<BestScoresQuery>,
) -> Result<Response, WebError> {
    query.validate()?;

    let scores =
        services::get_best_scores(&state.tracker, &name, query.mode()?, query.limit()).await?;

    Ok(Json(scores).into_response())
}
