use axum::{Router, routing::get};

use super::handlers::{get_best_scores, get_player_stat, get_recent_play};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/:name", get(get_player_stat))
        .route("/:name/recent", get(get_recent_play))
        .route("/:name/best", get(get_best_scores))
}
