use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use crate::api::handlers::{players::{get_player_range, get_player_rank, get_stats, get_top}, scores::post_score, AppState};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/scores", post(post_score))
        .route("/api/top", get(get_top))
        .route("/api/player/:id", get(get_player_rank))
        .route("/api/player/:id/range", get(get_player_range))
        .route("/api/stats", get(get_stats))
        .with_state(state)
}
