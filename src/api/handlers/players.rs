use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::api::models::{RankListResponse, StatsResponse};
use super::{AppState, RangeParams, TopParams, NOT_RANKED};

pub async fn get_player_rank(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<String>,
) -> impl IntoResponse {
    match state.board.player_rank(&player_id) {
        Some(info) => Json(info).into_response(),
        None => (StatusCode::NOT_FOUND, NOT_RANKED).into_response(),
    }
}

pub async fn get_top(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TopParams>,
) -> impl IntoResponse {
    let n = state.config.query.top_n(params.n);
    let kind = params.kind.unwrap_or_default();

    Json(RankListResponse::new(kind, state.board.top(kind, n)))
}

pub async fn get_player_range(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<String>,
    Query(params): Query<RangeParams>,
) -> impl IntoResponse {
    let range = state.config.query.range(params.range);
    let kind = params.kind.unwrap_or_default();

    match state.board.around(kind, &player_id, range) {
        Some(items) => Json(RankListResponse::new(kind, items)).into_response(),
        None => (StatusCode::NOT_FOUND, NOT_RANKED).into_response(),
    }
}

pub async fn get_stats(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(StatsResponse {
        players: state.board.len(),
    })
}
