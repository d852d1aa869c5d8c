use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::seed::{now_millis, ScoreUpdate};
use super::AppState;

pub async fn post_score(
    State(state): State<Arc<AppState>>,
    Json(update): Json<ScoreUpdate>,
) -> impl IntoResponse {
    if let Err(e) = update.validate() {
        return (StatusCode::BAD_REQUEST, e.to_string()).into_response();
    }

    let timestamp = update.timestamp_or(now_millis());
    let info = state.board.update_score(&update.player_id, update.score, timestamp);

    Json(info).into_response()
}
