use serde::Deserialize;

use crate::board::Leaderboard;
use crate::config::settings::AppConfig;
use crate::ranking::RankingKind;

pub mod players;
pub mod scores;

pub struct AppState {
    pub board: Leaderboard,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            board: Leaderboard::new(),
            config,
        }
    }
}

#[derive(Deserialize)]
pub struct TopParams {
    pub n: Option<usize>,
    pub kind: Option<RankingKind>,
}

#[derive(Deserialize)]
pub struct RangeParams {
    pub range: Option<usize>,
    pub kind: Option<RankingKind>,
}

pub const NOT_RANKED: &str = "Player not ranked yet";
