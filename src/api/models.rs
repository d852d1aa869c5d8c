use serde::{Deserialize, Serialize};

use crate::ranking::{RankInfo, RankingKind};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankListResponse {
    pub kind: RankingKind,
    pub total: usize,
    pub items: Vec<RankInfo>,
}

impl RankListResponse {
    pub fn new(kind: RankingKind, items: Vec<RankInfo>) -> Self {
        Self {
            kind,
            total: items.len(),
            items,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub players: usize,
}
