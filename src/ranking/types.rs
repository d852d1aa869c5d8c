use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub type PlayerId = String;
pub type Score = i64;
pub type Timestamp = i64;

/// Current standing of one player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerEntry {
    pub player_id: PlayerId,
    pub score: Score,
    pub timestamp: Timestamp,
}

impl PlayerEntry {
    pub fn new(player_id: &str, score: Score, timestamp: Timestamp) -> Self {
        Self {
            player_id: player_id.to_string(),
            score,
            timestamp,
        }
    }
}

/// Read-only projection of an entry with either a standard or dense rank
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankInfo {
    pub player_id: PlayerId,
    pub score: Score,
    pub rank: usize,
    pub timestamp: Timestamp,
}

impl RankInfo {
    pub fn from_entry(entry: &PlayerEntry, rank: usize) -> Self {
        Self {
            player_id: entry.player_id.clone(),
            score: entry.score,
            rank,
            timestamp: entry.timestamp,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingKind {
    /// Ties occupy distinct, consecutive positions
    #[default]
    Standard,
    /// Ties share a rank, the next lower score gets the next integer
    Dense,
}

impl RankingKind {
    pub fn as_str(&self) -> &str {
        match self {
            RankingKind::Standard => "standard",
            RankingKind::Dense => "dense",
        }
    }
}

impl fmt::Display for RankingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RankingKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(RankingKind::Standard),
            "dense" => Ok(RankingKind::Dense),
            other => anyhow::bail!("Unknown ranking kind: {}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranking_kind_parsing() {
        assert_eq!("dense".parse::<RankingKind>().unwrap(), RankingKind::Dense);
        assert_eq!("Standard".parse::<RankingKind>().unwrap(), RankingKind::Standard);
        assert!("competition".parse::<RankingKind>().is_err());
    }

    #[test]
    fn test_rank_info_serializes_camel_case() {
        let entry = PlayerEntry::new("alice", 120, 7);
        let json = serde_json::to_value(RankInfo::from_entry(&entry, 1)).unwrap();

        assert_eq!(json["playerId"], "alice");
        assert_eq!(json["score"], 120);
        assert_eq!(json["rank"], 1);
        assert_eq!(json["timestamp"], 7);
    }
}
