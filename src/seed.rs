use anyhow::{bail, Result};
use chrono::Utc;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::board::Leaderboard;
use crate::errors::{with_parse_context, with_read_context};
use crate::ranking::{PlayerId, Score, Timestamp};

/// One score update as submitted over HTTP or listed in a seed file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreUpdate {
    pub player_id: PlayerId,
    pub score: Score,
    #[serde(default)]
    pub timestamp: Option<Timestamp>,
}

impl ScoreUpdate {
    pub fn new(player_id: &str, score: Score, timestamp: Option<Timestamp>) -> Self {
        Self {
            player_id: player_id.to_string(),
            score,
            timestamp,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.player_id.is_empty() {
            bail!("Player id must not be empty");
        }
        Ok(())
    }

    pub fn timestamp_or(&self, fallback: Timestamp) -> Timestamp {
        self.timestamp.unwrap_or(fallback)
    }
}

pub fn now_millis() -> Timestamp {
    Utc::now().timestamp_millis()
}

/// Load a JSON array of score updates
pub fn load_updates<P: AsRef<Path>>(path: P) -> Result<Vec<ScoreUpdate>> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let json = with_read_context(fs::read_to_string(path), &display)?;
    let updates: Vec<ScoreUpdate> = with_parse_context(serde_json::from_str(&json), "score updates")?;

    for (idx, update) in updates.iter().enumerate() {
        if let Err(e) = update.validate() {
            bail!("Invalid update #{} in {}: {}", idx + 1, display, e);
        }
    }

    info!("Loaded {} score updates from {}", updates.len(), display);
    Ok(updates)
}

/// Apply updates in order. Missing timestamps count up from `start`,
/// so file order decides ties between them.
pub fn apply_updates(board: &Leaderboard, updates: &[ScoreUpdate], start: Timestamp) -> usize {
    board.apply_updates(updates.iter().enumerate().map(|(idx, update)| {
        (
            update.player_id.as_str(),
            update.score,
            update.timestamp_or(start + idx as Timestamp),
        )
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_and_apply_updates() {
        let path = write_temp(
            "leader_board_seed_ok.json",
            r#"[
                {"playerId": "alice", "score": 100, "timestamp": 5},
                {"playerId": "bob", "score": 100},
                {"playerId": "carol", "score": 90}
            ]"#,
        );

        let updates = load_updates(&path).unwrap();
        assert_eq!(updates.len(), 3);
        assert_eq!(updates[1].timestamp, None);

        let board = Leaderboard::new();
        assert_eq!(apply_updates(&board, &updates, 10), 3);

        let bob = board.player_rank("bob").unwrap();
        assert_eq!(bob.timestamp, 11);
        assert_eq!(bob.rank, 2);
        assert_eq!(board.player_rank("carol").unwrap().timestamp, 12);

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_rejects_empty_player_id() {
        let path = write_temp(
            "leader_board_seed_empty_id.json",
            r#"[{"playerId": "", "score": 1}]"#,
        );

        let err = load_updates(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid update #1"));

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_reports_parse_errors_with_context() {
        let path = write_temp("leader_board_seed_bad.json", "{not json");

        let err = load_updates(&path).unwrap_err();
        assert_eq!(err.to_string(), "Failed to parse score updates");

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_missing_file() {
        let err = load_updates("/nonexistent/leader_board/seed.json").unwrap_err();
        assert!(err.to_string().starts_with("Failed to read from"));
    }
}
