use anyhow::{anyhow, Result};
use log::info;
use std::path::PathBuf;

use crate::board::Leaderboard;
use crate::output;
use crate::ranking::{RankInfo, RankingKind};
use crate::seed;

/// What to print once the updates are applied
#[derive(Debug, Clone)]
pub struct ReplayQuery {
    pub kind: RankingKind,
    pub top: usize,
    pub player: Option<String>,
    pub range: usize,
    pub json: bool,
}

/// Applies a file of score updates to a fresh leaderboard and prints a query
pub struct ReplayService {
    path: PathBuf,
    query: ReplayQuery,
    board: Leaderboard,
}

impl ReplayService {
    pub fn new(path: PathBuf, query: ReplayQuery) -> Self {
        Self {
            path,
            query,
            board: Leaderboard::new(),
        }
    }

    pub fn run(&self) -> Result<()> {
        let updates = seed::load_updates(&self.path)?;
        let applied = seed::apply_updates(&self.board, &updates, seed::now_millis());
        info!("Replayed {} updates, {} players ranked", applied, self.board.len());

        let (title, items) = self.query_results()?;
        if self.query.json {
            output::print_json(self.query.kind, &items, self.board.len())
        } else {
            output::print_table(&title, self.query.kind, &items, self.board.len());
            Ok(())
        }
    }

    fn query_results(&self) -> Result<(String, Vec<RankInfo>)> {
        match &self.query.player {
            Some(player) => {
                let items = self
                    .board
                    .around(self.query.kind, player, self.query.range)
                    .ok_or_else(|| anyhow!("Player {} is not ranked", player))?;
                Ok((format!("Around {} (±{})", player, self.query.range), items))
            }
            None => Ok((
                format!("Top {}", self.query.top),
                self.board.top(self.query.kind, self.query.top),
            )),
        }
    }
}
