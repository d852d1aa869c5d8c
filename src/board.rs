use log::debug;
use parking_lot::RwLock;

use crate::ranking::{RankInfo, RankedIndex, RankingKind, Score, Timestamp};

/// Thread-safe leaderboard.
///
/// One reader/writer lock covers the whole index: queries share it, an
/// update holds it exclusively for the full remove-and-reinsert.
#[derive(Debug, Default)]
pub struct Leaderboard {
    index: RwLock<RankedIndex>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_score(&self, player_id: &str, score: Score, timestamp: Timestamp) -> RankInfo {
        let info = self.index.write().update_score(player_id, score, timestamp);
        debug!("Updated {} to {} (rank {})", player_id, score, info.rank);
        info
    }

    /// Apply a batch of updates under a single write lock
    pub fn apply_updates<'a, I>(&self, updates: I) -> usize
    where
        I: IntoIterator<Item = (&'a str, Score, Timestamp)>,
    {
        let mut index = self.index.write();
        let mut applied = 0;
        for (player_id, score, timestamp) in updates {
            index.update_score(player_id, score, timestamp);
            applied += 1;
        }
        debug!("Applied {} updates, {} players ranked", applied, index.len());
        applied
    }

    pub fn player_rank(&self, player_id: &str) -> Option<RankInfo> {
        self.index.read().player_rank(player_id)
    }

    pub fn top_n(&self, n: usize) -> Vec<RankInfo> {
        self.index.read().top_n(n)
    }

    pub fn rank_range(&self, player_id: &str, range: usize) -> Option<Vec<RankInfo>> {
        self.index.read().rank_range(player_id, range)
    }

    pub fn dense_top_n(&self, n: usize) -> Vec<RankInfo> {
        self.index.read().dense_top_n(n)
    }

    pub fn dense_rank_range(&self, player_id: &str, range: usize) -> Option<Vec<RankInfo>> {
        self.index.read().dense_rank_range(player_id, range)
    }

    pub fn top(&self, kind: RankingKind, n: usize) -> Vec<RankInfo> {
        match kind {
            RankingKind::Standard => self.top_n(n),
            RankingKind::Dense => self.dense_top_n(n),
        }
    }

    pub fn around(&self, kind: RankingKind, player_id: &str, range: usize) -> Option<Vec<RankInfo>> {
        match kind {
            RankingKind::Standard => self.rank_range(player_id, range),
            RankingKind::Dense => self.dense_rank_range(player_id, range),
        }
    }

    /// Full standard ranking taken under one read lock
    pub fn snapshot(&self) -> Vec<RankInfo> {
        let index = self.index.read();
        index.top_n(index.len())
    }

    pub fn len(&self) -> usize {
        self.index.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_board_delegates_queries() {
        let board = Leaderboard::new();
        board.update_score("A", 100, 1);
        board.update_score("B", 100, 2);
        board.update_score("C", 90, 3);

        assert_eq!(board.player_rank("B").unwrap().rank, 2);
        assert_eq!(board.top(RankingKind::Dense, 3)[1].rank, 1);
        assert_eq!(board.around(RankingKind::Standard, "C", 1).unwrap().len(), 2);
        assert_eq!(board.around(RankingKind::Dense, "C", 1).unwrap().len(), 3);
        assert!(board.around(RankingKind::Dense, "D", 1).is_none());
        assert_eq!(board.len(), 3);
    }

    #[test]
    fn test_apply_updates_batch() {
        let board = Leaderboard::new();
        let applied = board.apply_updates(vec![("a", 5, 1), ("b", 7, 2), ("a", 9, 3)]);

        assert_eq!(applied, 3);
        assert_eq!(board.len(), 2);
        assert_eq!(board.snapshot()[0].player_id, "a");
    }

    #[test]
    fn test_readers_never_see_partial_updates() {
        const PLAYERS: usize = 50;
        const ROUNDS: i64 = 200;

        let board = Arc::new(Leaderboard::new());
        for i in 0..PLAYERS {
            board.update_score(&format!("p{}", i), 0, 0);
        }

        thread::scope(|scope| {
            for writer in 0..4 {
                let board = Arc::clone(&board);
                scope.spawn(move || {
                    for round in 0..ROUNDS {
                        let id = format!("p{}", (round as usize * 7 + writer) % PLAYERS);
                        board.update_score(&id, (round * 31 + writer as i64) % 97, round);
                    }
                });
            }

            for _ in 0..4 {
                let board = Arc::clone(&board);
                scope.spawn(move || {
                    for _ in 0..ROUNDS {
                        let snapshot = board.snapshot();
                        assert_eq!(snapshot.len(), PLAYERS);
                        for pair in snapshot.windows(2) {
                            assert!(
                                pair[0].score > pair[1].score
                                    || (pair[0].score == pair[1].score
                                        && pair[0].timestamp <= pair[1].timestamp)
                            );
                        }
                        assert!(board.player_rank("p0").is_some());
                    }
                });
            }
        });

        assert_eq!(board.len(), PLAYERS);
        assert!(board.index.read().is_consistent());
    }
}
