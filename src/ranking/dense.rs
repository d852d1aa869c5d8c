use super::types::{PlayerEntry, Score};

/// Assigns dense ranks while walking entries in rank order
pub struct DenseRanker {
    rank: usize,
    previous_score: Option<Score>,
}

impl DenseRanker {
    pub fn new() -> Self {
        Self {
            rank: 0,
            previous_score: None,
        }
    }

    /// Rank of the next entry; entries must be fed in rank order.
    pub fn next_rank(&mut self, entry: &PlayerEntry) -> usize {
        if self.previous_score != Some(entry.score) {
            self.rank += 1;
            self.previous_score = Some(entry.score);
        }
        self.rank
    }
}

impl Default for DenseRanker {
    fn default() -> Self {
        Self::new()
    }
}

pub fn dense_ranks<'a, I>(entries: I) -> Vec<usize>
where
    I: IntoIterator<Item = &'a PlayerEntry>,
{
    let mut ranker = DenseRanker::new();
    entries
        .into_iter()
        .map(|entry| ranker.next_rank(entry))
        .collect()
}

/// Inclusive dense-rank band `[rank - range, rank + range]`
pub fn dense_band(rank: usize, range: usize) -> (usize, usize) {
    (rank.saturating_sub(range), rank.saturating_add(range))
}
