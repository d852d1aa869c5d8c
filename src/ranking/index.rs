use std::cmp::Ordering;
use std::collections::HashMap;

use super::dense::{dense_band, dense_ranks, DenseRanker};
use super::order::rank_order;
use super::types::{PlayerEntry, PlayerId, RankInfo, Score, Timestamp};

/// Player standings kept in rank order.
///
/// Each entry is stored exactly once in `entries`. The identity map and the
/// ordered sequence both hold slot numbers into it, so a player's score can
/// never differ between the two views.
#[derive(Debug, Default)]
pub struct RankedIndex {
    entries: Vec<PlayerEntry>,
    slots: HashMap<PlayerId, usize>,
    ranking: Vec<usize>,
}

impl RankedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new score for a player, creating the entry on first sight.
    ///
    /// Returns the player's standing after the update.
    pub fn update_score(&mut self, player_id: &str, score: Score, timestamp: Timestamp) -> RankInfo {
        let slot = match self.slots.get(player_id).copied() {
            Some(slot) => {
                self.unlink(slot);
                let entry = &mut self.entries[slot];
                entry.score = score;
                entry.timestamp = timestamp;
                slot
            }
            None => self.create_entry(player_id, score, timestamp),
        };

        let position = self.link(slot);
        RankInfo::from_entry(&self.entries[slot], position + 1)
    }

    pub fn player_rank(&self, player_id: &str) -> Option<RankInfo> {
        let slot = self.slot_of(player_id)?;
        let position = self.position_of(slot)?;
        Some(RankInfo::from_entry(&self.entries[slot], position + 1))
    }

    pub fn top_n(&self, n: usize) -> Vec<RankInfo> {
        self.entries()
            .take(n)
            .enumerate()
            .map(|(position, entry)| RankInfo::from_entry(entry, position + 1))
            .collect()
    }

    /// Players within `range` positions of the given player, clipped to the population.
    pub fn rank_range(&self, player_id: &str, range: usize) -> Option<Vec<RankInfo>> {
        let position = self.position_of(self.slot_of(player_id)?)?;
        let start = position.saturating_sub(range);
        let end = position.saturating_add(range).min(self.len() - 1);

        let window = self.ranking[start..=end]
            .iter()
            .enumerate()
            .map(|(offset, &slot)| RankInfo::from_entry(&self.entries[slot], start + offset + 1))
            .collect();

        Some(window)
    }

    pub fn dense_top_n(&self, n: usize) -> Vec<RankInfo> {
        let mut ranker = DenseRanker::new();
        self.entries()
            .take(n)
            .map(|entry| RankInfo::from_entry(entry, ranker.next_rank(entry)))
            .collect()
    }

    /// Every player whose dense rank is within `range` of the given player's.
    ///
    /// Ties widen the band, so the result may hold more than `2 * range + 1` players.
    pub fn dense_rank_range(&self, player_id: &str, range: usize) -> Option<Vec<RankInfo>> {
        let position = self.position_of(self.slot_of(player_id)?)?;
        let ranks = dense_ranks(self.entries());
        let (low, high) = dense_band(*ranks.get(position)?, range);

        let band = self
            .entries()
            .zip(ranks)
            .skip_while(|&(_, rank)| rank < low)
            .take_while(|&(_, rank)| rank <= high)
            .map(|(entry, rank)| RankInfo::from_entry(entry, rank))
            .collect();

        Some(band)
    }

    /// Entries in rank order
    pub fn entries(&self) -> impl Iterator<Item = &PlayerEntry> + '_ {
        self.ranking.iter().map(move |&slot| &self.entries[slot])
    }

    pub fn get(&self, player_id: &str) -> Option<&PlayerEntry> {
        self.slot_of(player_id).map(|slot| &self.entries[slot])
    }

    pub fn contains(&self, player_id: &str) -> bool {
        self.slots.contains_key(player_id)
    }

    pub fn len(&self) -> usize {
        self.ranking.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranking.is_empty()
    }

    fn create_entry(&mut self, player_id: &str, score: Score, timestamp: Timestamp) -> usize {
        let slot = self.entries.len();
        self.entries.push(PlayerEntry::new(player_id, score, timestamp));
        self.slots.insert(player_id.to_string(), slot);
        slot
    }

    fn slot_of(&self, player_id: &str) -> Option<usize> {
        self.slots.get(player_id).copied()
    }

    /// Insert a slot at its sorted position and return that position.
    fn link(&mut self, slot: usize) -> usize {
        let entry = &self.entries[slot];
        let position = self
            .ranking
            .partition_point(|&other| rank_order(&self.entries[other], entry) == Ordering::Less);
        self.ranking.insert(position, slot);
        position
    }

    /// Must run before the entry's score or timestamp changes.
    fn unlink(&mut self, slot: usize) {
        if let Some(position) = self.position_of(slot) {
            self.ranking.remove(position);
        }
    }

    fn position_of(&self, slot: usize) -> Option<usize> {
        let entry = &self.entries[slot];
        self.ranking
            .binary_search_by(|&other| rank_order(&self.entries[other], entry))
            .ok()
    }

    #[cfg(test)]
    pub(crate) fn is_consistent(&self) -> bool {
        let sorted = self
            .ranking
            .windows(2)
            .all(|pair| rank_order(&self.entries[pair[0]], &self.entries[pair[1]]) == Ordering::Less);
        let mut seen = self.ranking.clone();
        seen.sort_unstable();
        seen.dedup();

        sorted
            && seen.len() == self.ranking.len()
            && self.ranking.len() == self.slots.len()
            && self.slots.len() == self.entries.len()
    }
}
