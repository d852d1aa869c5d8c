use std::cmp::Ordering;

use super::types::PlayerEntry;

/// Rank order: higher score first, then earlier timestamp, then player id.
///
/// The player id tie-break keeps the order total, so two entries compare
/// equal only when they are the same player.
pub fn rank_order(a: &PlayerEntry, b: &PlayerEntry) -> Ordering {
    compare_scores(a, b)
        .then_with(|| compare_timestamps(a, b))
        .then_with(|| compare_ids(a, b))
}

fn compare_scores(a: &PlayerEntry, b: &PlayerEntry) -> Ordering {
    b.score.cmp(&a.score)
}

fn compare_timestamps(a: &PlayerEntry, b: &PlayerEntry) -> Ordering {
    a.timestamp.cmp(&b.timestamp)
}

fn compare_ids(a: &PlayerEntry, b: &PlayerEntry) -> Ordering {
    a.player_id.cmp(&b.player_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_higher_score_first() {
        let high = PlayerEntry::new("b", 100, 5);
        let low = PlayerEntry::new("a", 90, 1);

        assert_eq!(rank_order(&high, &low), Ordering::Less);
        assert_eq!(rank_order(&low, &high), Ordering::Greater);
    }

    #[test]
    fn test_earlier_timestamp_breaks_score_tie() {
        let early = PlayerEntry::new("z", 100, 1);
        let late = PlayerEntry::new("a", 100, 2);

        assert_eq!(rank_order(&early, &late), Ordering::Less);
    }

    #[test]
    fn test_player_id_breaks_full_tie() {
        let a = PlayerEntry::new("a", 100, 1);
        let b = PlayerEntry::new("b", 100, 1);

        assert_eq!(rank_order(&a, &b), Ordering::Less);
        assert_eq!(rank_order(&a, &a.clone()), Ordering::Equal);
    }

    #[test]
    fn test_negative_scores() {
        let zero = PlayerEntry::new("a", 0, 1);
        let negative = PlayerEntry::new("b", -5, 0);

        assert_eq!(rank_order(&zero, &negative), Ordering::Less);
    }
}
