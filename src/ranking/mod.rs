mod dense;
pub mod index;
mod order;
pub mod types;

pub use index::RankedIndex;
pub use types::{PlayerEntry, PlayerId, RankInfo, RankingKind, Score, Timestamp};
