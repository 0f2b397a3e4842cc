use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the database.
///
/// Returned by [`CountrySearch::stats`](crate::CountrySearch::stats), these
/// counts reflect the materialized in-memory dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub countries: usize,
    pub regions: usize,
}
