//! Named monotonic sequence counter.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One document per named sequence (e.g. `"ilan_id"`).
///
/// `seq` is non-decreasing; once the listing uniqueness index is
/// established, every issued value is strictly greater than any previously
/// issued value for that name.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SequenceCounter {
    /// Sequence name (primary key).
    pub name: String,
    /// Last issued value.
    pub seq: i64,
}
