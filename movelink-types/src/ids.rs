//! Clipboard snapshot ids.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Tags one copy of a selection. A paste or add reports the id of the
/// snapshot it replayed, so an operator can tell two copies of the same
/// entries apart.
///
/// Ids are UUID v7: a later copy compares greater than an earlier one and
/// the copy time can be read back with [`taken_at_millis`](Self::taken_at_millis).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnapshotId(Uuid);

impl SnapshotId {
    /// Stamps a new snapshot with the current time.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    /// Unix time of the copy in milliseconds. `None` for ids that were not
    /// generated here, e.g. a hand-edited clipboard carrying a v4 UUID.
    pub fn taken_at_millis(&self) -> Option<u64> {
        let (secs, nanos) = self.0.get_timestamp()?.to_unix();
        Some(secs * 1000 + u64::from(nanos / 1_000_000))
    }
}

impl fmt::Display for SnapshotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
