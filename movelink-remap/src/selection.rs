//! Copied-entry snapshots.
//!
//! Copying entries freezes them into a [`SelectionSet`]. The snapshot can be
//! serialized as a clipboard payload and replayed later by paste or add, as
//! long as the same source character is still loaded.

use crate::{RemapError, RemapResult};
use movelink_model::{Character, Entry};
use movelink_types::SnapshotId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Clipboard format version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// An ordered snapshot of source entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionSet {
    pub version: u32,
    pub snapshot_id: SnapshotId,
    /// Code of the character the entries were copied from.
    pub source_code: String,
    pub entries: Vec<Entry>,
}

impl SelectionSet {
    /// Snapshots the entries at `positions` of `source`, in the given order.
    pub fn capture(source: &Character, positions: &[usize]) -> RemapResult<Self> {
        if positions.is_empty() {
            return Err(RemapError::EmptySelection);
        }
        let entries = positions
            .iter()
            .map(|&pos| {
                source
                    .moveset
                    .get(pos)
                    .cloned()
                    .ok_or(RemapError::UnknownEntry(pos))
            })
            .collect::<RemapResult<Vec<_>>>()?;
        Ok(Self {
            version: SNAPSHOT_VERSION,
            snapshot_id: SnapshotId::generate(),
            source_code: source.code().to_string(),
            entries,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Indices of the copied entries.
    pub fn indices(&self) -> Vec<u32> {
        self.entries.iter().map(|e| e.index).collect()
    }

    /// Serializes to the clipboard payload.
    pub fn to_clipboard(&self) -> RemapResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a clipboard payload, rejecting unknown versions.
    pub fn from_clipboard(text: &str) -> RemapResult<Self> {
        let value: Value = serde_json::from_str(text)?;
        let version = value
            .get("version")
            .and_then(Value::as_u64)
            .map_or(0, |v| u32::try_from(v).unwrap_or(u32::MAX));
        if version != SNAPSHOT_VERSION {
            return Err(RemapError::UnsupportedSnapshotVersion(version));
        }
        Ok(serde_json::from_value(value)?)
    }
}
