//! Error types for the remap layer.

use crate::links::LinkKey;
use movelink_model::ModelError;
use thiserror::Error;

/// Result type for remap operations.
pub type RemapResult<T> = Result<T, RemapError>;

/// Errors that can occur while remapping a selection.
#[derive(Debug, Error)]
pub enum RemapError {
    /// Row lookup, row creation or table access failed.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Fewer destination entries than copied entries. Nothing was mutated.
    #[error("not enough entries to paste over: expected {expected}, found {available}")]
    InsufficientSelection { expected: usize, available: usize },

    /// Nothing was copied.
    #[error("no entries are copied")]
    EmptySelection,

    /// A position does not name an entry of the moveset.
    #[error("no entry at position {0}")]
    UnknownEntry(usize),

    /// No entry of the moveset carries this index.
    #[error("no entry with index {0}")]
    UnknownIndex(u32),

    /// The snapshot was taken from a different source character.
    #[error("selection was copied from {found}, but the loaded source is {expected}")]
    StaleSelection { expected: String, found: String },

    /// A link would be rebound to a different destination. Invariant violation.
    #[error("link conflict for {key}: already mapped to {existing}, refusing {attempted}")]
    LinkConflict {
        key: LinkKey,
        existing: u32,
        attempted: u32,
    },

    /// Clipboard snapshot written by an incompatible version.
    #[error("unsupported selection snapshot version {0}")]
    UnsupportedSnapshotVersion(u32),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RemapError {
    /// Invariant violations that must halt the session's operation.
    pub fn is_fatal(&self) -> bool {
        matches!(self, RemapError::LinkConflict { .. })
    }

    /// Row-level failures that stop a batch midway.
    pub fn is_abort(&self) -> bool {
        matches!(
            self,
            RemapError::Model(
                ModelError::IndexOutOfRange { .. }
                    | ModelError::MissingResource { .. }
                    | ModelError::TableFull { .. }
            )
        )
    }
}
