//! Error types for the model layer.

use movelink_types::ResourceKind;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur while reading or mutating a character's tables.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The table for this kind was never loaded.
    #[error("{table} was not opened")]
    MissingResource { kind: ResourceKind, table: String },

    /// A referenced row does not exist.
    #[error("{table} does not contain index {index}")]
    IndexOutOfRange {
        kind: ResourceKind,
        index: u32,
        table: String,
    },

    /// No index is left to allocate a new row at.
    #[error("{table} has no free index left")]
    TableFull { kind: ResourceKind, table: String },

    /// A required file is absent.
    #[error("no valid file found at {}", .0.display())]
    NotFound(PathBuf),

    /// A file exists but could not be parsed.
    #[error("{} is not valid: {source}", path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// No character files in a directory.
    #[error("no character found in {}", .0.display())]
    NoCharacter(PathBuf),

    /// Several characters in one directory and no code to pick one.
    #[error("found multiple characters: {}", .0.join(", "))]
    AmbiguousCharacter(Vec<String>),

    /// Character code is not 1-3 alphanumeric characters.
    #[error("invalid character code {0:?}: must be 1-3 alphanumeric characters")]
    InvalidCode(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ModelError {
    /// The resource kind involved, for row-level errors.
    pub fn kind(&self) -> Option<ResourceKind> {
        match self {
            ModelError::MissingResource { kind, .. }
            | ModelError::IndexOutOfRange { kind, .. }
            | ModelError::TableFull { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}
