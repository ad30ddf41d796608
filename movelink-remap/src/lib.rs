//! Cross-character reference remapping for movelink.
//!
//! Copying a move entry from one character to another carries the source
//! character's resource indices along. This crate rewrites those indices so
//! they point at equivalent rows of the destination character, creating rows
//! when needed and reusing earlier decisions within a session.
//!
//! # Components
//!
//! - **Links**: session memo of `(kind, pair, qualifier, source) -> destination`
//! - **Conflict**: detects when reusing a destination index would alias an
//!   unrelated reference
//! - **Engine**: the paste / add algorithms
//! - **Report**: `(old -> new)` records per resource kind
//! - **Selection**: the versioned clipboard snapshot of copied entries
//! - **Session**: owns both characters, the link table and the config
//!
//! # Paste process
//!
//! 1. **Extract**: group the copied entry's references by kind, pair, qualifier
//! 2. **Link**: reuse any earlier decision from the link table
//! 3. **Reuse**: otherwise try the overwritten entry's own rows, in order,
//!    skipping filtered names and conflicting indices
//! 4. **Allocate**: otherwise append a fresh row
//! 5. **Copy**: deep-copy the source row payload and record the link
//! 6. **Splice**: rewrite the entries once every reference is resolved
//!
//! # Example
//!
//! ```
//! use movelink_model::{Character, Moveset, ResourceSet};
//! use movelink_remap::{EditingSession, RemapConfig};
//!
//! let destination = Character::new(Moveset::default(), ResourceSet::new("BBB"));
//! let source = Character::new(Moveset::default(), ResourceSet::new("AAA"));
//! let session = EditingSession::new(destination, source, RemapConfig::default());
//! assert!(session.links().is_empty());
//! ```

mod config;
pub mod conflict;
mod engine;
mod error;
pub mod links;
pub mod report;
pub mod selection;
mod session;

pub use config::{DEFAULT_DISALLOWED_SUBSTRINGS, RemapConfig};
pub use conflict::ConflictScanner;
pub use engine::RemapEngine;
pub use error::{RemapError, RemapResult};
pub use links::{LinkKey, LinkTable};
pub use report::{ChangeRecord, ChangeReport, NEW_MARKER, RemapMode, RemapOutcome, RemapWarning};
pub use selection::{SNAPSHOT_VERSION, SelectionSet};
pub use session::EditingSession;
