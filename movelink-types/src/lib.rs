//! Core type definitions for movelink.
//!
//! This crate defines the fundamental types shared by the model and the
//! remap engine:
//! - [`ResourceKind`], the closed set of per-character resource tables an
//!   entry can reference (Animation, Hitbox, Camera)
//! - [`DependencyPair`] and [`Qualifier`], which identify a cross-table
//!   reference inside an entry item and whether it is subject to remapping
//! - the static Dependency Descriptor ([`descriptor`]) listing, per kind, every
//!   pair that carries such a reference
//! - [`SnapshotId`], which tags each copied selection

mod dependency;
mod ids;
mod kind;

pub use dependency::{
    DependencyPair, KindDescriptor, PairDescriptor, Qualifier, descriptor, pair_descriptor,
    resolve_qualifier,
};
pub use ids::SnapshotId;
pub use kind::ResourceKind;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown resource kind: {0}")]
    UnknownKind(String),
}
