//! Moveset model for movelink.
//!
//! Defines the data that the remap engine reads and mutates:
//! - [`Entry`], [`SubEntry`], [`Item`]: structural move definitions whose items
//!   reference resource rows by index
//! - [`StaticValues`]: the grouped reference values extracted from an entry
//! - [`Clip`], [`HitboxRecord`] and their tables, gathered per character in a
//!   [`ResourceSet`] that can append rows and deep-copy rows across characters
//! - [`Character`]: a code, its moveset and its resource set
//! - [`EntryLabels`]: display labels for well-known entry indices
//! - [`store`]: loading and saving a character directory

mod entry;
mod error;
mod labels;
mod moveset;
mod resource;
pub mod store;

pub use entry::{Entry, Item, ReferenceMap, StaticGroup, StaticValues, SubEntry, SubEntryType};
pub use error::{ModelError, ModelResult};
pub use labels::{COMBO_CHART, EntryLabels, UNKNOWN_LABEL, known_label};
pub use moveset::{Character, Moveset};
pub use resource::{Clip, ClipTable, HitboxRecord, HitboxTable, ResourceSet, RowRef};
