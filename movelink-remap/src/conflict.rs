//! Conflict scanner.
//!
//! Reusing a destination row in place is only safe when nothing else still
//! refers to it. A candidate conflicts when an entry outside the batch being
//! pasted over references it under the same kind, pair and qualifier, or when
//! a link of this session already points at it.

use crate::LinkTable;
use movelink_model::Moveset;
use movelink_types::{DependencyPair, ResourceKind};
use tracing::debug;

/// Checks candidate destination indices against the rest of the moveset.
#[derive(Debug, Clone, Copy)]
pub struct ConflictScanner<'a> {
    moveset: &'a Moveset,
    links: &'a LinkTable,
}

impl<'a> ConflictScanner<'a> {
    pub fn new(moveset: &'a Moveset, links: &'a LinkTable) -> Self {
        Self { moveset, links }
    }

    /// Returns true if reusing `candidate` would alias another reference.
    ///
    /// `excluded` lists moveset positions that are about to be overwritten;
    /// their references do not count.
    pub fn find_conflict(
        &self,
        kind: ResourceKind,
        pair: DependencyPair,
        qualifier: u32,
        candidate: u32,
        excluded: &[usize],
    ) -> bool {
        if self.links.is_target(kind, pair, qualifier, candidate) {
            debug!("{} index {} is already a link target", kind, candidate);
            return true;
        }
        let user = self
            .moveset
            .entries
            .iter()
            .enumerate()
            .filter(|(pos, _)| !excluded.contains(pos))
            .find(|(_, entry)| entry.uses_reference(kind, pair, qualifier, candidate));
        match user {
            Some((_, entry)) => {
                debug!("{} index {} is used by entry {}", kind, candidate, entry.index);
                true
            }
            None => false,
        }
    }
}
