//! Session link table.
//!
//! Records every remap decision made during a session so that a source row is
//! copied into the destination at most once, however many entries reference
//! it. A key, once bound, never changes its destination.

use crate::{RemapError, RemapResult};
use movelink_model::ReferenceMap;
use movelink_types::{DependencyPair, ResourceKind};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Identifies one source reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct LinkKey {
    pub kind: ResourceKind,
    pub pair: DependencyPair,
    pub qualifier: u32,
    pub source: u32,
}

impl LinkKey {
    pub fn new(kind: ResourceKind, pair: DependencyPair, qualifier: u32, source: u32) -> Self {
        Self {
            kind,
            pair,
            qualifier,
            source,
        }
    }

    fn same_group(&self, kind: ResourceKind, pair: DependencyPair, qualifier: u32) -> bool {
        self.kind == kind && self.pair == pair && self.qualifier == qualifier
    }
}

impl fmt::Display for LinkKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} qualifier {} index {}",
            self.kind, self.pair, self.qualifier, self.source
        )
    }
}

/// Source-to-destination index decisions of the current session.
#[derive(Debug, Clone, Default)]
pub struct LinkTable {
    links: HashMap<LinkKey, u32>,
}

impl LinkTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Destination index decided for a key.
    pub fn get(&self, key: &LinkKey) -> Option<u32> {
        self.links.get(key).copied()
    }

    pub fn contains(&self, key: &LinkKey) -> bool {
        self.links.contains_key(key)
    }

    /// Binds a key. Rebinding to the same destination is a no-op and returns
    /// `false`; rebinding to a different one fails with
    /// [`RemapError::LinkConflict`].
    pub fn set(&mut self, key: LinkKey, destination: u32) -> RemapResult<bool> {
        match self.links.get(&key) {
            Some(&existing) if existing == destination => Ok(false),
            Some(&existing) => Err(RemapError::LinkConflict {
                key,
                existing,
                attempted: destination,
            }),
            None => {
                self.links.insert(key, destination);
                Ok(true)
            }
        }
    }

    /// Returns true if `destination` is already the target of some link in
    /// the given group.
    pub fn is_target(
        &self,
        kind: ResourceKind,
        pair: DependencyPair,
        qualifier: u32,
        destination: u32,
    ) -> bool {
        self.links
            .iter()
            .any(|(key, &value)| value == destination && key.same_group(kind, pair, qualifier))
    }

    /// Links sorted by key.
    pub fn sorted(&self) -> Vec<(LinkKey, u32)> {
        let mut links: Vec<_> = self.links.iter().map(|(k, v)| (*k, *v)).collect();
        links.sort();
        links
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Forgets every decision. Called whenever either character is reloaded.
    pub fn clear(&mut self) {
        self.links.clear();
    }
}

impl ReferenceMap for LinkTable {
    fn resolve(
        &self,
        kind: ResourceKind,
        pair: DependencyPair,
        qualifier: u32,
        source: u32,
    ) -> Option<u32> {
        self.get(&LinkKey::new(kind, pair, qualifier, source))
    }
}
