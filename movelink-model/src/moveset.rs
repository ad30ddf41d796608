use crate::{Entry, ResourceSet};
use serde::{Deserialize, Serialize};

/// A character's ordered entry sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Moveset {
    pub entries: Vec<Entry>,
}

impl Moveset {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Entry> {
        self.entries.get(position)
    }

    /// Position of the entry with a given index.
    pub fn position_of(&self, index: u32) -> Option<usize> {
        self.entries.iter().position(|e| e.index == index)
    }

    /// Positions of the entries an operator can select: those with sub-entries.
    pub fn listed_positions(&self) -> Vec<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| !e.is_empty())
            .map(|(pos, _)| pos)
            .collect()
    }
}

/// A loaded character: code, moveset and resource tables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Character {
    pub moveset: Moveset,
    pub resources: ResourceSet,
}

impl Character {
    pub fn new(moveset: Moveset, resources: ResourceSet) -> Self {
        Self { moveset, resources }
    }

    /// Three-character code, e.g. `GOK`.
    pub fn code(&self) -> &str {
        &self.resources.code
    }
}
