//! Dependency Descriptor: which item fields carry cross-table references.
//!
//! An entry item references a resource row through a pair of fields: the
//! value field holds the row index, the kind field holds a qualifier code that
//! says which table the index points into (the character's own table, the
//! shared common table, an enemy's table, ...). Only references whose
//! qualifier resolves to [`Qualifier::Character`] point into the character's
//! own tables and therefore need remapping when an entry moves between
//! characters.
//!
//! The table below is compiled in and never mutated.

use crate::ResourceKind;
use serde::Serialize;
use std::fmt;

/// A `(value_field, kind_field)` pair inside an entry item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct DependencyPair {
    /// Field holding the numeric resource index.
    pub value_field: &'static str,
    /// Field holding the qualifier code.
    pub kind_field: &'static str,
}

impl DependencyPair {
    /// Creates a pair from its two field names.
    #[must_use]
    pub const fn new(value_field: &'static str, kind_field: &'static str) -> Self {
        Self {
            value_field,
            kind_field,
        }
    }
}

impl fmt::Display for DependencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.value_field, self.kind_field)
    }
}

/// Semantic meaning of a qualifier code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Qualifier {
    /// The character's own table. The only remappable qualifier.
    Character,
    /// The shared common table.
    Common,
    /// A skill's table.
    Skill,
    /// The opponent's table.
    Enemy,
    /// A code the descriptor does not know.
    Unmapped,
}

impl Qualifier {
    /// Returns true if references with this qualifier must be remapped.
    #[must_use]
    pub const fn is_remappable(self) -> bool {
        matches!(self, Qualifier::Character)
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Qualifier::Character => "Character",
            Qualifier::Common => "Common",
            Qualifier::Skill => "Skill",
            Qualifier::Enemy => "Enemy",
            Qualifier::Unmapped => "Unmapped",
        };
        f.write_str(name)
    }
}

/// One dependency pair and the meaning of each of its qualifier codes.
#[derive(Debug)]
pub struct PairDescriptor {
    pub pair: DependencyPair,
    pub qualifiers: &'static [(u32, Qualifier)],
}

impl PairDescriptor {
    /// Resolves a qualifier code. Unknown codes resolve to [`Qualifier::Unmapped`].
    #[must_use]
    pub fn qualifier(&self, code: u32) -> Qualifier {
        self.qualifiers
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, q)| *q)
            .unwrap_or(Qualifier::Unmapped)
    }

    /// Reverse lookup: the code that carries a given meaning, if any.
    #[must_use]
    pub fn code_for(&self, qualifier: Qualifier) -> Option<u32> {
        self.qualifiers
            .iter()
            .find(|(_, q)| *q == qualifier)
            .map(|(c, _)| *c)
    }
}

/// All dependency pairs that reference one resource kind.
#[derive(Debug)]
pub struct KindDescriptor {
    pub kind: ResourceKind,
    pub pairs: &'static [PairDescriptor],
}

impl KindDescriptor {
    /// The first pair, which every kind has.
    #[must_use]
    pub fn primary(&self) -> &'static PairDescriptor {
        &self.pairs[0]
    }
}

static ANIMATION: KindDescriptor = KindDescriptor {
    kind: ResourceKind::Animation,
    pairs: &[PairDescriptor {
        pair: DependencyPair::new("ean_index", "ean_type"),
        qualifiers: &[
            (0, Qualifier::Common),
            (5, Qualifier::Character),
            (6, Qualifier::Skill),
            (10, Qualifier::Enemy),
        ],
    }],
};

static HITBOX: KindDescriptor = KindDescriptor {
    kind: ResourceKind::Hitbox,
    pairs: &[PairDescriptor {
        pair: DependencyPair::new("bdm_entry_id", "bdm_type"),
        qualifiers: &[
            (0, Qualifier::Common),
            (1, Qualifier::Character),
            (2, Qualifier::Skill),
        ],
    }],
};

static CAMERA: KindDescriptor = KindDescriptor {
    kind: ResourceKind::Camera,
    pairs: &[PairDescriptor {
        pair: DependencyPair::new("cam_index", "cam_type"),
        qualifiers: &[
            (0, Qualifier::Common),
            (3, Qualifier::Character),
            (4, Qualifier::Skill),
            (8, Qualifier::Enemy),
        ],
    }],
};

/// Returns the descriptor for a resource kind.
#[must_use]
pub fn descriptor(kind: ResourceKind) -> &'static KindDescriptor {
    match kind {
        ResourceKind::Animation => &ANIMATION,
        ResourceKind::Hitbox => &HITBOX,
        ResourceKind::Camera => &CAMERA,
    }
}

/// Looks up the descriptor of one pair of a kind.
#[must_use]
pub fn pair_descriptor(kind: ResourceKind, pair: DependencyPair) -> Option<&'static PairDescriptor> {
    descriptor(kind).pairs.iter().find(|p| p.pair == pair)
}

/// Resolves the meaning of a qualifier code on a pair of a kind.
#[must_use]
pub fn resolve_qualifier(kind: ResourceKind, pair: DependencyPair, code: u32) -> Qualifier {
    pair_descriptor(kind, pair)
        .map(|p| p.qualifier(code))
        .unwrap_or(Qualifier::Unmapped)
}
