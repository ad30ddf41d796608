use movelink_types::{DependencyPair, Qualifier, ResourceKind, descriptor, resolve_qualifier};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A field-value mapping inside a sub-entry.
///
/// Items are kept as a JSON object so that fields the engine does not know
/// about survive a copy untouched. Reference fields are plain unsigned
/// integers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item {
    pub fields: Map<String, Value>,
}

impl Item {
    /// Creates an empty item.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field setter.
    pub fn with(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(field.to_string(), value.into());
        self
    }

    /// Extract an unsigned field value.
    pub fn get_u32(&self, field: &str) -> Option<u32> {
        self.fields
            .get(field)
            .and_then(Value::as_u64)
            .and_then(|v| u32::try_from(v).ok())
    }

    /// Overwrite an unsigned field value.
    pub fn set_u32(&mut self, field: &str, value: u32) {
        self.fields.insert(field.to_string(), Value::from(value));
    }

    /// Returns `(value, qualifier_code)` when both halves of the pair are present.
    pub fn reference(&self, pair: DependencyPair) -> Option<(u32, u32)> {
        Some((self.get_u32(pair.value_field)?, self.get_u32(pair.kind_field)?))
    }
}

/// Sub-entry types. Only Animation, Hitbox and Camera reference resource tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubEntryType {
    Animation,
    Hitbox,
    Movement,
    Invulnerability,
    Effect,
    Projectile,
    Sound,
    Camera,
}

impl SubEntryType {
    /// The resource table this sub-entry type references, if any.
    pub fn resource_kind(self) -> Option<ResourceKind> {
        match self {
            SubEntryType::Animation => Some(ResourceKind::Animation),
            SubEntryType::Hitbox => Some(ResourceKind::Hitbox),
            SubEntryType::Camera => Some(ResourceKind::Camera),
            _ => None,
        }
    }
}

/// A typed group of items inside an entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubEntry {
    #[serde(rename = "type")]
    pub sub_type: SubEntryType,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl SubEntry {
    pub fn new(sub_type: SubEntryType, items: Vec<Item>) -> Self {
        Self { sub_type, items }
    }
}

/// Lookup of already-decided remaps, consulted when an entry is rewritten.
///
/// Implemented by the session link table; kept as a trait so the model does
/// not depend on the engine.
pub trait ReferenceMap {
    /// Destination index for a source reference, if one was decided.
    fn resolve(
        &self,
        kind: ResourceKind,
        pair: DependencyPair,
        qualifier: u32,
        source: u32,
    ) -> Option<u32>;
}

/// Distinct source indices found under one `(kind, pair, qualifier)`.
///
/// `values` keeps first-seen order with duplicates collapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticGroup {
    pub kind: ResourceKind,
    pub pair: DependencyPair,
    pub qualifier: u32,
    pub values: Vec<u32>,
}

impl StaticGroup {
    /// Meaning of this group's qualifier code.
    pub fn meaning(&self) -> Qualifier {
        resolve_qualifier(self.kind, self.pair, self.qualifier)
    }
}

/// Reference values of one entry, grouped by kind, pair and qualifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticValues {
    groups: Vec<StaticGroup>,
}

impl StaticValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a value, keeping first-seen order inside its group.
    pub fn insert(&mut self, kind: ResourceKind, pair: DependencyPair, qualifier: u32, value: u32) {
        match self
            .groups
            .iter_mut()
            .find(|g| g.kind == kind && g.pair == pair && g.qualifier == qualifier)
        {
            Some(group) => {
                if !group.values.contains(&value) {
                    group.values.push(value);
                }
            }
            None => self.groups.push(StaticGroup {
                kind,
                pair,
                qualifier,
                values: vec![value],
            }),
        }
    }

    pub fn groups(&self) -> &[StaticGroup] {
        &self.groups
    }

    /// Looks up one group.
    pub fn get(&self, kind: ResourceKind, pair: DependencyPair, qualifier: u32) -> Option<&StaticGroup> {
        self.groups
            .iter()
            .find(|g| g.kind == kind && g.pair == pair && g.qualifier == qualifier)
    }

    /// Groups whose qualifier resolves to `Character`.
    pub fn remappable(&self) -> impl Iterator<Item = &StaticGroup> {
        self.groups.iter().filter(|g| g.meaning().is_remappable())
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// A structural move definition, identified by its ordinal index in the moveset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub index: u32,
    #[serde(default)]
    pub sub_entries: Vec<SubEntry>,
}

impl Entry {
    /// Creates an empty entry.
    pub fn new(index: u32) -> Self {
        Self {
            index,
            sub_entries: Vec::new(),
        }
    }

    /// Builder-style sub-entry append.
    pub fn with_sub_entry(mut self, sub_entry: SubEntry) -> Self {
        self.sub_entries.push(sub_entry);
        self
    }

    /// Entries without sub-entries are placeholders and are not listed.
    pub fn is_empty(&self) -> bool {
        self.sub_entries.is_empty()
    }

    /// Every resource reference of this entry, grouped by kind, pair and qualifier.
    pub fn get_static_values(&self) -> StaticValues {
        let mut values = StaticValues::new();
        for (kind, item) in self.resource_items() {
            for pd in descriptor(kind).pairs {
                if let Some((value, qualifier)) = item.reference(pd.pair) {
                    values.insert(kind, pd.pair, qualifier, value);
                }
            }
        }
        values
    }

    /// Returns true if any item uses `value` for the given kind, pair and qualifier.
    pub fn uses_reference(
        &self,
        kind: ResourceKind,
        pair: DependencyPair,
        qualifier: u32,
        value: u32,
    ) -> bool {
        self.resource_items()
            .filter(|(k, _)| *k == kind)
            .any(|(_, item)| item.reference(pair) == Some((value, qualifier)))
    }

    /// Overwrites this entry's content with `source`, substituting every
    /// Character-qualified reference that `links` resolves. The entry keeps its
    /// own index; references with other qualifiers, or with no decided remap,
    /// are copied verbatim.
    pub fn paste(&mut self, source: &Entry, links: &dyn ReferenceMap) {
        let mut sub_entries = source.sub_entries.clone();
        for sub_entry in &mut sub_entries {
            let Some(kind) = sub_entry.sub_type.resource_kind() else {
                continue;
            };
            for item in &mut sub_entry.items {
                for pd in descriptor(kind).pairs {
                    let Some((value, qualifier)) = item.reference(pd.pair) else {
                        continue;
                    };
                    if !pd.qualifier(qualifier).is_remappable() {
                        continue;
                    }
                    if let Some(new_value) = links.resolve(kind, pd.pair, qualifier, value) {
                        item.set_u32(pd.pair.value_field, new_value);
                    }
                }
            }
        }
        self.sub_entries = sub_entries;
    }

    fn resource_items(&self) -> impl Iterator<Item = (ResourceKind, &Item)> + '_ {
        self.sub_entries.iter().flat_map(|sub_entry| {
            let kind = sub_entry.sub_type.resource_kind();
            sub_entry
                .items
                .iter()
                .filter_map(move |item| kind.map(|k| (k, item)))
        })
    }
}
