//! Shared fixtures for remap tests.

#![allow(dead_code)]

use movelink_model::{
    Character, Clip, ClipTable, Entry, HitboxRecord, HitboxTable, Item, Moveset, ResourceSet,
    SubEntry, SubEntryType,
};
use movelink_remap::{EditingSession, RemapConfig, SelectionSet};
use movelink_types::{ResourceKind, descriptor};

pub const ANIM_CHARACTER: u32 = 5;
pub const ANIM_COMMON: u32 = 0;
pub const ANIM_ENEMY: u32 = 10;
pub const HITBOX_CHARACTER: u32 = 1;
pub const HITBOX_COMMON: u32 = 0;
pub const CAMERA_CHARACTER: u32 = 3;

pub fn anim_item(index: u32, ean_type: u32) -> Item {
    Item::new()
        .with("start_time", 0)
        .with("ean_index", index)
        .with("ean_type", ean_type)
}

pub fn hitbox_item(id: u32, bdm_type: u32) -> Item {
    Item::new()
        .with("bdm_entry_id", id)
        .with("bdm_type", bdm_type)
        .with("damage", 120)
}

pub fn camera_item(index: u32, cam_type: u32) -> Item {
    Item::new().with("cam_index", index).with("cam_type", cam_type)
}

/// Entry with one Animation sub-entry using Character-qualified indices.
pub fn anim_entry(index: u32, anims: &[u32]) -> Entry {
    let items = anims.iter().map(|a| anim_item(*a, ANIM_CHARACTER)).collect();
    Entry::new(index).with_sub_entry(SubEntry::new(SubEntryType::Animation, items))
}

pub fn clips(names: &[&str]) -> ClipTable {
    ClipTable::new(
        names
            .iter()
            .enumerate()
            .map(|(i, n)| Clip {
                name: n.to_string(),
                frame_count: i as u32 + 1,
                data: vec![i as u8; 4],
            })
            .collect(),
    )
}

/// Clip table named `{prefix}{i}` for `0..count`.
pub fn numbered_clips(prefix: &str, count: usize) -> ClipTable {
    let names: Vec<String> = (0..count).map(|i| format!("{prefix}{i}")).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    clips(&refs)
}

pub fn hitboxes(ids: &[u32]) -> HitboxTable {
    HitboxTable::new(
        ids.iter()
            .map(|id| HitboxRecord {
                id: *id,
                data: vec![*id as u8; 2],
            })
            .collect(),
    )
}

pub fn character(code: &str, entries: Vec<Entry>, animations: ClipTable) -> Character {
    Character::new(
        Moveset::new(entries),
        ResourceSet::new(code).with_animations(animations),
    )
}

pub fn session(destination: Character, source: Character) -> EditingSession {
    EditingSession::new(destination, source, RemapConfig::default())
}

pub fn copy(session: &EditingSession, positions: &[usize]) -> SelectionSet {
    session.copy(positions).unwrap()
}

/// Reference values of an entry for a kind and qualifier, in item order.
pub fn refs(entry: &Entry, kind: ResourceKind, qualifier: u32) -> Vec<u32> {
    let pair = descriptor(kind).primary().pair;
    entry
        .sub_entries
        .iter()
        .filter(|s| s.sub_type.resource_kind() == Some(kind))
        .flat_map(|s| s.items.iter())
        .filter_map(|item| item.reference(pair))
        .filter(|(_, q)| *q == qualifier)
        .map(|(v, _)| v)
        .collect()
}

pub fn clip_name(character: &Character, kind: ResourceKind, index: u32) -> String {
    character
        .resources
        .display_name(kind, index)
        .unwrap_or_default()
        .to_string()
}
