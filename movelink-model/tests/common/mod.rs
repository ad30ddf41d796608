//! Shared fixtures for model tests.

#![allow(dead_code)]

use movelink_model::{Clip, ClipTable, Entry, HitboxRecord, HitboxTable, Item, SubEntry, SubEntryType};

/// Animation qualifier codes of the compiled-in descriptor.
pub const ANIM_CHARACTER: u32 = 5;
pub const ANIM_COMMON: u32 = 0;
pub const ANIM_ENEMY: u32 = 10;
pub const HITBOX_CHARACTER: u32 = 1;
pub const CAMERA_CHARACTER: u32 = 3;

pub fn anim_item(index: u32, ean_type: u32) -> Item {
    Item::new()
        .with("start_time", 0)
        .with("ean_index", index)
        .with("ean_type", ean_type)
}

pub fn hitbox_item(id: u32, bdm_type: u32) -> Item {
    Item::new().with("bdm_entry_id", id).with("bdm_type", bdm_type)
}

pub fn camera_item(index: u32, cam_type: u32) -> Item {
    Item::new().with("cam_index", index).with("cam_type", cam_type)
}

pub fn anim_entry(index: u32, items: Vec<Item>) -> Entry {
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
