//! Character directories for CLI tests.

#![allow(dead_code)]

use movelink_model::store::save_character;
use movelink_model::{
    Character, Clip, ClipTable, Entry, HitboxRecord, HitboxTable, Item, Moveset, ResourceSet,
    SubEntry, SubEntryType,
};
use std::path::Path;
use tempfile::TempDir;

pub const ANIM_CHARACTER: u32 = 5;
pub const HITBOX_CHARACTER: u32 = 1;

pub fn anim_sub(anims: &[u32]) -> SubEntry {
    let items = anims
        .iter()
        .map(|a| Item::new().with("ean_index", *a).with("ean_type", ANIM_CHARACTER))
        .collect();
    SubEntry::new(SubEntryType::Animation, items)
}

pub fn hitbox_sub(ids: &[u32]) -> SubEntry {
    let items = ids
        .iter()
        .map(|id| Item::new().with("bdm_entry_id", *id).with("bdm_type", HITBOX_CHARACTER))
        .collect();
    SubEntry::new(SubEntryType::Hitbox, items)
}

pub fn clips(prefix: &str, count: usize) -> ClipTable {
    ClipTable::new(
        (0..count)
            .map(|i| Clip {
                name: format!("{prefix}{i}"),
                frame_count: 10,
                data: vec![i as u8; 3],
            })
            .collect(),
    )
}

pub fn hitboxes(ids: &[u32]) -> HitboxTable {
    HitboxTable::new(ids.iter().map(|id| HitboxRecord { id: *id, data: vec![*id as u8] }).collect())
}

/// AAA: entry 300 uses animation 1 and hitbox 2, entry 301 uses animation 2.
pub fn source() -> Character {
    Character::new(
        Moveset::new(vec![
            Entry::new(300)
                .with_sub_entry(anim_sub(&[1]))
                .with_sub_entry(hitbox_sub(&[2])),
            Entry::new(301).with_sub_entry(anim_sub(&[2])),
            Entry::new(302).with_sub_entry(anim_sub(&[9])),
        ]),
        ResourceSet::new("AAA")
            .with_animations(clips("src", 3))
            .with_hitboxes(hitboxes(&[2])),
    )
}

/// BBB: entries 300 and 302 listed, 301 empty.
pub fn destination() -> Character {
    Character::new(
        Moveset::new(vec![
            Entry::new(300).with_sub_entry(anim_sub(&[0])),
            Entry::new(301),
            Entry::new(302).with_sub_entry(anim_sub(&[1])),
        ]),
        ResourceSet::new("BBB")
            .with_animations(clips("dst", 2))
            .with_hitboxes(hitboxes(&[0])),
    )
}

pub fn write(dir: &Path, character: &Character) {
    save_character(character, dir, character.code()).unwrap();
}

/// Temporary directories holding AAA and BBB.
pub struct Workspace {
    pub source: TempDir,
    pub dest: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let source_dir = tempfile::tempdir().unwrap();
        let dest_dir = tempfile::tempdir().unwrap();
        write(source_dir.path(), &source());
        write(dest_dir.path(), &destination());
        Self {
            source: source_dir,
            dest: dest_dir,
        }
    }

    pub fn source_arg(&self) -> String {
        self.source.path().display().to_string()
    }

    pub fn dest_arg(&self) -> String {
        self.dest.path().display().to_string()
    }
}
