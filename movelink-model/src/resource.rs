//! Resource rows and the per-character resource set.
//!
//! Rows are owned by their character and copied by value; nothing is ever
//! aliased across characters. Tables only grow.

use crate::{ModelError, ModelResult};
use movelink_types::ResourceKind;
use serde::{Deserialize, Serialize};

/// An animation or camera clip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clip {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub frame_count: u32,
    /// Opaque keyframe payload.
    #[serde(default)]
    pub data: Vec<u8>,
}

impl Clip {
    /// Creates an empty clip with a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Deep-copies the payload of `other`. With `keep_name`, the source
    /// clip's name is carried over as well.
    pub fn paste(&mut self, other: &Clip, keep_name: bool) {
        self.frame_count = other.frame_count;
        self.data = other.data.clone();
        if keep_name {
            self.name = other.name.clone();
        }
    }
}

/// A hit-detection record. The `id` is explicit and ids may be sparse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitboxRecord {
    pub id: u32,
    #[serde(default)]
    pub data: Vec<u8>,
}

impl HitboxRecord {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            data: Vec::new(),
        }
    }

    /// Deep-copies the payload of `other`, keeping this record's id.
    pub fn paste(&mut self, other: &HitboxRecord) {
        self.data = other.data.clone();
    }
}

/// Ordered clip list addressed by position (Animation, Camera).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClipTable {
    pub clips: Vec<Clip>,
}

impl ClipTable {
    pub fn new(clips: Vec<Clip>) -> Self {
        Self { clips }
    }
}

/// Id-keyed hitbox list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HitboxTable {
    pub records: Vec<HitboxRecord>,
}

impl HitboxTable {
    pub fn new(records: Vec<HitboxRecord>) -> Self {
        Self { records }
    }

    /// One more than the highest id; 0 for an empty table. `None` once an
    /// id of `u32::MAX` is taken.
    pub fn next_id(&self) -> Option<u32> {
        match self.records.iter().map(|r| r.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(0),
        }
    }

    pub fn get(&self, id: u32) -> Option<&HitboxRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut HitboxRecord> {
        self.records.iter_mut().find(|r| r.id == id)
    }
}

/// Borrowed view of one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowRef<'a> {
    Clip(&'a Clip),
    Hitbox(&'a HitboxRecord),
}

impl<'a> RowRef<'a> {
    /// Display name, for clips. Borrows from the table, not from the view.
    pub fn name(&self) -> Option<&'a str> {
        match self {
            RowRef::Clip(clip) => Some(clip.name.as_str()),
            RowRef::Hitbox(_) => None,
        }
    }
}

/// One character's resource tables. Hitbox and Camera tables are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceSet {
    pub code: String,
    pub animations: Option<ClipTable>,
    pub hitboxes: Option<HitboxTable>,
    pub cameras: Option<ClipTable>,
}

impl ResourceSet {
    /// Creates a set with an empty animation table and no optional tables.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            animations: Some(ClipTable::default()),
            hitboxes: None,
            cameras: None,
        }
    }

    pub fn with_animations(mut self, table: ClipTable) -> Self {
        self.animations = Some(table);
        self
    }

    pub fn with_hitboxes(mut self, table: HitboxTable) -> Self {
        self.hitboxes = Some(table);
        self
    }

    pub fn with_cameras(mut self, table: ClipTable) -> Self {
        self.cameras = Some(table);
        self
    }

    /// File name of a table of this character, e.g. `GOK.ean`.
    pub fn table_name(&self, kind: ResourceKind) -> String {
        kind.file_name(&self.code)
    }

    /// Whether the table for `kind` is loaded.
    pub fn has(&self, kind: ResourceKind) -> bool {
        match kind {
            ResourceKind::Animation => self.animations.is_some(),
            ResourceKind::Hitbox => self.hitboxes.is_some(),
            ResourceKind::Camera => self.cameras.is_some(),
        }
    }

    /// Number of rows in a table; 0 when the table is missing.
    pub fn len(&self, kind: ResourceKind) -> usize {
        match kind {
            ResourceKind::Animation => self.animations.as_ref().map_or(0, |t| t.clips.len()),
            ResourceKind::Hitbox => self.hitboxes.as_ref().map_or(0, |t| t.records.len()),
            ResourceKind::Camera => self.cameras.as_ref().map_or(0, |t| t.clips.len()),
        }
    }

    /// Index the next appended row will get: the row count for clip tables,
    /// one past the highest id for hitboxes.
    pub fn next_free_index(&self, kind: ResourceKind) -> ModelResult<u32> {
        match kind {
            ResourceKind::Animation | ResourceKind::Camera => {
                let table = self.clip_table(kind)?;
                Ok(table.clips.len() as u32)
            }
            ResourceKind::Hitbox => self.hitbox_table()?.next_id().ok_or_else(|| {
                ModelError::TableFull {
                    kind,
                    table: self.table_name(kind),
                }
            }),
        }
    }

    /// Appends an empty row at [`next_free_index`](Self::next_free_index) and returns its index.
    pub fn append_new(&mut self, kind: ResourceKind) -> ModelResult<u32> {
        let index = self.next_free_index(kind)?;
        match kind {
            ResourceKind::Animation | ResourceKind::Camera => {
                self.clip_table_mut(kind)?.clips.push(Clip::default());
            }
            ResourceKind::Hitbox => {
                self.hitbox_table_mut()?.records.push(HitboxRecord::new(index));
            }
        }
        Ok(index)
    }

    /// Borrows a row.
    pub fn row_at(&self, kind: ResourceKind, index: u32) -> ModelResult<RowRef<'_>> {
        let row = match kind {
            ResourceKind::Animation | ResourceKind::Camera => self
                .clip_table(kind)?
                .clips
                .get(index as usize)
                .map(RowRef::Clip),
            ResourceKind::Hitbox => self.hitbox_table()?.get(index).map(RowRef::Hitbox),
        };
        row.ok_or_else(|| self.out_of_range(kind, index))
    }

    /// Display name of a row, when it exists and has one.
    pub fn display_name(&self, kind: ResourceKind, index: u32) -> Option<&str> {
        self.row_at(kind, index).ok().and_then(|row| row.name())
    }

    /// Deep-copies row `src_index` of `src` into row `dst_index` of this set.
    /// Clip names are carried over from the source.
    pub fn copy_row(
        &mut self,
        kind: ResourceKind,
        dst_index: u32,
        src: &ResourceSet,
        src_index: u32,
    ) -> ModelResult<()> {
        match kind {
            ResourceKind::Animation | ResourceKind::Camera => {
                let dst_name = self.table_name(kind);
                let dst_table = self.clip_table_mut(kind)?;
                let src_table = src.clip_table(kind)?;
                let dst_row = dst_table.clips.get_mut(dst_index as usize).ok_or(
                    ModelError::IndexOutOfRange {
                        kind,
                        index: dst_index,
                        table: dst_name,
                    },
                )?;
                let src_row = src_table
                    .clips
                    .get(src_index as usize)
                    .ok_or_else(|| src.out_of_range(kind, src_index))?;
                dst_row.paste(src_row, true);
            }
            ResourceKind::Hitbox => {
                let dst_name = self.table_name(kind);
                let dst_table = self.hitbox_table_mut()?;
                let src_table = src.hitbox_table()?;
                let dst_row = dst_table.get_mut(dst_index).ok_or(ModelError::IndexOutOfRange {
                    kind,
                    index: dst_index,
                    table: dst_name,
                })?;
                let src_row = src_table
                    .get(src_index)
                    .ok_or_else(|| src.out_of_range(kind, src_index))?;
                dst_row.paste(src_row);
            }
        }
        Ok(())
    }

    fn clip_table(&self, kind: ResourceKind) -> ModelResult<&ClipTable> {
        let table = match kind {
            ResourceKind::Camera => self.cameras.as_ref(),
            _ => self.animations.as_ref(),
        };
        table.ok_or_else(|| self.missing(kind))
    }

    fn clip_table_mut(&mut self, kind: ResourceKind) -> ModelResult<&mut ClipTable> {
        let missing = self.missing(kind);
        let table = match kind {
            ResourceKind::Camera => self.cameras.as_mut(),
            _ => self.animations.as_mut(),
        };
        table.ok_or(missing)
    }

    fn hitbox_table(&self) -> ModelResult<&HitboxTable> {
        self.hitboxes
            .as_ref()
            .ok_or_else(|| self.missing(ResourceKind::Hitbox))
    }

    fn hitbox_table_mut(&mut self) -> ModelResult<&mut HitboxTable> {
        let missing = self.missing(ResourceKind::Hitbox);
        self.hitboxes.as_mut().ok_or(missing)
    }

    fn missing(&self, kind: ResourceKind) -> ModelError {
        ModelError::MissingResource {
            kind,
            table: self.table_name(kind),
        }
    }

    fn out_of_range(&self, kind: ResourceKind, index: u32) -> ModelError {
        ModelError::IndexOutOfRange {
            kind,
            index,
            table: self.table_name(kind),
        }
    }
}
