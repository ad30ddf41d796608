//! Change reporting.
//!
//! Every remapped reference produces a [`ChangeRecord`]. Records are grouped
//! by resource kind and rendered for the operator after each batch.

use crate::RemapError;
use movelink_types::{ResourceKind, SnapshotId};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Shown in place of a destination name when the row was freshly created.
pub const NEW_MARKER: &str = "new";

/// Which operation produced an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RemapMode {
    /// Overwrite existing destination entries.
    Paste,
    /// Append new destination entries.
    Add,
}

impl fmt::Display for RemapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemapMode::Paste => f.write_str("paste"),
            RemapMode::Add => f.write_str("add"),
        }
    }
}

/// One `(old -> new)` remap of a source reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeRecord {
    /// Grouping key in [`ChangeReport`]; omitted from JSON.
    #[serde(skip)]
    pub kind: ResourceKind,
    /// Destination entry the reference belongs to.
    pub entry_index: u32,
    pub label: String,
    pub old_index: u32,
    pub old_name: Option<String>,
    pub new_index: u32,
    /// Prior name of a reused destination row; `None` for fresh rows.
    pub new_name: Option<String>,
    pub is_new: bool,
    /// Resolved from a link decided earlier in the session; nothing was copied.
    pub linked: bool,
}

impl fmt::Display for ChangeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.entry_index, self.old_index)?;
        if let Some(name) = &self.old_name {
            write!(f, " ({name})")?;
        }
        write!(f, " -> {}", self.new_index)?;
        if self.is_new && self.kind.has_display_names() {
            write!(f, " ({NEW_MARKER})")?;
        } else if let Some(name) = &self.new_name {
            write!(f, " ({name})")?;
        }
        if self.linked {
            write!(f, " [unchanged]")?;
        }
        Ok(())
    }
}

/// Change records per resource kind, in the order they were made.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ChangeReport {
    records: BTreeMap<ResourceKind, Vec<ChangeRecord>>,
}

impl ChangeReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: ResourceKind, record: ChangeRecord) {
        self.records.entry(kind).or_default().push(record);
    }

    /// Records of one kind.
    pub fn records(&self, kind: ResourceKind) -> &[ChangeRecord] {
        self.records.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Kinds with at least one record, with their records.
    pub fn iter(&self) -> impl Iterator<Item = (ResourceKind, &[ChangeRecord])> {
        self.records.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    /// Records that changed something, i.e. were not resolved from a link.
    pub fn changed(&self, kind: ResourceKind) -> impl Iterator<Item = &ChangeRecord> {
        self.records(kind).iter().filter(|r| !r.linked)
    }

    /// Number of rows created for a kind.
    pub fn created(&self, kind: ResourceKind) -> usize {
        self.records(kind).iter().filter(|r| r.is_new).count()
    }

    pub fn len(&self) -> usize {
        self.records.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Renders the report with one heading per kind naming both tables.
    pub fn render(&self, source_code: &str, destination_code: &str) -> String {
        let mut out = String::new();
        for (kind, records) in self.iter() {
            out.push_str(&format!(
                "{} -> {}\n",
                kind.file_name(source_code),
                kind.file_name(destination_code)
            ));
            for record in records {
                out.push_str(&format!("  {record}\n"));
            }
        }
        out
    }
}

/// A non-fatal problem met during a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RemapWarning {
    /// A table was not loaded; the entry's references of that kind were
    /// left as they were.
    MissingResource {
        kind: ResourceKind,
        table: String,
        entry_index: u32,
    },
}

impl fmt::Display for RemapWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemapWarning::MissingResource {
                kind,
                table,
                entry_index,
            } => write!(
                f,
                "{table} was not opened; {kind} references of entry {entry_index} were not remapped"
            ),
        }
    }
}

/// Result of a paste or add batch.
///
/// A batch that stopped on a row-level failure still returns an outcome:
/// rows created and links recorded before the failure are kept, `written`
/// lists the entries that were actually rewritten and `aborted` holds the
/// failure.
#[derive(Debug)]
pub struct RemapOutcome {
    pub mode: RemapMode,
    /// The copy that was replayed.
    pub snapshot: Option<SnapshotId>,
    pub report: ChangeReport,
    pub warnings: Vec<RemapWarning>,
    /// Indices of the destination entries that were written.
    pub written: Vec<u32>,
    pub aborted: Option<RemapError>,
}

impl RemapOutcome {
    pub fn new(mode: RemapMode) -> Self {
        Self {
            mode,
            snapshot: None,
            report: ChangeReport::new(),
            warnings: Vec::new(),
            written: Vec::new(),
            aborted: None,
        }
    }

    /// Adds a warning unless an identical one is already recorded.
    pub fn warn(&mut self, warning: RemapWarning) {
        if !self.warnings.contains(&warning) {
            self.warnings.push(warning);
        }
    }

    /// True when the whole batch was applied.
    pub fn is_complete(&self) -> bool {
        self.aborted.is_none()
    }
}
