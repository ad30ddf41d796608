//! Remap configuration.

use crate::RemapResult;
use movelink_model::EntryLabels;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Animation name fragments that mark a clip as serving another purpose.
pub const DEFAULT_DISALLOWED_SUBSTRINGS: &[&str] = &["_DMG", "_GUARD", "_DOWN", "_FALL", "_TEMP"];

/// Configuration for the remap engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemapConfig {
    /// Destination animation names containing any of these are skipped by
    /// positional reuse unless they end with the entry's label.
    pub disallowed_name_substrings: Vec<String>,
    /// Entry label overrides on top of the compiled-in table.
    pub entry_labels: EntryLabels,
}

impl Default for RemapConfig {
    fn default() -> Self {
        Self {
            disallowed_name_substrings: DEFAULT_DISALLOWED_SUBSTRINGS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            entry_labels: EntryLabels::default(),
        }
    }
}

impl RemapConfig {
    /// Parses a JSON config; missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> RemapResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a JSON config file.
    pub fn load(path: &Path) -> RemapResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Replaces the name filter list.
    pub fn with_disallowed<I, S>(mut self, substrings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.disallowed_name_substrings = substrings.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the entry labels.
    pub fn with_labels(mut self, labels: EntryLabels) -> Self {
        self.entry_labels = labels;
        self
    }

    /// Returns true if the name contains a disallowed fragment.
    pub fn is_disallowed(&self, name: &str) -> bool {
        self.disallowed_name_substrings
            .iter()
            .any(|word| name.contains(word.as_str()))
    }

    /// Display label of an entry index.
    pub fn label(&self, index: u32) -> &str {
        self.entry_labels.label(index)
    }
}
