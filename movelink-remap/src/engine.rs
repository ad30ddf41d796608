use crate::{
    ChangeRecord, ConflictScanner, LinkKey, LinkTable, RemapConfig, RemapError, RemapMode,
    RemapOutcome, RemapResult, RemapWarning, SelectionSet,
};
use movelink_model::{Character, Entry, ResourceSet, StaticGroup, StaticValues};
use movelink_types::ResourceKind;
use tracing::{debug, info, warn};

/// The destination entry a copied entry is being written to.
struct Target<'v> {
    index: u32,
    /// References of the entry being overwritten; `None` when appending.
    prior: Option<&'v StaticValues>,
    /// Moveset positions being overwritten by the current batch.
    excluded: &'v [usize],
}

/// Applies copied entries to a destination character.
///
/// The engine borrows the session's config and link table for one batch.
/// Rows are created and links recorded as references are resolved, so a
/// batch that aborts midway leaves them in place; entries are only rewritten
/// once their references are resolved.
pub struct RemapEngine<'a> {
    config: &'a RemapConfig,
    links: &'a mut LinkTable,
}

impl<'a> RemapEngine<'a> {
    pub fn new(config: &'a RemapConfig, links: &'a mut LinkTable) -> Self {
        Self { config, links }
    }

    /// Overwrites the entries at `targets` with the copied entries, pairing
    /// them in order. Each destination entry keeps its index.
    ///
    /// Fails without mutating anything when there are fewer targets than
    /// copied entries. Extra targets are ignored.
    pub fn paste(
        &mut self,
        selection: &SelectionSet,
        source: &ResourceSet,
        destination: &mut Character,
        targets: &[usize],
    ) -> RemapResult<RemapOutcome> {
        if selection.is_empty() {
            return Err(RemapError::EmptySelection);
        }
        if targets.len() < selection.len() {
            return Err(RemapError::InsufficientSelection {
                expected: selection.len(),
                available: targets.len(),
            });
        }
        let targets = &targets[..selection.len()];
        if let Some(&pos) = targets.iter().find(|&&pos| pos >= destination.moveset.len()) {
            return Err(RemapError::UnknownEntry(pos));
        }

        let prior: Vec<StaticValues> = targets
            .iter()
            .map(|&pos| destination.moveset.entries[pos].get_static_values())
            .collect();

        let mut outcome = RemapOutcome::new(RemapMode::Paste);
        outcome.snapshot = Some(selection.snapshot_id);
        for (n, entry) in selection.entries.iter().enumerate() {
            let target = Target {
                index: destination.moveset.entries[targets[n]].index,
                prior: Some(&prior[n]),
                excluded: targets,
            };
            if let Err(err) = self.remap_entry(entry, &target, source, destination, &mut outcome) {
                return Self::abort(outcome, err);
            }
        }

        for (entry, &pos) in selection.entries.iter().zip(targets) {
            let written = &mut destination.moveset.entries[pos];
            written.paste(entry, &*self.links);
            outcome.written.push(written.index);
        }
        info!(
            "Pasted {} entries from {} into {} ({} references remapped)",
            outcome.written.len(),
            selection.source_code,
            destination.code(),
            outcome.report.len()
        );
        Ok(outcome)
    }

    /// Appends the copied entries after the last destination entry. Every
    /// reference that has no link yet gets a freshly created row.
    pub fn add(
        &mut self,
        selection: &SelectionSet,
        source: &ResourceSet,
        destination: &mut Character,
    ) -> RemapResult<RemapOutcome> {
        if selection.is_empty() {
            return Err(RemapError::EmptySelection);
        }

        let first = destination.moveset.len() as u32;
        let mut outcome = RemapOutcome::new(RemapMode::Add);
        outcome.snapshot = Some(selection.snapshot_id);
        for (n, entry) in selection.entries.iter().enumerate() {
            let target = Target {
                index: first + n as u32,
                prior: None,
                excluded: &[],
            };
            if let Err(err) = self.remap_entry(entry, &target, source, destination, &mut outcome) {
                return Self::abort(outcome, err);
            }
            let mut added = Entry::new(target.index);
            added.paste(entry, &*self.links);
            destination.moveset.entries.push(added);
            outcome.written.push(target.index);
        }
        info!(
            "Added {} entries from {} to {} ({} references remapped)",
            outcome.written.len(),
            selection.source_code,
            destination.code(),
            outcome.report.len()
        );
        Ok(outcome)
    }

    fn abort(mut outcome: RemapOutcome, err: RemapError) -> RemapResult<RemapOutcome> {
        if !err.is_abort() {
            return Err(err);
        }
        warn!("{} stopped: {}", outcome.mode, err);
        outcome.aborted = Some(err);
        Ok(outcome)
    }

    fn remap_entry(
        &mut self,
        entry: &Entry,
        target: &Target<'_>,
        source: &ResourceSet,
        destination: &mut Character,
        outcome: &mut RemapOutcome,
    ) -> RemapResult<()> {
        let values = entry.get_static_values();
        for group in values.remappable() {
            if let Some(table) = missing_table(group.kind, source, &destination.resources) {
                warn!(
                    "{} was not opened; {} references of entry {} are left as is",
                    table, group.kind, target.index
                );
                outcome.warn(RemapWarning::MissingResource {
                    kind: group.kind,
                    table,
                    entry_index: target.index,
                });
                continue;
            }
            self.remap_group(group, target, source, destination, outcome)?;
        }
        Ok(())
    }

    fn remap_group(
        &mut self,
        group: &StaticGroup,
        target: &Target<'_>,
        source: &ResourceSet,
        destination: &mut Character,
        outcome: &mut RemapOutcome,
    ) -> RemapResult<()> {
        let kind = group.kind;
        let label = self.config.label(target.index).to_string();
        let candidates = target
            .prior
            .and_then(|prior| prior.get(kind, group.pair, group.qualifier))
            .map_or(&[][..], |g| g.values.as_slice());

        let mut cursor = 0;
        for &old in &group.values {
            let key = LinkKey::new(kind, group.pair, group.qualifier, old);
            if let Some(linked) = self.links.get(&key) {
                debug!("{} is already linked to {}", key, linked);
                outcome.report.push(
                    kind,
                    ChangeRecord {
                        kind,
                        entry_index: target.index,
                        label: label.clone(),
                        old_index: old,
                        old_name: row_name(source, kind, old),
                        new_index: linked,
                        new_name: row_name(&destination.resources, kind, linked),
                        is_new: false,
                        linked: true,
                    },
                );
                continue;
            }

            let (new, is_new) = if target.prior.is_some() {
                self.pick_candidate(group, candidates, &mut cursor, &label, target.excluded, destination)?
            } else {
                (destination.resources.append_new(kind)?, true)
            };

            let record = ChangeRecord {
                kind,
                entry_index: target.index,
                label: label.clone(),
                old_index: old,
                old_name: row_name(source, kind, old),
                new_index: new,
                new_name: if is_new {
                    None
                } else {
                    row_name(&destination.resources, kind, new)
                },
                is_new,
                linked: false,
            };
            destination.resources.copy_row(kind, new, source, old)?;
            self.links.set(key, new)?;
            debug!("{}: {}", kind, record);
            outcome.report.push(kind, record);
            cursor += 1;
        }
        Ok(())
    }

    /// Walks the overwritten entry's own indices from `cursor`. A candidate
    /// whose name is filtered is skipped; one that conflicts is replaced by a
    /// fresh row. A name ending with the entry's label bypasses both checks.
    fn pick_candidate(
        &self,
        group: &StaticGroup,
        candidates: &[u32],
        cursor: &mut usize,
        label: &str,
        excluded: &[usize],
        destination: &mut Character,
    ) -> RemapResult<(u32, bool)> {
        let kind = group.kind;
        let filtered = kind.has_display_names();
        while let Some(&candidate) = candidates.get(*cursor) {
            let name = if filtered {
                destination.resources.display_name(kind, candidate).unwrap_or("")
            } else {
                ""
            };
            let named_for_entry = !name.is_empty() && name.ends_with(label);
            if filtered && !named_for_entry && self.config.is_disallowed(name) {
                debug!("Skipping {} {} ({}): name is filtered", kind, candidate, name);
                *cursor += 1;
                continue;
            }
            if !named_for_entry {
                let scanner = ConflictScanner::new(&destination.moveset, &*self.links);
                if scanner.find_conflict(kind, group.pair, group.qualifier, candidate, excluded) {
                    return Ok((destination.resources.append_new(kind)?, true));
                }
            }
            return Ok((candidate, false));
        }
        Ok((destination.resources.append_new(kind)?, true))
    }
}

fn missing_table(kind: ResourceKind, source: &ResourceSet, destination: &ResourceSet) -> Option<String> {
    if !source.has(kind) {
        Some(source.table_name(kind))
    } else if !destination.has(kind) {
        Some(destination.table_name(kind))
    } else {
        None
    }
}

fn row_name(resources: &ResourceSet, kind: ResourceKind, index: u32) -> Option<String> {
    if !kind.has_display_names() {
        return None;
    }
    resources.display_name(kind, index).map(str::to_string)
}
