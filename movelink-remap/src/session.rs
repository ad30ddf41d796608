use crate::{
    LinkTable, RemapConfig, RemapEngine, RemapError, RemapOutcome, RemapResult, SelectionSet,
};
use movelink_model::Character;
use tracing::{debug, info};

/// An editing session: one destination, one source and the links decided
/// between them.
///
/// Reloading either character starts a new session scope; the link table is
/// cleared so no decision outlives the tables it was made against.
#[derive(Debug)]
pub struct EditingSession {
    destination: Character,
    source: Character,
    links: LinkTable,
    config: RemapConfig,
}

impl EditingSession {
    pub fn new(destination: Character, source: Character, config: RemapConfig) -> Self {
        info!(
            "Editing {} with entries from {}",
            destination.code(),
            source.code()
        );
        Self {
            destination,
            source,
            links: LinkTable::new(),
            config,
        }
    }

    pub fn destination(&self) -> &Character {
        &self.destination
    }

    pub fn source(&self) -> &Character {
        &self.source
    }

    pub fn links(&self) -> &LinkTable {
        &self.links
    }

    pub fn config(&self) -> &RemapConfig {
        &self.config
    }

    /// Ends the session, handing back the edited destination.
    pub fn into_destination(self) -> Character {
        self.destination
    }

    /// Replaces the destination character and clears the links.
    pub fn load_destination(&mut self, character: Character) {
        self.destination = character;
        self.reset_links();
    }

    /// Replaces the source character and clears the links.
    pub fn load_source(&mut self, character: Character) {
        self.source = character;
        self.reset_links();
    }

    /// Snapshots source entries by moveset position.
    pub fn copy(&self, positions: &[usize]) -> RemapResult<SelectionSet> {
        let selection = SelectionSet::capture(&self.source, positions)?;
        debug!("Copied entries {:?} from {}", selection.indices(), self.source.code());
        Ok(selection)
    }

    /// Snapshots source entries by entry index.
    pub fn copy_indices(&self, indices: &[u32]) -> RemapResult<SelectionSet> {
        let positions = positions_of(&self.source, indices)?;
        self.copy(&positions)
    }

    /// Destination positions of the given entry indices.
    pub fn destination_positions(&self, indices: &[u32]) -> RemapResult<Vec<usize>> {
        positions_of(&self.destination, indices)
    }

    /// Turns the operator's target selection into exactly `count` positions.
    ///
    /// Duplicates are dropped and extra targets ignored. A short selection is
    /// extended with the listed entries that follow the last target; if the
    /// moveset runs out first the paste is refused.
    pub fn resolve_targets(&self, targets: &[usize], count: usize) -> RemapResult<Vec<usize>> {
        if count == 0 {
            return Err(RemapError::EmptySelection);
        }
        let len = self.destination.moveset.len();
        let mut resolved: Vec<usize> = Vec::with_capacity(count);
        for &pos in targets {
            if resolved.len() == count {
                break;
            }
            if pos >= len {
                return Err(RemapError::UnknownEntry(pos));
            }
            if !resolved.contains(&pos) {
                resolved.push(pos);
            }
        }

        if let Some(&last) = resolved.last() {
            for pos in self.destination.moveset.listed_positions() {
                if resolved.len() == count {
                    break;
                }
                if pos > last && !resolved.contains(&pos) {
                    resolved.push(pos);
                }
            }
        }

        if resolved.len() < count {
            return Err(RemapError::InsufficientSelection {
                expected: count,
                available: resolved.len(),
            });
        }
        Ok(resolved)
    }

    /// Pastes a snapshot over the destination entries at `targets`.
    pub fn paste(&mut self, selection: &SelectionSet, targets: &[usize]) -> RemapResult<RemapOutcome> {
        self.check_source(selection)?;
        let targets = self.resolve_targets(targets, selection.len())?;
        let mut engine = RemapEngine::new(&self.config, &mut self.links);
        engine.paste(selection, &self.source.resources, &mut self.destination, &targets)
    }

    /// Appends a snapshot to the destination moveset.
    pub fn add(&mut self, selection: &SelectionSet) -> RemapResult<RemapOutcome> {
        self.check_source(selection)?;
        let mut engine = RemapEngine::new(&self.config, &mut self.links);
        engine.add(selection, &self.source.resources, &mut self.destination)
    }

    fn check_source(&self, selection: &SelectionSet) -> RemapResult<()> {
        if selection.source_code != self.source.code() {
            return Err(RemapError::StaleSelection {
                expected: self.source.code().to_string(),
                found: selection.source_code.clone(),
            });
        }
        Ok(())
    }

    fn reset_links(&mut self) {
        if !self.links.is_empty() {
            debug!("Clearing {} links", self.links.len());
        }
        self.links.clear();
    }
}

fn positions_of(character: &Character, indices: &[u32]) -> RemapResult<Vec<usize>> {
    indices
        .iter()
        .map(|&index| {
            character
                .moveset
                .position_of(index)
                .ok_or(RemapError::UnknownIndex(index))
        })
        .collect()
}
