//! Character directory loading and saving.
//!
//! A character's asset set is a directory of JSON tables named after its
//! three-character code:
//!
//! | file                   | content   | required |
//! |------------------------|-----------|----------|
//! | `CODE_PLAYER.bac.json` | entries   | yes      |
//! | `CODE.ean.json`        | Animation | yes      |
//! | `CODE_PLAYER.bdm.json` | Hitbox    | no       |
//! | `CODE.cam.ean.json`    | Camera    | no       |
//!
//! Optional tables that are absent or unparsable load as `None`; the moves
//! that need them can then not be remapped.

use crate::{Character, ClipTable, HitboxTable, ModelError, ModelResult, Moveset, ResourceSet};
use movelink_types::ResourceKind;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Suffix of the entry file, appended to the character code.
pub const MOVESET_SUFFIX: &str = "_PLAYER.bac.json";

/// Why an optional table was not loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    Missing,
    Invalid(String),
}

/// An optional table that was skipped during load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    pub kind: ResourceKind,
    pub path: PathBuf,
    pub reason: SkipReason,
}

impl std::fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let file = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        match &self.reason {
            SkipReason::Missing => write!(f, "no valid {} file found", self.kind)?,
            SkipReason::Invalid(err) => write!(f, "{file} is not a valid {} file ({err})", self.kind)?,
        }
        write!(f, " but skipping anyway; moves that require it cannot be copied")
    }
}

/// A character and the optional tables that could not be loaded.
#[derive(Debug)]
pub struct LoadedCharacter {
    pub character: Character,
    pub warnings: Vec<LoadWarning>,
}

/// Path of the JSON rendition of a table.
pub fn table_path(dir: &Path, code: &str, kind: ResourceKind) -> PathBuf {
    dir.join(format!("{}.json", kind.file_name(code)))
}

/// Path of the entry file.
pub fn moveset_path(dir: &Path, code: &str) -> PathBuf {
    dir.join(format!("{code}{MOVESET_SUFFIX}"))
}

/// Character codes present in a directory, sorted.
pub fn detect_codes(dir: &Path) -> ModelResult<Vec<String>> {
    let mut codes = Vec::new();
    for dir_entry in fs::read_dir(dir)? {
        let name = dir_entry?.file_name();
        let name = name.to_string_lossy();
        if let Some(code) = name.strip_suffix(MOVESET_SUFFIX) {
            if code.len() == 3 && code.chars().all(|c| c.is_alphanumeric() || c == '_') {
                codes.push(code.to_string());
            }
        }
    }
    codes.sort();
    Ok(codes)
}

/// Picks the character code of a directory: the given one, or the only one found.
pub fn resolve_code(dir: &Path, code: Option<&str>) -> ModelResult<String> {
    if let Some(code) = code {
        return Ok(code.to_string());
    }
    let mut codes = detect_codes(dir)?;
    match codes.len() {
        0 => Err(ModelError::NoCharacter(dir.to_path_buf())),
        1 => Ok(codes.remove(0)),
        _ => Err(ModelError::AmbiguousCharacter(codes)),
    }
}

/// Character codes are one to three ASCII alphanumerics.
pub fn validate_code(code: &str) -> ModelResult<()> {
    if code.is_empty() || code.len() > 3 || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ModelError::InvalidCode(code.to_string()));
    }
    Ok(())
}

/// Loads a character directory.
pub fn load_character(dir: &Path, code: &str) -> ModelResult<LoadedCharacter> {
    let moveset: Moveset = read_required(&moveset_path(dir, code))?;
    let animations: ClipTable = read_required(&table_path(dir, code, ResourceKind::Animation))?;

    let mut warnings = Vec::new();
    let hitboxes: Option<HitboxTable> =
        read_optional(dir, code, ResourceKind::Hitbox, &mut warnings);
    let cameras: Option<ClipTable> = read_optional(dir, code, ResourceKind::Camera, &mut warnings);

    let resources = ResourceSet {
        code: code.to_string(),
        animations: Some(animations),
        hitboxes,
        cameras,
    };
    info!(
        "Loaded {} moveset ({} entries, {} animations)",
        code,
        moveset.len(),
        resources.len(ResourceKind::Animation)
    );
    Ok(LoadedCharacter {
        character: Character::new(moveset, resources),
        warnings,
    })
}

/// Saves every loaded table of a character under a (possibly new) code.
pub fn save_character(character: &Character, dir: &Path, code: &str) -> ModelResult<()> {
    validate_code(code)?;
    write_json(&moveset_path(dir, code), &character.moveset)?;
    let resources = &character.resources;
    if let Some(table) = &resources.animations {
        write_json(&table_path(dir, code, ResourceKind::Animation), table)?;
    }
    if let Some(table) = &resources.hitboxes {
        write_json(&table_path(dir, code, ResourceKind::Hitbox), table)?;
    }
    if let Some(table) = &resources.cameras {
        write_json(&table_path(dir, code, ResourceKind::Camera), table)?;
    }
    info!("Saved {} moveset to {}", code, dir.display());
    Ok(())
}

fn read_required<T: DeserializeOwned>(path: &Path) -> ModelResult<T> {
    if !path.is_file() {
        return Err(ModelError::NotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path)?;
    serde_json::from_str(&text).map_err(|source| ModelError::Invalid {
        path: path.to_path_buf(),
        source,
    })
}

fn read_optional<T: DeserializeOwned>(
    dir: &Path,
    code: &str,
    kind: ResourceKind,
    warnings: &mut Vec<LoadWarning>,
) -> Option<T> {
    let path = table_path(dir, code, kind);
    let reason = match read_required(&path) {
        Ok(table) => return Some(table),
        Err(ModelError::NotFound(_)) => SkipReason::Missing,
        Err(ModelError::Invalid { source, .. }) => SkipReason::Invalid(source.to_string()),
        Err(err) => SkipReason::Invalid(err.to_string()),
    };
    let warning = LoadWarning { kind, path, reason };
    warn!("{}", warning);
    warnings.push(warning);
    None
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> ModelResult<()> {
    let text = serde_json::to_string_pretty(value)?;
    fs::write(path, text)?;
    debug!("Wrote {}", path.display());
    Ok(())
}
