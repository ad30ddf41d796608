//! The closed set of resource kinds an entry can reference.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A per-character auxiliary table referenced by entries through an index.
///
/// Animation and Camera rows are addressed by position; Hitbox rows carry an
/// explicit, possibly sparse `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Animation,
    Hitbox,
    Camera,
}

impl ResourceKind {
    /// Every kind, in report order.
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::Animation,
        ResourceKind::Hitbox,
        ResourceKind::Camera,
    ];

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ResourceKind::Animation => "Animation",
            ResourceKind::Hitbox => "Hitbox",
            ResourceKind::Camera => "Camera",
        }
    }

    /// Suffix of the native file holding this table, appended to a character code.
    #[must_use]
    pub const fn file_suffix(self) -> &'static str {
        match self {
            ResourceKind::Animation => ".ean",
            ResourceKind::Hitbox => "_PLAYER.bdm",
            ResourceKind::Camera => ".cam.ean",
        }
    }

    /// Native file name of this table for a character code, e.g. `GOK.cam.ean`.
    #[must_use]
    pub fn file_name(self, code: &str) -> String {
        format!("{code}{}", self.file_suffix())
    }

    /// Hitbox and Camera tables may be absent from a character's asset set.
    #[must_use]
    pub const fn is_optional(self) -> bool {
        !matches!(self, ResourceKind::Animation)
    }

    /// Whether rows of this kind carry a display name shown in change reports.
    #[must_use]
    pub const fn has_display_names(self) -> bool {
        matches!(self, ResourceKind::Animation)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ResourceKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "animation" => Ok(ResourceKind::Animation),
            "hitbox" => Ok(ResourceKind::Hitbox),
            "camera" => Ok(ResourceKind::Camera),
            _ => Err(crate::Error::UnknownKind(s.to_string())),
        }
    }
}
