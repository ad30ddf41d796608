//! Display labels for well-known entry indices.
//!
//! Labels only affect report text and the animation name filter; an index
//! without a label is shown as [`UNKNOWN_LABEL`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Label used for indices with no known meaning.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Compiled-in labels for the standard player entry layout.
pub fn known_label(index: u32) -> Option<&'static str> {
    let label = match index {
        0 => "STANCE",
        1 => "WALK_FORWARD",
        2 => "WALK_BACKWARD",
        3 => "WALK_LEFT",
        4 => "WALK_RIGHT",
        10 => "DASH",
        11 => "DASH_END",
        20 => "JUMP",
        21 => "JUMP_FALL",
        22 => "LAND",
        40 => "GUARD",
        41 => "GUARD_HIT",
        50 => "HIT_LIGHT",
        51 => "HIT_HEAVY",
        60 => "KNOCKDOWN",
        61 => "GET_UP",
        300 => "LIGHT_1",
        301 => "LIGHT_2",
        302 => "LIGHT_3",
        303 => "LIGHT_4",
        304 => "LIGHT_5",
        310 => "LIGHT_STRONG_1",
        311 => "LIGHT_STRONG_2",
        312 => "LIGHT_STRONG_3",
        320 => "CHARGE_70",
        321 => "CHARGE_85",
        322 => "CHARGE_100",
        325 => "CHARGE_FOLLOWUP",
        330 => "STRONG_1",
        335 => "STRONG_2",
        336 => "STRONG_3",
        337 => "STRONG_4",
        338 => "STRONG_5",
        340 => "LIGHT_6",
        341 => "LIGHT_7",
        342 => "LIGHT_8",
        343 => "LIGHT_9",
        350 => "STRONG_LIGHT_1",
        351 => "STRONG_LIGHT_2",
        352 => "STRONG_LIGHT_3",
        _ => return None,
    };
    Some(label)
}

/// Combo chart of the standard layout: input sequence and the entries it plays.
pub const COMBO_CHART: &str = "\
# Light Attacks

Base Combo = LC  LC  LC  LC  LC  LC  LC  LC  LC
Base Combo = 300 301 302 303 304 340 341 342 343

Combo 1 = LC  LC  LC  LC  LC  RC  RC  RC
Combo 1 = 300 301 302 303 304 310 311 312

Combo 2 = LC  RC(HOLD)                     RC
Combo 2 = 300 320(70%),321(85%),322(100%)  325

# Strong Attacks

Combo 1 = RC  RC  RC  RC  RC
Combo 1 = 330 335 336 337 338

Combo 2 = RC  LC  LC  LC  LC
Combo 2 = 330 340 341 342 343

Combo 3 = RC  LC  RC  LC  RC
Combo 3 = 330 340 350 351 352
";

/// Entry labels: configured overrides on top of the compiled-in table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryLabels {
    overrides: BTreeMap<u32, String>,
}

impl EntryLabels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a label.
    pub fn with_label(mut self, index: u32, label: impl Into<String>) -> Self {
        self.overrides.insert(index, label.into());
        self
    }

    /// Label for an entry index, falling back to [`UNKNOWN_LABEL`].
    pub fn label(&self, index: u32) -> &str {
        self.overrides
            .get(&index)
            .map(String::as_str)
            .or_else(|| known_label(index))
            .unwrap_or(UNKNOWN_LABEL)
    }

    /// `"300: LIGHT_1"` style text for entry lists.
    pub fn describe(&self, index: u32) -> String {
        format!("{index}: {}", self.label(index))
    }
}
