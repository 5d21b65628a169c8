use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Scene identifiers are opaque strings (UUID v4 when generated by the store).
pub type SceneId = String;

/// Whether scenes live in one flat list or are grouped under campaigns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreMode {
    Flat,
    Grouped,
}

impl StoreMode {
    /// The schema a store in this mode uses unless configured otherwise.
    pub fn default_schema(self) -> SceneSchema {
        match self {
            StoreMode::Flat => SceneSchema::Simple,
            StoreMode::Grouped => SceneSchema::Rich,
        }
    }
}

impl fmt::Display for StoreMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreMode::Flat => f.write_str("flat"),
            StoreMode::Grouped => f.write_str("grouped"),
        }
    }
}

impl FromStr for StoreMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "flat" => Ok(StoreMode::Flat),
            "grouped" => Ok(StoreMode::Grouped),
            other => Err(CoreError::InvalidConfiguration(format!(
                "Unknown store mode '{other}'. Must be one of: flat, grouped"
            ))),
        }
    }
}

/// Which payload shape incoming scenes are validated against.
///
/// - `Simple`: `playlistId` + `soundboardIds`, unknown fields are dropped.
/// - `Rich`: playlist / soundboard descriptors, mute status, OBS scene and
///   lights; unknown fields are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneSchema {
    Simple,
    Rich,
}

impl FromStr for SceneSchema {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "simple" => Ok(SceneSchema::Simple),
            "rich" => Ok(SceneSchema::Rich),
            other => Err(CoreError::InvalidConfiguration(format!(
                "Unknown scene schema '{other}'. Must be one of: simple, rich"
            ))),
        }
    }
}
