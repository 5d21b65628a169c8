//! Scene data model and the persisted document shape.
//!
//! A [`Scene`] is stored exactly as serialized here: camelCase keys, absent
//! payload fields omitted. The [`Document`] is either a flat list of scenes
//! or a map of campaign name to scene list, matching [`StoreMode`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{SceneId, StoreMode};

/// Maximum length for names, ids and titles.
pub const MAX_TEXT_LEN: u64 = 100;

// ---------------------------------------------------------------------------
// Payload descriptors
// ---------------------------------------------------------------------------

/// How a playlist repeats once it reaches the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatMode {
    Playlist,
    Track,
    Off,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct Playlist {
    #[validate(length(min = 1, max = 100, message = "playlist id must be 1-100 characters"))]
    pub id: String,
    #[validate(length(min = 1, max = 100, message = "playlist title must be 1-100 characters"))]
    pub title: String,
    pub repeat: RepeatMode,
    pub shuffle: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muted: Option<bool>,
    #[validate(range(min = 0.0, max = 1.0, message = "playlist volume must be between 0 and 1"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct Soundboard {
    #[validate(length(min = 1, max = 100, message = "soundboard id must be 1-100 characters"))]
    pub id: String,
    #[validate(length(min = 1, max = 100, message = "soundboard title must be 1-100 characters"))]
    pub title: String,
    #[serde(rename = "loop")]
    pub looped: bool,
    #[validate(range(min = 0.0, max = 1.0, message = "soundboard volume must be between 0 and 1"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiscordMuteStatus {
    pub muted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct Lights {
    pub scene_id: String,
    pub transition_speed: String,
}

/// Everything a scene references besides its identity.
///
/// Rich-schema scenes use the first five fields, simple-schema scenes use
/// `playlist_id` / `soundboard_ids`. At least one field must be non-empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playlist: Option<Playlist>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soundboards: Option<Vec<Soundboard>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discord_mute_status: Option<DiscordMuteStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obs_scene: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lights: Option<Lights>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playlist_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soundboard_ids: Option<Vec<String>>,
}

impl ScenePayload {
    /// True when no payload field carries anything.
    ///
    /// Empty strings and empty lists count as absent.
    pub fn is_empty(&self) -> bool {
        self.playlist.is_none()
            && self.soundboards.as_ref().map_or(true, Vec::is_empty)
            && self.discord_mute_status.is_none()
            && self.obs_scene.as_deref().map_or(true, str::is_empty)
            && self.lights.is_none()
            && self.playlist_id.as_deref().map_or(true, str::is_empty)
            && self.soundboard_ids.as_ref().map_or(true, Vec::is_empty)
    }
}

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

/// A stored scene. `name` is always in normalized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub id: SceneId,
    pub name: String,
    #[serde(flatten)]
    pub payload: ScenePayload,
}

/// Returned when a campaign is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub campaign_name: String,
}

/// Sort a scope's scenes by name.
///
/// The sort is stable so scenes with equal names keep insertion order.
pub fn sort_scenes(scenes: &mut [Scene]) {
    scenes.sort_by(|a, b| a.name.cmp(&b.name));
}

// ---------------------------------------------------------------------------
// Persisted document
// ---------------------------------------------------------------------------

/// The whole persisted file.
///
/// Serialized untagged: a JSON array is a flat store, a JSON object is a
/// grouped store keyed by normalized campaign name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Document {
    Flat(Vec<Scene>),
    Grouped(BTreeMap<String, Vec<Scene>>),
}

impl Document {
    /// An empty document for the given mode (`[]` or `{}`).
    pub fn empty(mode: StoreMode) -> Self {
        match mode {
            StoreMode::Flat => Document::Flat(Vec::new()),
            StoreMode::Grouped => Document::Grouped(BTreeMap::new()),
        }
    }

    pub fn mode(&self) -> StoreMode {
        match self {
            Document::Flat(_) => StoreMode::Flat,
            Document::Grouped(_) => StoreMode::Grouped,
        }
    }

    /// Iterate over every scene in the document regardless of scope.
    pub fn scenes(&self) -> Box<dyn Iterator<Item = &Scene> + '_> {
        match self {
            Document::Flat(scenes) => Box::new(scenes.iter()),
            Document::Grouped(campaigns) => Box::new(campaigns.values().flatten()),
        }
    }
}
