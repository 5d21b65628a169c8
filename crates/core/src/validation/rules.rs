//! Structural rules for incoming scenes, one input type per schema.
//!
//! Shape is enforced in two passes: serde rejects wrong types, missing
//! required fields, bad enum values and (rich schema) unknown fields; the
//! `validator` derive then checks lengths, counts and volume ranges.

use serde::Deserialize;
use serde_json::Value;
use validator::{Validate, ValidationErrors};

use crate::error::CoreError;
use crate::naming::normalize;
use crate::scene::{
    DiscordMuteStatus, Lights, Playlist, ScenePayload, Soundboard, MAX_TEXT_LEN,
};
use crate::types::SceneSchema;

/// Rich-schema scene input. Unknown fields are an error at every level.
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct RichSceneInput {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
    #[validate(nested)]
    pub playlist: Option<Playlist>,
    #[validate(
        length(min = 1, max = 100, message = "soundboards must hold 1-100 entries"),
        nested
    )]
    pub soundboards: Option<Vec<Soundboard>>,
    pub discord_mute_status: Option<DiscordMuteStatus>,
    #[validate(length(min = 1, max = 100, message = "obsScene must be 1-100 characters"))]
    pub obs_scene: Option<String>,
    pub lights: Option<Lights>,
}

/// Simple-schema scene input. Fields other than these are ignored.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SimpleSceneInput {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
    pub playlist_id: Option<String>,
    #[validate(length(min = 1, max = 100, message = "soundboardIds must hold 1-100 entries"))]
    pub soundboard_ids: Option<Vec<String>>,
}

impl RichSceneInput {
    fn into_parts(self) -> (String, ScenePayload) {
        let payload = ScenePayload {
            playlist: self.playlist,
            soundboards: self.soundboards,
            discord_mute_status: self.discord_mute_status,
            obs_scene: self.obs_scene,
            lights: self.lights,
            ..Default::default()
        };
        (self.name, payload)
    }
}

impl SimpleSceneInput {
    fn into_parts(self) -> (String, ScenePayload) {
        let payload = ScenePayload {
            playlist_id: self.playlist_id,
            soundboard_ids: self.soundboard_ids,
            ..Default::default()
        };
        (self.name, payload)
    }
}

/// Check a candidate's structure against `schema`.
///
/// Returns the raw (not yet normalized) name and the recognized payload.
/// The name must still be non-empty once normalized.
pub fn check_shape(
    candidate: &Value,
    schema: SceneSchema,
) -> Result<(String, ScenePayload), CoreError> {
    if !candidate.is_object() {
        return Err(CoreError::Validation(
            "scene must be a JSON object".to_string(),
        ));
    }

    let (name, payload) = match schema {
        SceneSchema::Rich => {
            reject_nulls(candidate, "")?;
            let input = RichSceneInput::deserialize(candidate).map_err(shape_error)?;
            input.validate().map_err(rule_error)?;
            input.into_parts()
        }
        SceneSchema::Simple => {
            let input = SimpleSceneInput::deserialize(candidate).map_err(shape_error)?;
            input.validate().map_err(rule_error)?;
            if let Some(ids) = &input.soundboard_ids {
                check_soundboard_ids(ids)?;
            }
            input.into_parts()
        }
    };

    if normalize(&name).is_empty() {
        return Err(CoreError::Validation("name must not be blank".to_string()));
    }
    Ok((name, payload))
}

/// Every rich field is typed, so an explicit `null` is rejected wherever it
/// appears, optional fields included.
fn reject_nulls(value: &Value, path: &str) -> Result<(), CoreError> {
    match value {
        Value::Null => Err(CoreError::Validation(format!("{path} must not be null"))),
        Value::Object(fields) => {
            for (key, field) in fields {
                let child = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}.{key}")
                };
                reject_nulls(field, &child)?;
            }
            Ok(())
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                reject_nulls(item, &format!("{path}[{index}]"))?;
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Reject a payload with nothing in it.
pub fn check_not_empty(payload: &ScenePayload, schema: SceneSchema) -> Result<(), CoreError> {
    if !payload.is_empty() {
        return Ok(());
    }
    let fields = match schema {
        SceneSchema::Rich => "playlist, soundboards, discordMuteStatus, obsScene, lights",
        SceneSchema::Simple => "playlistId, soundboardIds",
    };
    Err(CoreError::Validation(format!(
        "empty scene: at least one of {fields} must be set"
    )))
}

/// Each soundboard id must be 1-100 characters.
fn check_soundboard_ids(ids: &[String]) -> Result<(), CoreError> {
    for (index, id) in ids.iter().enumerate() {
        let len = id.chars().count() as u64;
        if len == 0 || len > MAX_TEXT_LEN {
            return Err(CoreError::Validation(format!(
                "soundboardIds[{index}] must be 1-{MAX_TEXT_LEN} characters"
            )));
        }
    }
    Ok(())
}

fn shape_error(err: serde_json::Error) -> CoreError {
    CoreError::Validation(err.to_string())
}

fn rule_error(errors: ValidationErrors) -> CoreError {
    CoreError::Validation(errors.to_string())
}
