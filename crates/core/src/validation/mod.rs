//! Scene validation.
//!
//! [`validate`] runs the checks in a fixed order and stops at the first
//! failure:
//!
//! 1. shape ([`rules::check_shape`])
//! 2. content ([`rules::check_not_empty`])
//! 3. uniqueness within the target scope ([`conflict::ensure_unique_name`])
//!
//! No I/O happens here; the caller passes in the scope's current scenes.

pub mod conflict;
pub mod rules;

use serde_json::Value;

use crate::error::CoreError;
use crate::naming::normalize;
use crate::scene::{Scene, ScenePayload};
use crate::types::{SceneId, SceneSchema};

/// A candidate that passed every check, waiting for an id.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedScene {
    /// Normalized name.
    pub name: String,
    pub payload: ScenePayload,
}

impl ValidatedScene {
    pub fn into_scene(self, id: SceneId) -> Scene {
        Scene {
            id,
            name: self.name,
            payload: self.payload,
        }
    }
}

/// Validate `candidate` against `schema` and the scenes already in `scope`.
pub fn validate(
    candidate: &Value,
    schema: SceneSchema,
    scope: &[Scene],
) -> Result<ValidatedScene, CoreError> {
    let (raw_name, payload) = rules::check_shape(candidate, schema)?;
    rules::check_not_empty(&payload, schema)?;
    conflict::ensure_unique_name(scope, &raw_name)?;

    Ok(ValidatedScene {
        name: normalize(&raw_name),
        payload,
    })
}
