//! Repository for scenes, in either a flat or a grouped store.
//!
//! `scope` is `None` for a flat store and the campaign name for a grouped
//! store. Passing the wrong kind of scope for the store's mode is an error.

use scenebook_core::error::CoreError;
use scenebook_core::naming::normalize;
use scenebook_core::scene::{sort_scenes, Document, Scene};
use scenebook_core::types::SceneId;
use scenebook_core::validation;
use serde_json::Value;
use uuid::Uuid;

use crate::error::StoreError;
use crate::repositories::campaign_repo::contains_campaign;
use crate::store::DocumentStore;

/// Provides list / add / remove for scenes.
pub struct SceneRepo;

impl SceneRepo {
    /// The whole document as stored (each scope already sorted by name).
    pub async fn list(store: &DocumentStore) -> Result<Document, StoreError> {
        store.load().await
    }

    /// Validate `candidate`, give it a fresh id and store it in `scope`.
    pub async fn add(
        store: &DocumentStore,
        scope: Option<&str>,
        candidate: &Value,
    ) -> Result<Scene, StoreError> {
        let schema = store.schema();

        let scene = store
            .mutate(|document| {
                let id = fresh_id(document);
                let scenes = resolve_scope(document, scope)?;
                let scene = validation::validate(candidate, schema, scenes)?.into_scene(id);
                scenes.push(scene.clone());
                sort_scenes(scenes);
                Ok(scene)
            })
            .await?;

        tracing::info!(
            scene_id = %scene.id,
            name = %scene.name,
            scope = ?scope,
            "Scene created"
        );
        Ok(scene)
    }

    /// Remove the scene with `id` from `scope`, returning what was removed.
    pub async fn remove(
        store: &DocumentStore,
        scope: Option<&str>,
        id: &str,
    ) -> Result<Scene, StoreError> {
        let removed = store
            .mutate(|document| {
                let scenes = resolve_scope(document, scope)?;
                let position = scenes.iter().position(|scene| scene.id == id).ok_or_else(|| {
                    CoreError::UnknownEntity {
                        entity: "scene",
                        id: id.to_string(),
                    }
                })?;
                Ok(scenes.remove(position))
            })
            .await?;

        tracing::info!(
            scene_id = %removed.id,
            name = %removed.name,
            scope = ?scope,
            "Scene removed"
        );
        Ok(removed)
    }
}

/// Resolve the scene list a scope refers to.
///
/// In a grouped store the campaign must already exist; it is never created
/// implicitly.
fn resolve_scope<'a>(
    document: &'a mut Document,
    scope: Option<&str>,
) -> Result<&'a mut Vec<Scene>, CoreError> {
    if let Some(name) = scope {
        if !contains_campaign(document, name) {
            return Err(CoreError::UnknownScope(name.to_string()));
        }
    }

    match (document, scope) {
        (Document::Flat(scenes), None) => Ok(scenes),
        (Document::Flat(_), Some(name)) => Err(CoreError::UnknownScope(name.to_string())),
        (Document::Grouped(campaigns), Some(name)) => campaigns
            .get_mut(&normalize(name))
            .ok_or_else(|| CoreError::UnknownScope(name.to_string())),
        (Document::Grouped(_), None) => Err(CoreError::Validation(
            "a campaign name is required".to_string(),
        )),
    }
}

/// A UUID v4 not already used anywhere in the document.
fn fresh_id(document: &Document) -> SceneId {
    loop {
        let id = Uuid::new_v4().to_string();
        if !document.scenes().any(|scene| scene.id == id) {
            return id;
        }
    }
}
