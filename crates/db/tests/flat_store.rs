//! Integration tests for the flat scene store.
//!
//! Exercises `SceneRepo` against a real `scenes.json` in a temporary
//! directory: add, list, remove, ordering, id assignment and error cases.

use assert_matches::assert_matches;
use scenebook_core::error::CoreError;
use scenebook_core::scene::Document;
use scenebook_core::types::{SceneSchema, StoreMode};
use scenebook_db::repositories::SceneRepo;
use scenebook_db::{open_store, DocumentStore, StoreError};
use serde_json::json;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn flat_store() -> (TempDir, DocumentStore) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let store = open_store(dir.path(), StoreMode::Flat, SceneSchema::Simple)
        .await
        .expect("open store");
    (dir, store)
}

fn flat_scenes(document: Document) -> Vec<scenebook_core::scene::Scene> {
    match document {
        Document::Flat(scenes) => scenes,
        Document::Grouped(_) => panic!("expected a flat document"),
    }
}

// ---------------------------------------------------------------------------
// Test: add normalizes the name and assigns an id
// ---------------------------------------------------------------------------

#[tokio::test]
async fn add_to_empty_store_normalizes_and_lists() {
    let (_dir, store) = flat_store().await;

    let scene = SceneRepo::add(&store, None, &json!({ "name": " zone 1 ", "playlistId": "p1" }))
        .await
        .unwrap();

    assert_eq!(scene.name, "ZONE 1");
    assert!(!scene.id.is_empty());
    assert_eq!(scene.payload.playlist_id.as_deref(), Some("p1"));

    let scenes = flat_scenes(SceneRepo::list(&store).await.unwrap());
    assert_eq!(scenes, vec![scene]);
}

// ---------------------------------------------------------------------------
// Test: the file on disk is pretty-printed and matches the listing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn document_on_disk_is_pretty_json() {
    let (_dir, store) = flat_store().await;
    let scene = SceneRepo::add(&store, None, &json!({ "name": "a", "soundboardIds": ["s1"] }))
        .await
        .unwrap();

    let raw = std::fs::read_to_string(store.path()).unwrap();
    assert!(raw.contains("\n  {"), "document should be indented: {raw}");

    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        parsed,
        json!([{ "id": scene.id, "name": "A", "soundboardIds": ["s1"] }])
    );
}

// ---------------------------------------------------------------------------
// Test: listing stays sorted by name and ids stay distinct
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_is_sorted_and_ids_are_distinct() {
    let (_dir, store) = flat_store().await;

    for name in ["zone 2", "arena", "Zone 1", "crypt"] {
        SceneRepo::add(&store, None, &json!({ "name": name, "playlistId": "p" }))
            .await
            .unwrap();
    }

    let scenes = flat_scenes(SceneRepo::list(&store).await.unwrap());
    let names: Vec<_> = scenes.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["ARENA", "CRYPT", "ZONE 1", "ZONE 2"]);

    let mut ids: Vec<_> = scenes.iter().map(|s| s.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 4);
}

// ---------------------------------------------------------------------------
// Test: duplicate names are rejected case/whitespace-insensitively
// ---------------------------------------------------------------------------

#[tokio::test]
async fn duplicate_name_rejected_and_document_unchanged() {
    let (_dir, store) = flat_store().await;
    SceneRepo::add(&store, None, &json!({ "name": "Tavern", "playlistId": "p1" }))
        .await
        .unwrap();
    let before = std::fs::read_to_string(store.path()).unwrap();

    let result = SceneRepo::add(&store, None, &json!({ "name": "  TAVERN ", "playlistId": "p2" })).await;
    assert_matches!(
        result,
        Err(StoreError::Core(CoreError::DuplicateName { name })) if name == "TAVERN"
    );

    assert_eq!(std::fs::read_to_string(store.path()).unwrap(), before);
}

// ---------------------------------------------------------------------------
// Test: empty payloads are rejected
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_scene_rejected() {
    let (_dir, store) = flat_store().await;

    assert_matches!(
        SceneRepo::add(&store, None, &json!({ "name": "X" })).await,
        Err(StoreError::Core(CoreError::Validation(_)))
    );
    assert_matches!(
        SceneRepo::add(&store, None, &json!({ "name": "X", "soundboardIds": [] })).await,
        Err(StoreError::Core(CoreError::Validation(_)))
    );

    assert!(flat_scenes(SceneRepo::list(&store).await.unwrap()).is_empty());
}

// ---------------------------------------------------------------------------
// Test: unrecognized fields are dropped by the simple schema
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_fields_are_not_persisted() {
    let (_dir, store) = flat_store().await;
    let scene = SceneRepo::add(
        &store,
        None,
        &json!({ "name": "x", "playlistId": "p", "id": "forged", "colour": "red" }),
    )
    .await
    .unwrap();

    assert_ne!(scene.id, "forged");
    let raw = std::fs::read_to_string(store.path()).unwrap();
    assert!(!raw.contains("colour"));
    assert!(!raw.contains("forged"));
}

// ---------------------------------------------------------------------------
// Test: remove then remove again
// ---------------------------------------------------------------------------

#[tokio::test]
async fn second_remove_fails_with_unknown_entity() {
    let (_dir, store) = flat_store().await;
    let scene = SceneRepo::add(&store, None, &json!({ "name": "x", "playlistId": "p" }))
        .await
        .unwrap();

    let removed = SceneRepo::remove(&store, None, &scene.id).await.unwrap();
    assert_eq!(removed, scene);
    assert!(flat_scenes(SceneRepo::list(&store).await.unwrap()).is_empty());

    assert_matches!(
        SceneRepo::remove(&store, None, &scene.id).await,
        Err(StoreError::Core(CoreError::UnknownEntity { id, .. })) if id == scene.id
    );
}

// ---------------------------------------------------------------------------
// Test: blank names are rejected before anything is stored
// ---------------------------------------------------------------------------

#[tokio::test]
async fn blank_name_rejected() {
    let (_dir, store) = flat_store().await;

    assert_matches!(
        SceneRepo::add(&store, None, &json!({ "name": "   ", "playlistId": "p" })).await,
        Err(StoreError::Core(CoreError::Validation(msg))) if msg == "name must not be blank"
    );
    assert!(flat_scenes(SceneRepo::list(&store).await.unwrap()).is_empty());
}

// ---------------------------------------------------------------------------
// Test: a campaign scope is meaningless in a flat store
// ---------------------------------------------------------------------------

#[tokio::test]
async fn campaign_scope_rejected_in_flat_store() {
    let (_dir, store) = flat_store().await;
    assert_matches!(
        SceneRepo::add(&store, Some("raid"), &json!({ "name": "x", "playlistId": "p" })).await,
        Err(StoreError::Core(CoreError::UnknownScope(_)))
    );
}

// ---------------------------------------------------------------------------
// Test: concurrent in-process adds do not lose updates
// ---------------------------------------------------------------------------

#[tokio::test]
async fn concurrent_adds_are_all_kept() {
    let (_dir, store) = flat_store().await;
    let store = std::sync::Arc::new(store);

    let mut handles = Vec::new();
    for i in 0..10 {
        let store = std::sync::Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            SceneRepo::add(&store, None, &json!({ "name": format!("scene {i}"), "playlistId": "p" }))
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(flat_scenes(SceneRepo::list(&store).await.unwrap()).len(), 10);
}
