//! The JSON file that holds every scene.
//!
//! The file is the only state. Each read parses it from disk; each mutation
//! loads it, applies a change in memory and writes the whole document back
//! through a temporary sibling that is renamed over the existing file.
//!
//! Mutations inside one process are serialized by `write_lock`, so in-process
//! writers never lose each other's updates. Separate processes sharing the
//! file are not coordinated: the last rename wins.

use std::path::{Path, PathBuf};

use scenebook_core::scene::Document;
use scenebook_core::types::{SceneSchema, StoreMode};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::error::StoreError;

/// File name of the document inside the configured directory.
pub const DOCUMENT_FILENAME: &str = "scenes.json";

#[derive(Debug)]
pub struct DocumentStore {
    path: PathBuf,
    mode: StoreMode,
    schema: SceneSchema,
    write_lock: Mutex<()>,
}

impl DocumentStore {
    /// Describe a store at `<dir>/scenes.json`. Nothing is touched on disk.
    pub fn new(dir: impl AsRef<Path>, mode: StoreMode, schema: SceneSchema) -> Self {
        Self {
            path: dir.as_ref().join(DOCUMENT_FILENAME),
            mode,
            schema,
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mode(&self) -> StoreMode {
        self.mode
    }

    pub fn schema(&self) -> SceneSchema {
        self.schema
    }

    /// Create the document (`[]` or `{}` depending on mode) if it is missing.
    ///
    /// Returns `true` when a new file was written. An existing file is left
    /// alone but must parse and match the configured mode.
    pub async fn bootstrap(&self) -> Result<bool, StoreError> {
        let _guard = self.write_lock.lock().await;

        let exists = tokio::fs::try_exists(&self.path)
            .await
            .map_err(|e| StoreError::io("inspect", &self.path, e))?;
        if exists {
            self.load().await?;
            return Ok(false);
        }

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::io("create directory", parent, e))?;
        }
        self.save(&Document::empty(self.mode)).await?;
        tracing::info!(path = %self.path.display(), mode = %self.mode, "Created empty scene document");
        Ok(true)
    }

    /// Read and parse the whole document.
    pub async fn load(&self) -> Result<Document, StoreError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| StoreError::io("read", &self.path, e))?;

        let document: Document =
            serde_json::from_str(&raw).map_err(|source| StoreError::Malformed {
                path: self.path.clone(),
                source,
            })?;

        if document.mode() != self.mode {
            return Err(StoreError::ModeMismatch {
                path: self.path.clone(),
                expected: self.mode,
                found: document.mode(),
            });
        }
        Ok(document)
    }

    /// Load, apply `operation`, and write the result back.
    ///
    /// Nothing is written if `operation` fails.
    pub(crate) async fn mutate<T, F>(&self, operation: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut Document) -> Result<T, StoreError>,
    {
        let _guard = self.write_lock.lock().await;
        let mut document = self.load().await?;
        let result = operation(&mut document)?;
        self.save(&document).await?;
        Ok(result)
    }

    /// Replace the file with `document`, pretty-printed.
    async fn save(&self, document: &Document) -> Result<(), StoreError> {
        let payload = serde_json::to_string_pretty(document).map_err(StoreError::Encode)?;

        let temp_path = self
            .path
            .with_extension(format!("{}.tmp", Uuid::new_v4().simple()));
        tokio::fs::write(&temp_path, payload)
            .await
            .map_err(|e| StoreError::io("write", &temp_path, e))?;

        if let Err(e) = tokio::fs::rename(&temp_path, &self.path).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(StoreError::io("replace", &self.path, e));
        }
        Ok(())
    }
}
