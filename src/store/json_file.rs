//! JSON settings document on disk.
//!
//! The document is a flat JSON object. Only the onboarding key is owned by
//! this store; any other keys already in the file are preserved on write.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::fs;
use tracing::{debug, warn};

use super::traits::{FlagStore, settings_keys};
use crate::error::StoreError;

/// File-backed flag store.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the document at `path`. The file is created
    /// lazily on the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }

    /// Load the settings document. A missing file is an empty document.
    async fn load(&self) -> Result<Map<String, Value>, StoreError> {
        let text = match fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(self.io_error(e)),
        };
        if text.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str::<Value>(&text)? {
            Value::Object(map) => Ok(map),
            other => Err(StoreError::Malformed(format!(
                "expected a JSON object in {}, found {}",
                self.path.display(),
                type_name(&other)
            ))),
        }
    }

    /// Load the document for modification. An unparseable document is
    /// replaced by an empty one so the next save repairs the file; the flag
    /// reports whether that happened.
    async fn load_for_update(&self) -> Result<(Map<String, Value>, bool), StoreError> {
        match self.load().await {
            Ok(doc) => Ok((doc, false)),
            Err(e @ (StoreError::Serialization(_) | StoreError::Malformed(_))) => {
                warn!(
                    path = %self.path.display(),
                    "Discarding unreadable settings document: {}", e
                );
                Ok((Map::new(), true))
            }
            Err(e) => Err(e),
        }
    }

    /// Create the directory that will hold the document.
    pub async fn ensure_parent(&self) -> Result<(), StoreError> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
                .await
                .map_err(|e| self.io_error(e)),
            _ => Ok(()),
        }
    }

    /// Write the document to a sibling temp file, then rename it into place.
    async fn save(&self, doc: &Map<String, Value>) -> Result<(), StoreError> {
        self.ensure_parent().await?;
        let body = serde_json::to_string_pretty(doc)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, body).await.map_err(|e| self.io_error(e))?;
        fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| self.io_error(e))?;
        Ok(())
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[async_trait]
impl FlagStore for JsonFileStore {
    async fn read(&self) -> Result<bool, StoreError> {
        let doc = self.load().await?;
        let value = match doc.get(settings_keys::ONBOARDED) {
            Some(Value::Bool(b)) => *b,
            // Older documents stored the flag as the string "true".
            Some(Value::String(s)) => s == "true",
            _ => false,
        };
        debug!(path = %self.path.display(), onboarded = value, "Read onboarding flag");
        Ok(value)
    }

    async fn write(&self, value: bool) -> Result<(), StoreError> {
        let (mut doc, _) = self.load_for_update().await?;
        doc.insert(settings_keys::ONBOARDED.to_string(), Value::Bool(value));
        self.save(&doc).await
    }

    async fn clear(&self) -> Result<(), StoreError> {
        let (mut doc, discarded) = self.load_for_update().await?;
        if doc.remove(settings_keys::ONBOARDED).is_none() && !discarded {
            return Ok(());
        }
        self.save(&doc).await
    }
}
