//! Persistence layer — the onboarding flag and its backends.

pub mod json_file;
pub mod memory;
pub mod traits;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::error::Result;

pub use json_file::JsonFileStore;
pub use memory::MemoryFlagStore;
pub use traits::{FlagStore, settings_keys};

/// Open the store selected by `config`. The settings directory is created
/// up front so an unusable state path fails at startup, not on first write.
pub async fn open(config: &AppConfig) -> Result<Arc<dyn FlagStore>> {
    if config.ephemeral {
        return Ok(Arc::new(MemoryFlagStore::new()));
    }
    let store = JsonFileStore::new(config.state_path.clone());
    store.ensure_parent().await?;
    Ok(Arc::new(store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, StoreError};
    use tempfile::TempDir;

    #[tokio::test]
    async fn ephemeral_config_opens_memory_store() {
        let config = AppConfig {
            ephemeral: true,
            state_path: "/nonexistent/never-created/bankease.json".into(),
            ..AppConfig::default()
        };
        let store = open(&config).await.unwrap();
        assert!(!store.read().await.unwrap());
        assert!(!config.state_path.exists());
    }

    #[tokio::test]
    async fn file_store_creates_state_directory() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig {
            state_path: dir.path().join("data").join("bankease.json"),
            ..AppConfig::default()
        };
        let store = open(&config).await.unwrap();
        assert!(dir.path().join("data").is_dir());

        store.write(true).await.unwrap();
        assert!(store.read().await.unwrap());
    }

    #[tokio::test]
    async fn unusable_state_path_is_a_store_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let config = AppConfig {
            state_path: blocker.join("bankease.json"),
            ..AppConfig::default()
        };

        let err = open(&config).await.err().unwrap();
        assert!(matches!(err, Error::Store(StoreError::Io { .. })));
    }
}
