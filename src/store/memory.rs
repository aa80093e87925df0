//! In-process flag store for tests and ephemeral runs.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::traits::FlagStore;
use crate::error::StoreError;

/// Keeps the flag in memory. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryFlagStore {
    value: RwLock<Option<bool>>,
}

impl MemoryFlagStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the flag already written.
    pub fn with_value(value: bool) -> Self {
        Self {
            value: RwLock::new(Some(value)),
        }
    }

    /// Raw stored value, `None` when cleared or never written.
    pub async fn raw(&self) -> Option<bool> {
        *self.value.read().await
    }
}

#[async_trait]
impl FlagStore for MemoryFlagStore {
    async fn read(&self) -> Result<bool, StoreError> {
        Ok(self.value.read().await.unwrap_or(false))
    }

    async fn write(&self, value: bool) -> Result<(), StoreError> {
        *self.value.write().await = Some(value);
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        *self.value.write().await = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn absent_reads_false() {
        let store = MemoryFlagStore::new();
        assert!(!store.read().await.unwrap());
        assert_eq!(store.raw().await, None);
    }

    #[tokio::test]
    async fn write_then_clear() {
        let store = MemoryFlagStore::new();
        store.write(true).await.unwrap();
        assert!(store.read().await.unwrap());

        store.clear().await.unwrap();
        assert!(!store.read().await.unwrap());
        assert_eq!(store.raw().await, None);
    }

    #[tokio::test]
    async fn with_value_seeds_flag() {
        let store = MemoryFlagStore::with_value(true);
        assert!(store.read().await.unwrap());
    }
}
