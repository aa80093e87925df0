//! `FlagStore` trait — durable home of the onboarding flag.

use async_trait::async_trait;

use crate::error::StoreError;

/// Settings keys used for onboarding persistence.
pub mod settings_keys {
    /// Key of the "has completed onboarding" boolean.
    pub const ONBOARDED: &str = "bankease-onboarded";
}

/// A durable boolean flag that survives process restarts.
///
/// An absent value is not an error: `read` reports it as `false`.
#[async_trait]
pub trait FlagStore: Send + Sync {
    /// Read the flag. Defaults to `false` when it was never written.
    async fn read(&self) -> Result<bool, StoreError>;

    /// Persist the flag.
    async fn write(&self, value: bool) -> Result<(), StoreError>;

    /// Remove the flag entirely, so the next `read` returns `false`.
    async fn clear(&self) -> Result<(), StoreError>;
}
