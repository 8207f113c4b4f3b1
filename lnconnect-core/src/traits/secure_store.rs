//! Secure storage abstraction trait

use async_trait::async_trait;

use crate::error::CoreResult;

/// When an entry may be read back by the platform keystore.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Accessibility {
    /// Readable only while the device is unlocked.
    #[default]
    WhenUnlocked,
    /// Readable after the first unlock following a reboot.
    AfterFirstUnlock,
}

/// Secure key/value store trait
///
/// Platform implementation:
/// - Desktop: `KeyringSecureStore` (keyring crate, in `lnconnect-app`)
/// - Tests: in-memory mocks
///
/// `get` returning `Ok(None)` means the key was never written. Any failure to reach the
/// keystore must be an `Err(CoreError::StorageUnavailable)`, never `Ok(None)`.
#[async_trait]
pub trait SecureStore: Send + Sync {
    /// Read a value.
    ///
    /// # Returns
    /// * `Ok(Some(value))` - entry exists
    /// * `Ok(None)` - entry does not exist
    async fn get(&self, key: &str) -> CoreResult<Option<String>>;

    /// Write a value, replacing any previous one.
    async fn set(&self, key: &str, value: &str, accessibility: Accessibility) -> CoreResult<()>;
}
