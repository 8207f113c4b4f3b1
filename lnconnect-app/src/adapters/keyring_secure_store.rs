//! Keyring-based secure store.
//!
//! Uses the system keychain (macOS Keychain, Windows Credential Manager,
//! Linux Secret Service) via the `keyring` crate.

use async_trait::async_trait;
use keyring::Entry;

use lnconnect_core::error::{CoreError, CoreResult};
use lnconnect_core::traits::{Accessibility, SecureStore};

const DEFAULT_SERVICE_NAME: &str = "lnconnect";

/// Keyring-based secure store.
///
/// Each key maps to one keychain entry under the store's service name. Desktop keychains
/// have no per-entry accessibility class, so `Accessibility` is accepted and ignored.
pub struct KeyringSecureStore {
    service: String,
}

impl KeyringSecureStore {
    pub fn new() -> Self {
        Self::with_service(DEFAULT_SERVICE_NAME)
    }

    /// Store entries under a custom keychain service name.
    pub fn with_service(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    fn get_entry(service: &str, key: &str) -> CoreResult<Entry> {
        Entry::new(service, key).map_err(|e| CoreError::StorageUnavailable(e.to_string()))
    }

    fn read_sync(service: &str, key: &str) -> CoreResult<Option<String>> {
        let entry = Self::get_entry(service, key)?;
        match entry.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(CoreError::StorageUnavailable(e.to_string())),
        }
    }

    fn write_sync(service: &str, key: &str, value: &str) -> CoreResult<()> {
        let entry = Self::get_entry(service, key)?;
        entry
            .set_password(value)
            .map_err(|e| CoreError::StorageUnavailable(e.to_string()))
    }
}

impl Default for KeyringSecureStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SecureStore for KeyringSecureStore {
    async fn get(&self, key: &str) -> CoreResult<Option<String>> {
        let service = self.service.clone();
        let key = key.to_string();
        tokio::task::spawn_blocking(move || {
            log::debug!("Reading '{key}' from Keychain");
            Self::read_sync(&service, &key)
        })
        .await
        .map_err(|e| CoreError::StorageUnavailable(format!("Task join error: {e}")))?
    }

    async fn set(&self, key: &str, value: &str, accessibility: Accessibility) -> CoreResult<()> {
        let service = self.service.clone();
        let key = key.to_string();
        let value = value.to_string();
        log::debug!("Writing '{key}' to Keychain ({accessibility:?})");
        tokio::task::spawn_blocking(move || Self::write_sync(&service, &key, &value))
            .await
            .map_err(|e| CoreError::StorageUnavailable(format!("Task join error: {e}")))??;
        Ok(())
    }
}
