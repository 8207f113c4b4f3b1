//! Credential vault
//!
//! Durable persistence of the single settings blob through the platform secure store.

use std::sync::Arc;

use crate::error::CoreResult;
use crate::traits::{Accessibility, SecureStore};

/// Fixed key of the settings blob in the secure store.
pub const SETTINGS_KEY: &str = "lnconnect-settings";

/// Credential vault
pub struct CredentialVault {
    secure_store: Arc<dyn SecureStore>,
}

impl CredentialVault {
    #[must_use]
    pub fn new(secure_store: Arc<dyn SecureStore>) -> Self {
        Self { secure_store }
    }

    /// Load the raw blob.
    ///
    /// `Ok(None)` is a first run. `Err` means the keystore could not be read and says
    /// nothing about whether settings exist.
    pub async fn load(&self) -> CoreResult<Option<String>> {
        match self.secure_store.get(SETTINGS_KEY).await {
            Ok(Some(raw)) => {
                log::debug!("Loaded settings blob ({} bytes)", raw.len());
                Ok(Some(raw))
            }
            Ok(None) => {
                log::info!("No settings stored");
                Ok(None)
            }
            Err(e) => {
                log::error!("Keystore couldn't be accessed: {e}");
                Err(e)
            }
        }
    }

    /// Replace the stored blob.
    pub async fn save(&self, raw: &str) -> CoreResult<()> {
        self.secure_store
            .set(SETTINGS_KEY, raw, Accessibility::WhenUnlocked)
            .await
            .inspect_err(|e| log::error!("Failed to write settings blob: {e}"))?;
        log::debug!("Saved settings blob ({} bytes)", raw.len());
        Ok(())
    }
}
