//! On-chain address service

use std::sync::Arc;

use crate::error::CoreResult;

use super::ServiceContext;

/// On-chain address service
pub struct OnChainAddressManager {
    ctx: Arc<ServiceContext>,
}

impl OnChainAddressManager {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Ask the active backend for a fresh receive address and remember it in settings.
    ///
    /// The stored address only changes once the backend has answered and the write
    /// succeeded.
    pub async fn get_new_address(&self) -> CoreResult<String> {
        let backend = self.ctx.active_backend()?;

        let address = backend
            .new_address()
            .await
            .inspect_err(|e| {
                if e.is_expected() {
                    log::warn!("New address request rejected: {e}");
                } else {
                    log::error!("New address request failed: {e}");
                }
            })?
            .address;

        self.ctx
            .profile_store
            .update_settings(|settings| {
                settings.on_chain_address = Some(address.clone());
                Ok(())
            })
            .await?;

        log::info!(
            "New on-chain address from {} backend",
            backend.implementation()
        );
        Ok(address)
    }
}
