//! Business logic services

mod account_provisioner;
mod credential_vault;
mod node_profile_store;
mod on_chain_address_manager;
mod remote_config_importer;

use std::sync::Arc;

use lnconnect_backend::NodeBackend;

pub use account_provisioner::{AccountProvisioner, ProvisionerState};
pub use credential_vault::{CredentialVault, SETTINGS_KEY};
pub use node_profile_store::NodeProfileStore;
pub use on_chain_address_manager::OnChainAddressManager;
pub use remote_config_importer::{ImporterConfig, RemoteConfigImporter};

use crate::error::{CoreError, CoreResult};
use crate::traits::BackendResolver;

/// Service context - holds the dependencies shared by services that talk to the active node
pub struct ServiceContext {
    pub profile_store: Arc<NodeProfileStore>,
    pub backend_resolver: Arc<dyn BackendResolver>,
}

impl ServiceContext {
    #[must_use]
    pub fn new(
        profile_store: Arc<NodeProfileStore>,
        backend_resolver: Arc<dyn BackendResolver>,
    ) -> Self {
        Self {
            profile_store,
            backend_resolver,
        }
    }

    /// Backend client for the active profile.
    pub fn active_backend(&self) -> CoreResult<Arc<dyn NodeBackend>> {
        let active = self
            .profile_store
            .active_profile()
            .ok_or(CoreError::NoActiveProfile)?;
        self.backend_resolver.resolve(active.connection())
    }
}
