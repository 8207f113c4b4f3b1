//! Platform-agnostic application bootstrap for lnconnect.
//!
//! Provides `AppState` (service container) and `AppStateBuilder` (adapter injection).

pub mod adapters;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use lnconnect_core::error::{CoreError, CoreResult};
use lnconnect_core::services::{
    AccountProvisioner, CredentialVault, ImporterConfig, NodeProfileStore,
    OnChainAddressManager, RemoteConfigImporter, ServiceContext,
};
use lnconnect_core::traits::{BackendResolver, RestBackendResolver, SecureStore};
use lnconnect_core::types::{Implementation, NodeProfile, Settings};

/// Platform-agnostic application state.
///
/// Every front-end constructs this once at startup via `AppStateBuilder`.
pub struct AppState {
    /// Service context (profile store + backend resolver)
    pub ctx: Arc<ServiceContext>,
    /// Settings and active profile
    pub profile_store: Arc<NodeProfileStore>,
    /// Remote configuration importer
    pub importer: RemoteConfigImporter,
    /// On-chain address service
    pub address_manager: OnChainAddressManager,
    /// Hosted account provisioning
    pub provisioner: AccountProvisioner,
    /// Whether the startup load has completed
    pub startup_completed: AtomicBool,
}

impl AppState {
    /// Load persisted settings. Sets `startup_completed` when done.
    ///
    /// Returns `None` on a first run or when the stored settings could not be used; the
    /// store then starts empty.
    pub async fn run_startup(&self) -> Option<Settings> {
        let settings = self.profile_store.get_settings().await;
        match &settings {
            Some(s) => log::info!("Startup complete: {} node profile(s)", s.nodes.len()),
            None => log::info!("Startup complete: no saved settings"),
        }
        self.startup_completed.store(true, Ordering::SeqCst);
        settings
    }

    /// Fetch a remote configuration and adopt it as the active profile.
    ///
    /// Returns the new profile's index, or `Ok(None)` when the import failed; the reason is
    /// on [`RemoteConfigImporter::last_error`].
    pub async fn import_remote_config(&self, input: &str) -> CoreResult<Option<usize>> {
        let Some(profile) = self.importer.fetch_remote_config(input).await else {
            return Ok(None);
        };
        let index = self.profile_store.add_node(profile, true).await?;
        Ok(Some(index))
    }

    /// Persist the staged hosted-account credentials as a new active LndHub profile.
    ///
    /// The access key is stored as `login:password`; the backend trades it for a session token
    /// before each authenticated call.
    pub async fn adopt_hosted_account(
        &self,
        host: &str,
        ssl_verification: bool,
    ) -> CoreResult<usize> {
        let credentials = self.provisioner.take_staged().await.ok_or_else(|| {
            CoreError::ValidationError("no hosted account credentials staged".to_string())
        })?;

        let profile = NodeProfile {
            host: Some(host.to_string()),
            access_key: Some(format!("{}:{}", credentials.login, credentials.password)),
            implementation: Implementation::LndHub,
            ssl_verification: Some(ssl_verification),
            ..NodeProfile::default()
        };
        let index = self.profile_store.add_node(profile, true).await?;
        log::info!("Adopted hosted account {} as profile {index}", credentials.login);
        Ok(index)
    }
}

/// Builder for constructing `AppState` with platform-specific adapters.
///
/// # Required adapters
/// - `secure_store` - where the settings blob lives
///
/// # Optional
/// - `backend_resolver` - defaults to `RestBackendResolver`
/// - `importer_config` - defaults to `ImporterConfig::default()`
pub struct AppStateBuilder {
    secure_store: Option<Arc<dyn SecureStore>>,
    backend_resolver: Option<Arc<dyn BackendResolver>>,
    importer_config: ImporterConfig,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            secure_store: None,
            backend_resolver: None,
            importer_config: ImporterConfig::default(),
        }
    }

    #[must_use]
    pub fn secure_store(mut self, store: Arc<dyn SecureStore>) -> Self {
        self.secure_store = Some(store);
        self
    }

    #[must_use]
    pub fn backend_resolver(mut self, resolver: Arc<dyn BackendResolver>) -> Self {
        self.backend_resolver = Some(resolver);
        self
    }

    #[must_use]
    pub fn importer_config(mut self, config: ImporterConfig) -> Self {
        self.importer_config = config;
        self
    }

    /// Build the `AppState`.
    ///
    /// # Errors
    /// Returns `CoreError::ValidationError` if required adapters are missing.
    pub fn build(self) -> CoreResult<AppState> {
        let secure_store = self
            .secure_store
            .ok_or_else(|| CoreError::ValidationError("secure_store is required".to_string()))?;
        let backend_resolver = self
            .backend_resolver
            .unwrap_or_else(|| Arc::new(RestBackendResolver));

        let profile_store = Arc::new(NodeProfileStore::new(CredentialVault::new(secure_store)));
        let ctx = Arc::new(ServiceContext::new(
            Arc::clone(&profile_store),
            Arc::clone(&backend_resolver),
        ));

        let importer = RemoteConfigImporter::new(self.importer_config)?;
        let address_manager = OnChainAddressManager::new(Arc::clone(&ctx));
        let provisioner = AccountProvisioner::new(backend_resolver);

        Ok(AppState {
            ctx,
            profile_store,
            importer,
            address_manager,
            provisioner,
            startup_completed: AtomicBool::new(false),
        })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
