//! Hosted account provisioning

use std::sync::Arc;

use tokio::sync::RwLock;

use lnconnect_backend::{BackendConnection, HostedAccountCredentials, Implementation};

use crate::error::CoreError;
use crate::traits::BackendResolver;

/// Observable provisioner state.
#[derive(Debug, Clone, Default)]
pub struct ProvisionerState {
    pub loading: bool,
    pub error: Option<String>,
    /// Credentials from the last successful creation, not yet persisted.
    pub staged: Option<HostedAccountCredentials>,
}

/// Creates accounts on a hosted (custodial) backend.
pub struct AccountProvisioner {
    backend_resolver: Arc<dyn BackendResolver>,
    state: RwLock<ProvisionerState>,
}

impl AccountProvisioner {
    #[must_use]
    pub fn new(backend_resolver: Arc<dyn BackendResolver>) -> Self {
        Self {
            backend_resolver,
            state: RwLock::new(ProvisionerState::default()),
        }
    }

    pub async fn state(&self) -> ProvisionerState {
        self.state.read().await.clone()
    }

    /// Hand over the staged credentials, leaving none behind.
    pub async fn take_staged(&self) -> Option<HostedAccountCredentials> {
        self.state.write().await.staged.take()
    }

    /// Create an account on the hosted backend at `host`.
    ///
    /// On success the credentials are staged and returned. On failure the error message is
    /// recorded in [`ProvisionerState::error`]. Nothing is persisted here.
    pub async fn create_account(
        &self,
        host: &str,
        ssl_verification: bool,
    ) -> Option<HostedAccountCredentials> {
        {
            let mut state = self.state.write().await;
            state.loading = true;
            state.error = None;
        }

        let result = self.create(host, ssl_verification).await;

        let mut state = self.state.write().await;
        state.loading = false;
        match result {
            Ok(credentials) => {
                log::info!("Created hosted account {} on {host}", credentials.login);
                state.staged = Some(credentials.clone());
                Some(credentials)
            }
            Err(e) => {
                if e.is_expected() {
                    log::warn!("Account creation on {host} rejected: {e}");
                } else {
                    log::error!("Account creation on {host} failed: {e}");
                }
                state.error = Some(e.to_string());
                None
            }
        }
    }

    async fn create(
        &self,
        host: &str,
        ssl_verification: bool,
    ) -> Result<HostedAccountCredentials, CoreError> {
        let connection = BackendConnection {
            host: Some(host.to_string()),
            implementation: Implementation::LndHub,
            ssl_verification,
            ..BackendConnection::default()
        };
        let backend = self.backend_resolver.resolve(connection)?;
        backend
            .create_account()
            .await
            .map_err(|e| CoreError::AccountCreation(e.to_string()))
    }
}
