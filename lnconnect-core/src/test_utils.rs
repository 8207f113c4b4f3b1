//! Test helper module
//!
//! Provides mock implementations and convenient test factory methods.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use lnconnect_backend::{
    BackendConnection, BackendError, HostedAccountCredentials, Implementation, NewAddress,
    NodeBackend,
};
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::services::{CredentialVault, NodeProfileStore, ServiceContext, SETTINGS_KEY};
use crate::traits::{Accessibility, BackendResolver, SecureStore};
use crate::types::{NodeProfile, Settings};

// ===== MockSecureStore =====

pub struct MockSecureStore {
    entries: RwLock<HashMap<String, String>>,
    /// If Some, `get` returns this storage error
    get_error: RwLock<Option<String>>,
    /// If Some, `set` returns this storage error
    set_error: RwLock<Option<String>>,
    /// Artificial latency applied to every `set`
    set_delay: RwLock<Option<Duration>>,
    /// Every value written, in write order
    writes: RwLock<Vec<String>>,
}

impl MockSecureStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            get_error: RwLock::new(None),
            set_error: RwLock::new(None),
            set_delay: RwLock::new(None),
            writes: RwLock::new(Vec::new()),
        }
    }

    pub async fn put_raw(&self, raw: &str) {
        self.entries
            .write()
            .await
            .insert(SETTINGS_KEY.to_string(), raw.to_string());
    }

    pub async fn raw(&self) -> Option<String> {
        self.entries.read().await.get(SETTINGS_KEY).cloned()
    }

    pub async fn stored_settings(&self) -> Option<Settings> {
        let raw = self.raw().await?;
        Settings::from_json(&raw).ok()
    }

    pub async fn set_get_error(&self, err: Option<String>) {
        *self.get_error.write().await = err;
    }

    pub async fn set_set_error(&self, err: Option<String>) {
        *self.set_error.write().await = err;
    }

    pub async fn set_set_delay(&self, delay: Option<Duration>) {
        *self.set_delay.write().await = delay;
    }

    pub async fn write_count(&self) -> usize {
        self.writes.read().await.len()
    }
}

#[async_trait]
impl SecureStore for MockSecureStore {
    async fn get(&self, key: &str) -> CoreResult<Option<String>> {
        if let Some(ref msg) = *self.get_error.read().await {
            return Err(CoreError::StorageUnavailable(msg.clone()));
        }
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str, accessibility: Accessibility) -> CoreResult<()> {
        assert_eq!(accessibility, Accessibility::WhenUnlocked);
        let delay = *self.set_delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(ref msg) = *self.set_error.read().await {
            return Err(CoreError::StorageUnavailable(msg.clone()));
        }
        self.writes.write().await.push(value.to_string());
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ===== MockBackend =====

pub struct MockBackend {
    implementation: Implementation,
    address: Mutex<Result<String, BackendError>>,
    account: Mutex<Result<HostedAccountCredentials, BackendError>>,
    pub new_address_calls: AtomicUsize,
    pub create_account_calls: AtomicUsize,
}

impl MockBackend {
    pub fn new(implementation: Implementation) -> Self {
        Self {
            implementation,
            address: Mutex::new(Ok("bc1qmockaddress".to_string())),
            account: Mutex::new(Ok(HostedAccountCredentials {
                login: "mock-login".to_string(),
                password: "mock-password".to_string(),
            })),
            new_address_calls: AtomicUsize::new(0),
            create_account_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_address(self, address: Result<String, BackendError>) -> Self {
        *self.address.lock().unwrap_or_else(std::sync::PoisonError::into_inner) = address;
        self
    }

    pub fn with_account(self, account: Result<HostedAccountCredentials, BackendError>) -> Self {
        self.set_account(account);
        self
    }

    pub fn set_account(&self, account: Result<HostedAccountCredentials, BackendError>) {
        *self.account.lock().unwrap_or_else(std::sync::PoisonError::into_inner) = account;
    }
}

#[async_trait]
impl NodeBackend for MockBackend {
    fn implementation(&self) -> Implementation {
        self.implementation
    }

    async fn new_address(&self) -> lnconnect_backend::Result<NewAddress> {
        self.new_address_calls.fetch_add(1, Ordering::SeqCst);
        self.address
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
            .map(|address| NewAddress { address })
    }

    async fn create_account(&self) -> lnconnect_backend::Result<HostedAccountCredentials> {
        self.create_account_calls.fetch_add(1, Ordering::SeqCst);
        self.account
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

// ===== MockResolver =====

pub struct MockResolver {
    backend: Arc<MockBackend>,
    pub connections: Mutex<Vec<BackendConnection>>,
}

impl MockResolver {
    pub fn new(backend: Arc<MockBackend>) -> Self {
        Self {
            backend,
            connections: Mutex::new(Vec::new()),
        }
    }

    pub fn last_connection(&self) -> Option<BackendConnection> {
        self.connections
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl BackendResolver for MockResolver {
    fn resolve(&self, connection: BackendConnection) -> CoreResult<Arc<dyn NodeBackend>> {
        self.connections
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(connection);
        Ok(self.backend.clone())
    }
}

// ===== Factory methods =====

/// Create a `NodeProfileStore` over a fresh in-memory secure store.
pub fn create_test_store() -> (Arc<NodeProfileStore>, Arc<MockSecureStore>) {
    let secure_store = Arc::new(MockSecureStore::new());
    let store = Arc::new(NodeProfileStore::new(CredentialVault::new(
        secure_store.clone(),
    )));
    (store, secure_store)
}

/// Create a `ServiceContext` whose resolver always hands out `backend`.
pub fn create_test_context(
    backend: MockBackend,
) -> (
    Arc<ServiceContext>,
    Arc<MockSecureStore>,
    Arc<MockBackend>,
    Arc<MockResolver>,
) {
    let (store, secure_store) = create_test_store();
    let backend = Arc::new(backend);
    let resolver = Arc::new(MockResolver::new(backend.clone()));
    let ctx = Arc::new(ServiceContext::new(store, resolver.clone()));
    (ctx, secure_store, backend, resolver)
}

/// An lnd profile with a macaroon.
pub fn lnd_profile(host: &str) -> NodeProfile {
    NodeProfile {
        host: Some(host.to_string()),
        port: Some("8080".to_string()),
        macaroon_hex: Some("0201036c6e64".to_string()),
        implementation: Implementation::Lnd,
        ssl_verification: Some(true),
        ..NodeProfile::default()
    }
}

/// Settings holding the given profiles, first one selected.
pub fn settings_with(nodes: Vec<NodeProfile>) -> Settings {
    Settings {
        nodes,
        selected_node: Some(0),
        ..Settings::default()
    }
}
