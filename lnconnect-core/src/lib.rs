//! lnconnect core library
//!
//! Owns the wallet's saved node profiles and the credentials that go with them. The whole
//! settings aggregate lives as one JSON blob in a platform secure store, reached through the
//! [`SecureStore`](traits::SecureStore) trait.
//!
//! # Services
//!
//! - [`NodeProfileStore`] - load, mutate and persist settings; derives the active profile
//! - [`RemoteConfigImporter`] - turn a `config=<url>` reference into a candidate profile
//! - [`OnChainAddressManager`] - fetch a receive address from the active node
//! - [`AccountProvisioner`] - create an account on a hosted backend
//!
//! Node access goes through a [`BackendResolver`](traits::BackendResolver), by default
//! [`RestBackendResolver`](traits::RestBackendResolver) over the `lnconnect-backend` clients.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

pub use error::{CoreError, CoreResult};
pub use services::{
    AccountProvisioner, CredentialVault, ImporterConfig, NodeProfileStore, OnChainAddressManager,
    ProvisionerState, RemoteConfigImporter, ServiceContext, SETTINGS_KEY,
};

// Re-export the backend library for adapters and front-ends
pub use lnconnect_backend;
