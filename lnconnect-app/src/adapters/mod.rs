//! Platform secure store adapters for non-mobile front-ends (CLI, desktop).

#[cfg(feature = "keyring-store")]
mod keyring_secure_store;

#[cfg(feature = "keyring-store")]
pub use keyring_secure_store::KeyringSecureStore;
