//! Node backend implementations

/// Shared utilities used by backend implementations.
pub mod common;

#[cfg(feature = "clightning")]
mod clightning;
#[cfg(feature = "lnd")]
mod lnd;
#[cfg(feature = "lndhub")]
mod lndhub;

#[cfg(feature = "clightning")]
pub use clightning::ClightningRestBackend;
#[cfg(feature = "lnd")]
pub use lnd::LndRestBackend;
#[cfg(feature = "lndhub")]
pub use lndhub::LndHubBackend;
