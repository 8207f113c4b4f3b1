//! Backend factory functions.

use std::sync::Arc;

use crate::error::Result;
use crate::traits::NodeBackend;
use crate::types::{BackendConnection, Implementation};

#[cfg(feature = "clightning")]
use crate::backends::ClightningRestBackend;
#[cfg(feature = "lnd")]
use crate::backends::LndRestBackend;
#[cfg(feature = "lndhub")]
use crate::backends::LndHubBackend;

/// Creates a [`NodeBackend`] for the given connection.
///
/// The concrete backend is chosen by [`BackendConnection::implementation`]. Implementations
/// whose feature flag is disabled yield [`BackendError::Unsupported`](crate::BackendError::Unsupported).
///
/// # Examples
///
/// ```rust,no_run
/// use lnconnect_backend::{create_backend, BackendConnection, Implementation};
///
/// let backend = create_backend(BackendConnection {
///     host: Some("hub.example".to_string()),
///     implementation: Implementation::LndHub,
///     ..BackendConnection::default()
/// }).unwrap();
/// ```
pub fn create_backend(connection: BackendConnection) -> Result<Arc<dyn NodeBackend>> {
    match connection.implementation {
        #[cfg(feature = "lnd")]
        Implementation::Lnd => Ok(Arc::new(LndRestBackend::new(&connection)?)),
        #[cfg(feature = "clightning")]
        Implementation::ClightningRest => Ok(Arc::new(ClightningRestBackend::new(&connection)?)),
        #[cfg(feature = "lndhub")]
        Implementation::LndHub => Ok(Arc::new(LndHubBackend::new(&connection)?)),
        #[allow(unreachable_patterns)]
        other => Err(crate::error::BackendError::Unsupported {
            backend: other.to_string(),
            operation: "create_backend".to_string(),
        }),
    }
}

/// Implementations compiled into this build.
pub fn enabled_implementations() -> Vec<Implementation> {
    vec![
        #[cfg(feature = "lnd")]
        Implementation::Lnd,
        #[cfg(feature = "clightning")]
        Implementation::ClightningRest,
        #[cfg(feature = "lndhub")]
        Implementation::LndHub,
    ]
}
