//! Backend resolution trait

use std::sync::Arc;

use lnconnect_backend::{create_backend, BackendConnection, NodeBackend};

use crate::error::CoreResult;

/// Maps connection material to a backend client.
///
/// The default [`RestBackendResolver`] goes through the backend crate's factory; tests
/// substitute scripted backends.
pub trait BackendResolver: Send + Sync {
    fn resolve(&self, connection: BackendConnection) -> CoreResult<Arc<dyn NodeBackend>>;
}

/// Resolver backed by [`create_backend`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RestBackendResolver;

impl BackendResolver for RestBackendResolver {
    fn resolve(&self, connection: BackendConnection) -> CoreResult<Arc<dyn NodeBackend>> {
        Ok(create_backend(connection)?)
    }
}
