//! Storage and backend abstraction trait definitions

mod backend_resolver;
mod secure_store;

pub use backend_resolver::{BackendResolver, RestBackendResolver};
pub use secure_store::{Accessibility, SecureStore};
