use async_trait::async_trait;

use crate::error::{BackendError, Result};
use crate::types::{HostedAccountCredentials, Implementation, NewAddress};

/// Node backend trait
///
/// One instance talks to one node with one set of credentials. Instances are created by
/// [`create_backend`](crate::create_backend) from a [`BackendConnection`](crate::BackendConnection).
#[async_trait]
pub trait NodeBackend: Send + Sync {
    /// Which node API this backend speaks.
    fn implementation(&self) -> Implementation;

    /// Ask the node for a fresh on-chain receive address.
    async fn new_address(&self) -> Result<NewAddress>;

    /// Create a hosted account on the node.
    ///
    /// Only hosted-account backends override this.
    async fn create_account(&self) -> Result<HostedAccountCredentials> {
        Err(BackendError::Unsupported {
            backend: self.implementation().to_string(),
            operation: "create_account".to_string(),
        })
    }
}
