//! Backend shared helpers

use std::time::Duration;

use reqwest::Client;

use crate::error::{BackendError, Result};
use crate::types::BackendConnection;

/// Default connect timeout (seconds)
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds)
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Create an HTTP client with timeouts and the profile's certificate policy.
pub fn create_http_client(backend: &str, ssl_verification: bool) -> Result<Client> {
    let builder = Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS));

    #[cfg(any(feature = "native-tls", feature = "rustls"))]
    let builder = builder.danger_accept_invalid_certs(!ssl_verification);
    #[cfg(not(any(feature = "native-tls", feature = "rustls")))]
    let _ = ssl_verification;

    builder.build().map_err(|e| BackendError::InvalidConnection {
        backend: backend.to_string(),
        detail: format!("Failed to create HTTP client: {e}"),
    })
}

/// Resolve the base URL or fail with `InvalidConnection`.
pub fn require_base_url(connection: &BackendConnection, backend: &str) -> Result<String> {
    connection
        .base_url()
        .ok_or_else(|| BackendError::InvalidConnection {
            backend: backend.to_string(),
            detail: "profile has neither host nor url".to_string(),
        })
}

/// Return the credential or fail with `InvalidCredentials`.
pub fn require_secret(secret: Option<&String>, backend: &str) -> Result<String> {
    secret
        .filter(|s| !s.is_empty())
        .cloned()
        .ok_or_else(|| BackendError::InvalidCredentials {
            backend: backend.to_string(),
            raw_message: Some("no credential configured".to_string()),
        })
}
