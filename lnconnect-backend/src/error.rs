use serde::{Deserialize, Serialize};

/// Unified error type for all node backend operations.
///
/// Each variant carries a `backend` field naming the implementation that produced it.
/// All variants are serializable so a front-end can render them without string matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum BackendError {
    /// A network-level error occurred (DNS resolution failure, connection refused, TLS, ...).
    NetworkError {
        /// Backend that produced the error.
        backend: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Backend that produced the error.
        backend: String,
        /// Error details.
        detail: String,
    },

    /// The node rejected the macaroon or access key (HTTP 401/403).
    InvalidCredentials {
        /// Backend that produced the error.
        backend: String,
        /// Original error message from the node, if available.
        raw_message: Option<String>,
    },

    /// The node answered with a non-success status that has no better mapping.
    Api {
        /// Backend that produced the error.
        backend: String,
        /// HTTP status code.
        status: u16,
        /// Original error message from the node, if available.
        raw_message: Option<String>,
    },

    /// Failed to parse the node's response.
    ParseError {
        /// Backend that produced the error.
        backend: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// The connection material is unusable (no host, malformed URL, ...).
    InvalidConnection {
        /// Backend that produced the error.
        backend: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// The backend does not offer the requested operation.
    Unsupported {
        /// Backend that produced the error.
        backend: String,
        /// Operation name.
        operation: String,
    },
}

impl std::fmt::Display for BackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { backend, detail } => {
                write!(f, "[{backend}] Network error: {detail}")
            }
            Self::Timeout { backend, detail } => {
                write!(f, "[{backend}] Request timed out: {detail}")
            }
            Self::InvalidCredentials {
                backend,
                raw_message,
            } => match raw_message {
                Some(msg) => write!(f, "[{backend}] Invalid credentials: {msg}"),
                None => write!(f, "[{backend}] Invalid credentials"),
            },
            Self::Api {
                backend,
                status,
                raw_message,
            } => match raw_message {
                Some(msg) => write!(f, "[{backend}] HTTP {status}: {msg}"),
                None => write!(f, "[{backend}] HTTP {status}"),
            },
            Self::ParseError { backend, detail } => {
                write!(f, "[{backend}] Parse error: {detail}")
            }
            Self::InvalidConnection { backend, detail } => {
                write!(f, "[{backend}] Invalid connection: {detail}")
            }
            Self::Unsupported { backend, operation } => {
                write!(f, "[{backend}] Operation not supported: {operation}")
            }
        }
    }
}

impl std::error::Error for BackendError {}

impl BackendError {
    /// Whether the error stems from user-supplied data rather than an outage.
    ///
    /// Used by callers to pick `warn` over `error` when logging.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. } | Self::InvalidConnection { .. } | Self::Unsupported { .. }
        )
    }
}

/// Backend layer Result type alias
pub type Result<T> = std::result::Result<T, BackendError>;
