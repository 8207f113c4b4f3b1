//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use lnconnect_backend::BackendError;

/// Core layer error type
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// The secure store could not be read or written
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// The persisted settings blob is not valid settings JSON
    #[error("Malformed persisted data: {0}")]
    MalformedPersistedData(String),

    /// A remote configuration names a backend this client cannot talk to
    #[error("Sorry, we currently only support remote configurations for lnd or c-lightning (got '{0}')")]
    UnsupportedRemoteImplementation(String),

    /// The remote configuration could not be retrieved or understood
    #[error("{0}")]
    RemoteConfigFetch(String),

    /// The backend refused to create a hosted account
    #[error("{0}")]
    AccountCreation(String),

    /// No profile is selected, or the selection points past the profile list
    #[error("No active node profile")]
    NoActiveProfile,

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Backend error (converted from the backend library)
    #[error("{0}")]
    Backend(#[from] BackendError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, untrusted remote data), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::UnsupportedRemoteImplementation(_)
            | Self::RemoteConfigFetch(_)
            | Self::AccountCreation(_)
            | Self::NoActiveProfile
            | Self::ValidationError(_) => true,
            Self::Backend(e) => e.is_expected(),
            _ => false,
        }
    }

    /// The backend error, if this wraps one.
    pub fn as_backend(&self) -> Option<&BackendError> {
        match self {
            Self::Backend(e) => Some(e),
            _ => None,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_errors_convert_and_classify() {
        let err: CoreError = BackendError::Unsupported {
            backend: "lnd".into(),
            operation: "create_account".into(),
        }
        .into();
        assert!(err.is_expected());
        assert!(matches!(
            err.as_backend(),
            Some(BackendError::Unsupported { .. })
        ));
    }

    #[test]
    fn storage_errors_are_unexpected() {
        assert!(!CoreError::StorageUnavailable("locked".into()).is_expected());
        assert!(!CoreError::MalformedPersistedData("eof".into()).is_expected());
    }

    #[test]
    fn serializes_with_code_tag() {
        let json = serde_json::to_value(CoreError::NoActiveProfile).unwrap_or_default();
        assert_eq!(json["code"], "NoActiveProfile");
    }
}
