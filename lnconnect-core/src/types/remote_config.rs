//! Remote auto-configuration document

use serde::Deserialize;

use lnconnect_backend::Implementation;

/// Auto-configuration document served by a third party. Untrusted input.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteConfigDocument {
    #[serde(default)]
    pub configurations: Vec<RemoteConfiguration>,
}

/// One entry of [`RemoteConfigDocument::configurations`]. Unknown fields are ignored.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteConfiguration {
    #[serde(default)]
    pub admin_macaroon: Option<String>,
    #[serde(default)]
    pub macaroon: Option<String>,
    #[serde(rename = "type")]
    pub config_type: String,
    pub uri: String,
}

impl RemoteConfiguration {
    /// The admin macaroon when provided, otherwise the plain macaroon.
    pub fn preferred_macaroon(&self) -> Option<String> {
        self.admin_macaroon
            .as_ref()
            .filter(|m| !m.is_empty())
            .or(self.macaroon.as_ref())
            .cloned()
    }
}

impl std::fmt::Debug for RemoteConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteConfiguration")
            .field("config_type", &self.config_type)
            .field("uri", &self.uri)
            .field("has_admin_macaroon", &self.admin_macaroon.is_some())
            .field("has_macaroon", &self.macaroon.is_some())
            .finish()
    }
}

/// Remote configuration `type` values this client accepts, with the profile they map to.
pub const SUPPORTED_REMOTE_TYPES: [(&str, Implementation); 2] = [
    ("lnd-rest", Implementation::Lnd),
    ("clightning-rest", Implementation::ClightningRest),
];

/// Map a remote `type` to an implementation, `None` when not on the allow-list.
pub fn implementation_for_remote_type(config_type: &str) -> Option<Implementation> {
    SUPPORTED_REMOTE_TYPES
        .iter()
        .find(|(name, _)| *name == config_type)
        .map(|(_, implementation)| *implementation)
}
