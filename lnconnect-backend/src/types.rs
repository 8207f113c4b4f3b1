use serde::{Deserialize, Serialize};

// ============ Implementation ============

/// Identifies which node API a profile talks to.
///
/// The serialized names are part of the persisted settings format and must not change.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Implementation {
    /// lnd REST API. Used when a stored profile predates the field.
    #[default]
    #[serde(rename = "lnd")]
    Lnd,
    /// c-lightning-REST.
    #[serde(rename = "c-lightning-REST")]
    ClightningRest,
    /// LndHub hosted accounts.
    #[serde(rename = "lndhub")]
    LndHub,
}

impl Implementation {
    /// All known implementations, regardless of enabled features.
    pub const ALL: [Self; 3] = [Self::Lnd, Self::ClightningRest, Self::LndHub];

    /// Stable identifier, identical to the serialized form.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lnd => "lnd",
            Self::ClightningRest => "c-lightning-REST",
            Self::LndHub => "lndhub",
        }
    }

    /// Look up an implementation by its serialized name.
    pub fn from_persisted(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|implementation| implementation.as_str() == name)
    }

    /// Whether profiles of this kind authenticate with an access key instead of a macaroon.
    pub const fn uses_access_key(self) -> bool {
        matches!(self, Self::LndHub)
    }

    /// Whether the backend can create hosted accounts.
    pub const fn supports_account_creation(self) -> bool {
        matches!(self, Self::LndHub)
    }
}

impl std::fmt::Display for Implementation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============ Connection ============

/// Everything a backend client needs to reach one node.
///
/// `url`, when present, replaces the `https://host[:port]` base built from `host` and `port`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackendConnection {
    pub host: Option<String>,
    pub port: Option<String>,
    pub url: Option<String>,
    pub macaroon_hex: Option<String>,
    pub access_key: Option<String>,
    pub implementation: Implementation,
    /// `false` accepts self-signed node certificates.
    pub ssl_verification: bool,
}

impl BackendConnection {
    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> Option<String> {
        if let Some(url) = self.url.as_deref().filter(|u| !u.is_empty()) {
            return Some(url.trim_end_matches('/').to_string());
        }

        let host = self.host.as_deref().filter(|h| !h.is_empty())?;
        let host = host.trim_end_matches('/');
        let base = if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("https://{host}")
        };

        match self.port.as_deref().filter(|p| !p.is_empty()) {
            Some(port) => Some(format!("{base}:{port}")),
            None => Some(base),
        }
    }
}

// ============ Responses ============

/// A fresh on-chain receive address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewAddress {
    #[serde(alias = "bech32")]
    pub address: String,
}

/// Login material returned by a hosted-account backend.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HostedAccountCredentials {
    pub login: String,
    pub password: String,
}

impl std::fmt::Debug for HostedAccountCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostedAccountCredentials")
            .field("login", &self.login)
            .field("password", &"***")
            .finish()
    }
}
