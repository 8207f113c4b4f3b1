//! Remote configuration importer
//!
//! Turns a `config=<url>` reference into a candidate [`NodeProfile`]. The document behind the
//! URL is untrusted; only its first configuration entry is read.

use std::time::Duration;

use reqwest::{Client, Url};
use tokio::sync::RwLock;

use lnconnect_backend::HttpUtils;

use crate::error::{CoreError, CoreResult};
use crate::types::{implementation_for_remote_type, NodeProfile, RemoteConfigDocument};

const SOURCE_NAME: &str = "remote-config";
const CONFIG_MARKER: &str = "config=";
const FETCH_ERROR: &str = "Error getting remote configuration";

/// HTTP settings for remote configuration fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImporterConfig {
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ImporterConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Remote configuration importer
///
/// Never touches the credential vault; adopting a candidate is up to the caller.
pub struct RemoteConfigImporter {
    client: Client,
    last_error: RwLock<Option<CoreError>>,
}

impl RemoteConfigImporter {
    pub fn new(config: ImporterConfig) -> CoreResult<Self> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| CoreError::ValidationError(format!("Failed to create HTTP client: {e}")))?;
        Ok(Self {
            client,
            last_error: RwLock::new(None),
        })
    }

    /// Error recorded by the most recent fetch, if it failed.
    pub async fn last_error(&self) -> Option<CoreError> {
        self.last_error.read().await.clone()
    }

    /// Fetch the document referenced by `input` and map its first entry to a profile.
    ///
    /// Returns `None` on any failure; the reason is available from
    /// [`RemoteConfigImporter::last_error`].
    pub async fn fetch_remote_config(&self, input: &str) -> Option<NodeProfile> {
        *self.last_error.write().await = None;

        match self.fetch(input).await {
            Ok(profile) => {
                log::info!(
                    "Imported remote configuration for {} ({})",
                    profile.host.as_deref().unwrap_or_default(),
                    profile.implementation
                );
                Some(profile)
            }
            Err(e) => {
                if e.is_expected() {
                    log::warn!("Remote configuration rejected: {e}");
                } else {
                    log::error!("Remote configuration failed: {e}");
                }
                *self.last_error.write().await = Some(e);
                None
            }
        }
    }

    async fn fetch(&self, input: &str) -> CoreResult<NodeProfile> {
        let url = extract_config_url(input)?;
        let request = self.client.get(url.clone());

        let (status, body) =
            HttpUtils::execute_request(request, SOURCE_NAME, "GET", url.as_str())
                .await
                .map_err(|e| CoreError::RemoteConfigFetch(format!("{FETCH_ERROR}: {e}")))?;

        if status != 200 {
            return Err(CoreError::RemoteConfigFetch(FETCH_ERROR.to_string()));
        }

        let document: RemoteConfigDocument = HttpUtils::parse_json(&body, SOURCE_NAME)
            .map_err(|e| CoreError::RemoteConfigFetch(format!("{FETCH_ERROR}: {e}")))?;

        candidate_from_document(&document)
    }
}

/// Pull the URL that follows the first `config=` marker.
fn extract_config_url(input: &str) -> CoreResult<Url> {
    let raw = input
        .split(CONFIG_MARKER)
        .nth(1)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            CoreError::RemoteConfigFetch(format!("{FETCH_ERROR}: no '{CONFIG_MARKER}' reference found"))
        })?;

    Url::parse(raw)
        .map_err(|e| CoreError::RemoteConfigFetch(format!("{FETCH_ERROR}: invalid URL: {e}")))
}

/// Map the first configuration entry to a profile.
fn candidate_from_document(document: &RemoteConfigDocument) -> CoreResult<NodeProfile> {
    let entry = document.configurations.first().ok_or_else(|| {
        CoreError::RemoteConfigFetch(format!("{FETCH_ERROR}: document has no configurations"))
    })?;

    let implementation = implementation_for_remote_type(&entry.config_type)
        .ok_or_else(|| CoreError::UnsupportedRemoteImplementation(entry.config_type.clone()))?;

    let host = entry.uri.strip_prefix("https://").ok_or_else(|| {
        CoreError::RemoteConfigFetch(format!(
            "{FETCH_ERROR}: node uri must use https (got '{}')",
            entry.uri
        ))
    })?;

    Ok(NodeProfile {
        host: Some(host.to_string()),
        macaroon_hex: entry.preferred_macaroon(),
        implementation,
        ..NodeProfile::default()
    })
}
