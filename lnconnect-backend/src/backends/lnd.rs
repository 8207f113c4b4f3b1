//! lnd REST backend

use async_trait::async_trait;
use reqwest::Client;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::NodeBackend;
use crate::types::{BackendConnection, Implementation, NewAddress};
use crate::utils::log_sanitizer::mask_secret;

use super::common::{create_http_client, require_base_url, require_secret};

const BACKEND_NAME: &str = "lnd";
const MACAROON_HEADER: &str = "Grpc-Metadata-macaroon";

/// lnd REST backend
pub struct LndRestBackend {
    client: Client,
    base_url: String,
    macaroon_hex: String,
}

impl LndRestBackend {
    pub fn new(connection: &BackendConnection) -> Result<Self> {
        let base_url = require_base_url(connection, BACKEND_NAME)?;
        let macaroon_hex = require_secret(connection.macaroon_hex.as_ref(), BACKEND_NAME)?;
        log::debug!(
            "[{BACKEND_NAME}] Using {base_url} with macaroon {}",
            mask_secret(&macaroon_hex)
        );
        Ok(Self {
            client: create_http_client(BACKEND_NAME, connection.ssl_verification)?,
            base_url,
            macaroon_hex,
        })
    }
}

#[async_trait]
impl NodeBackend for LndRestBackend {
    fn implementation(&self) -> Implementation {
        Implementation::Lnd
    }

    async fn new_address(&self) -> Result<NewAddress> {
        let url = format!("{}/v1/newaddress", self.base_url);
        let request = self
            .client
            .get(&url)
            .header(MACAROON_HEADER, &self.macaroon_hex);
        HttpUtils::fetch_json(request, BACKEND_NAME, "GET", &url).await
    }
}
