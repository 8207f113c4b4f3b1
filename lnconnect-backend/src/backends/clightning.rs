//! c-lightning-REST backend

use async_trait::async_trait;
use reqwest::Client;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::NodeBackend;
use crate::types::{BackendConnection, Implementation, NewAddress};

use super::common::{create_http_client, require_base_url, require_secret};

const BACKEND_NAME: &str = "c-lightning-REST";

/// c-lightning-REST backend
///
/// The macaroon is sent hex-encoded, which the server only accepts with `encodingtype: hex`.
pub struct ClightningRestBackend {
    client: Client,
    base_url: String,
    macaroon_hex: String,
}

impl ClightningRestBackend {
    pub fn new(connection: &BackendConnection) -> Result<Self> {
        Ok(Self {
            client: create_http_client(BACKEND_NAME, connection.ssl_verification)?,
            base_url: require_base_url(connection, BACKEND_NAME)?,
            macaroon_hex: require_secret(connection.macaroon_hex.as_ref(), BACKEND_NAME)?,
        })
    }
}

#[async_trait]
impl NodeBackend for ClightningRestBackend {
    fn implementation(&self) -> Implementation {
        Implementation::ClightningRest
    }

    async fn new_address(&self) -> Result<NewAddress> {
        let url = format!("{}/v1/newaddr", self.base_url);
        let request = self
            .client
            .get(&url)
            .header("macaroon", &self.macaroon_hex)
            .header("encodingtype", "hex");
        HttpUtils::fetch_json(request, BACKEND_NAME, "GET", &url).await
    }
}
