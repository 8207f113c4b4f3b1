//! LndHub backend

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{BackendError, Result};
use crate::http_client::HttpUtils;
use crate::traits::NodeBackend;
use crate::types::{BackendConnection, HostedAccountCredentials, Implementation, NewAddress};

use super::common::{create_http_client, require_base_url, require_secret};

const BACKEND_NAME: &str = "lndhub";

#[derive(Serialize)]
struct CreateAccountBody<'a> {
    partnerid: &'a str,
    accounttype: &'a str,
}

#[derive(Serialize)]
struct AuthBody<'a> {
    login: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct AuthTokens {
    access_token: String,
}

/// LndHub backend
///
/// Account creation is unauthenticated; every other call needs the access key. A key of the
/// form `login:password` is exchanged for a bearer token at `/auth` first, any other key is
/// sent as the token itself.
pub struct LndHubBackend {
    client: Client,
    base_url: String,
    access_key: Option<String>,
}

impl LndHubBackend {
    pub fn new(connection: &BackendConnection) -> Result<Self> {
        Ok(Self {
            client: create_http_client(BACKEND_NAME, connection.ssl_verification)?,
            base_url: require_base_url(connection, BACKEND_NAME)?,
            access_key: connection.access_key.clone(),
        })
    }

    async fn bearer_token(&self) -> Result<String> {
        let access_key = require_secret(self.access_key.as_ref(), BACKEND_NAME)?;
        let Some((login, password)) = access_key.split_once(':') else {
            return Ok(access_key.clone());
        };

        let url = format!("{}/auth?type=auth", self.base_url);
        let request = self.client.post(&url).json(&AuthBody { login, password });
        let tokens: AuthTokens = HttpUtils::fetch_json(request, BACKEND_NAME, "POST", &url).await?;
        log::debug!("[{BACKEND_NAME}] Authenticated as {login}");
        Ok(tokens.access_token)
    }
}

#[async_trait]
impl NodeBackend for LndHubBackend {
    fn implementation(&self) -> Implementation {
        Implementation::LndHub
    }

    async fn new_address(&self) -> Result<NewAddress> {
        let token = self.bearer_token().await?;
        let url = format!("{}/getbtc", self.base_url);
        let request = self.client.get(&url).bearer_auth(token);

        let addresses: Vec<NewAddress> =
            HttpUtils::fetch_json(request, BACKEND_NAME, "GET", &url).await?;
        addresses
            .into_iter()
            .next()
            .ok_or_else(|| BackendError::ParseError {
                backend: BACKEND_NAME.to_string(),
                detail: "getbtc returned no address".to_string(),
            })
    }

    async fn create_account(&self) -> Result<HostedAccountCredentials> {
        let url = format!("{}/create", self.base_url);
        let request = self.client.post(&url).json(&CreateAccountBody {
            partnerid: "bluewallet",
            accounttype: "common",
        });
        let credentials: HostedAccountCredentials =
            HttpUtils::fetch_json(request, BACKEND_NAME, "POST", &url).await?;
        log::info!("[{BACKEND_NAME}] Created hosted account {}", credentials.login);
        Ok(credentials)
    }
}
