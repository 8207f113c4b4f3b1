//! Generic HTTP client tools
//!
//! Shared request/response handling for every backend. Each backend still builds its own
//! `RequestBuilder` (URL, auth headers, body) and hands it over here.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::BackendError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the status code with the response text.
    ///
    /// Transport failures become `NetworkError` or `Timeout`. The status is not interpreted;
    /// see [`HttpUtils::ensure_success`].
    pub async fn execute_request(
        request_builder: RequestBuilder,
        backend_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), BackendError> {
        log::debug!("[{backend_name}] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                BackendError::Timeout {
                    backend: backend_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                BackendError::NetworkError {
                    backend: backend_name.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{backend_name}] Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| BackendError::NetworkError {
                backend: backend_name.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{backend_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Map a non-2xx status to a `BackendError`.
    pub fn ensure_success(
        status_code: u16,
        response_text: &str,
        backend_name: &str,
    ) -> Result<(), BackendError> {
        let raw_message = (!response_text.trim().is_empty())
            .then(|| truncate_for_log(response_text.trim()));

        match status_code {
            200..=299 => Ok(()),
            401 | 403 => {
                log::warn!("[{backend_name}] Credentials rejected (HTTP {status_code})");
                Err(BackendError::InvalidCredentials {
                    backend: backend_name.to_string(),
                    raw_message,
                })
            }
            _ => {
                log::error!("[{backend_name}] Request failed (HTTP {status_code})");
                Err(BackendError::Api {
                    backend: backend_name.to_string(),
                    status: status_code,
                    raw_message,
                })
            }
        }
    }

    /// Parse JSON response
    pub fn parse_json<T>(response_text: &str, backend_name: &str) -> Result<T, BackendError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{backend_name}] JSON parse failed: {e}");
            log::error!(
                "[{backend_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            BackendError::ParseError {
                backend: backend_name.to_string(),
                detail: e.to_string(),
            }
        })
    }

    /// Execute, check the status and parse the body in one go.
    pub async fn fetch_json<T>(
        request_builder: RequestBuilder,
        backend_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<T, BackendError>
    where
        T: DeserializeOwned,
    {
        let (status, body) =
            Self::execute_request(request_builder, backend_name, method_name, url).await?;
        Self::ensure_success(status, &body, backend_name)?;
        Self::parse_json(&body, backend_name)
    }
}
