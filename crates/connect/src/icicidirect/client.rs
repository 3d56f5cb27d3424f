//! HTTP transport for the ICICIDirect API.
//!
//! Every call is a JSON POST of a [`SignedRequest`] envelope. The client knows
//! the application key and client secret; callers supply the payload and the
//! timestamp it is signed with.

use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::checksum;
use super::config::IcicidirectConfig;
use super::errors::{SyncError, SyncResult};
use super::models::SignedRequest;

pub(crate) const LOGIN_PATH: &str = "/apiuser/login";
pub(crate) const SIP_BOOK_PATH: &str = "/mf/mfSIPBook";

#[derive(Clone)]
pub struct IcicidirectClient {
    client: reqwest::Client,
    base_url: String,
    app_key: String,
    client_secret: String,
}

impl IcicidirectClient {
    pub fn new(config: &IcicidirectConfig) -> SyncResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                SyncError::Configuration(format!("Failed to initialize HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            app_key: config.app_key.clone(),
            client_secret: config.client_secret.clone(),
        })
    }

    /// Serializes `payload` and wraps it in a checksummed envelope.
    pub fn signed_request<P: Serialize>(
        &self,
        payload: &P,
        timestamp: String,
    ) -> SyncResult<SignedRequest> {
        let json_post_data = serde_json::to_string(payload)
            .map_err(|e| SyncError::Configuration(format!("Failed to encode payload: {}", e)))?;
        let checksum = checksum::sign(&timestamp, &json_post_data, &self.client_secret);
        Ok(SignedRequest {
            app_key: self.app_key.clone(),
            time_stamp: timestamp,
            json_post_data,
            checksum,
        })
    }

    /// POSTs the envelope and decodes the JSON body, whatever the HTTP status.
    ///
    /// The error is a description of the transport or decoding failure.
    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        request: &SignedRequest,
    ) -> std::result::Result<T, String> {
        let url = format!("{}{}", self.base_url, path);
        debug!("[IcicidirectApi] POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| format!("Request failed: {}", e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| format!("Failed to read response: {}", e))?;

        if body.trim().is_empty() {
            return Err(format!("Empty response body (HTTP {})", status));
        }

        serde_json::from_str(&body)
            .map_err(|e| format!("Failed to parse response (HTTP {}): {}", status, e))
    }
}
