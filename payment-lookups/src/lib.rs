//! # Payment Lookups
//!
//! HTTP adapters for the two upstream validation services. Each adapter
//! implements the corresponding port from `payment-types` with a bounded
//! per-request timeout; a failed call fails fast with no retry so the
//! orchestration chain short-circuits immediately.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use payment_types::{ActiveLookup, ActiveRecord, ClientLookup, ClientRecord, LookupError, LookupReply};

/// Default per-request timeout applied when the caller does not configure one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// HTTP adapter for the active-management service.
pub struct HttpActiveLookup {
    base_url: String,
    http: Client,
}

impl HttpActiveLookup {
    /// Creates a new adapter against the given base URL.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> reqwest::Result<Self> {
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::builder().timeout(timeout).build()?,
        })
    }
}

#[async_trait::async_trait]
impl ActiveLookup for HttpActiveLookup {
    async fn find_by_code(
        &self,
        code: &str,
    ) -> Result<Option<LookupReply<ActiveRecord>>, LookupError> {
        fetch_reply(&self.http, format!("{}/api/active/{}", self.base_url, code)).await
    }
}

/// HTTP adapter for the client-management service.
pub struct HttpClientLookup {
    base_url: String,
    http: Client,
}

impl HttpClientLookup {
    /// Creates a new adapter against the given base URL.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> reqwest::Result<Self> {
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::builder().timeout(timeout).build()?,
        })
    }
}

#[async_trait::async_trait]
impl ClientLookup for HttpClientLookup {
    async fn find_by_code(
        &self,
        code: &str,
    ) -> Result<Option<LookupReply<ClientRecord>>, LookupError> {
        fetch_reply(&self.http, format!("{}/api/client/{}", self.base_url, code)).await
    }
}

async fn fetch_reply<T: DeserializeOwned>(
    http: &Client,
    url: String,
) -> Result<Option<LookupReply<T>>, LookupError> {
    let resp = http.get(url).send().await.map_err(classify)?;

    let status = resp.status();
    let body = resp.text().await.map_err(classify)?;

    parse_reply(status, &body)
}

/// Maps transport failures onto the port's error taxonomy.
fn classify(err: reqwest::Error) -> LookupError {
    if err.is_connect() || err.is_timeout() {
        LookupError::RemoteUnavailable(err.to_string())
    } else {
        LookupError::RemoteError(err.to_string())
    }
}

/// Classifies a raw remote response into the port contract: 204/404 and
/// empty bodies are "no reply at all", a present envelope is passed through
/// (its `data` may still be null).
fn parse_reply<T: DeserializeOwned>(
    status: StatusCode,
    body: &str,
) -> Result<Option<LookupReply<T>>, LookupError> {
    if status == StatusCode::NO_CONTENT || status == StatusCode::NOT_FOUND {
        return Ok(None);
    }

    if !status.is_success() {
        return Err(LookupError::RemoteError(format!(
            "HTTP {} from lookup service",
            status.as_u16()
        )));
    }

    if body.trim().is_empty() {
        return Ok(None);
    }

    serde_json::from_str(body)
        .map(Some)
        .map_err(|e| LookupError::RemoteError(e.to_string()))
}
