//! # Payment Client SDK
//!
//! A typed Rust client for the Payment Record API. Responses are unwrapped
//! from the `{message, status, data}` envelope; failure envelopes surface
//! as [`ClientError::Api`] with the service's message.

use payment_types::{ClientType, Envelope, Payment, PaymentDraft, PaymentId};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API returned an empty payload")]
    MissingData,
}

/// Payment Record API client.
pub struct PaymentClient {
    base_url: String,
    http: Client,
}

impl PaymentClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Lists every stored payment.
    pub async fn list(&self) -> Result<Vec<Payment>, ClientError> {
        self.get("/api/payment").await
    }

    /// Gets a payment by id.
    pub async fn get_payment(&self, id: PaymentId) -> Result<Payment, ClientError> {
        self.get(&format!("/api/payment/{}", id)).await
    }

    /// Creates a payment of the given ownership type.
    pub async fn create(
        &self,
        client_type: ClientType,
        draft: &PaymentDraft,
    ) -> Result<Payment, ClientError> {
        let resp = self
            .http
            .post(format!(
                "{}/api/payment/{}",
                self.base_url,
                discriminator(client_type)
            ))
            .json(draft)
            .send()
            .await?;
        handle_response(resp).await?.ok_or(ClientError::MissingData)
    }

    /// Overwrites a payment by id.
    pub async fn update(
        &self,
        id: PaymentId,
        draft: &PaymentDraft,
    ) -> Result<Payment, ClientError> {
        let resp = self
            .http
            .put(format!("{}/api/payment/{}", self.base_url, id))
            .json(draft)
            .send()
            .await?;
        handle_response(resp).await?.ok_or(ClientError::MissingData)
    }

    /// Deletes a payment by id.
    pub async fn delete(&self, id: PaymentId) -> Result<(), ClientError> {
        let resp = self
            .http
            .delete(format!("{}/api/payment/{}", self.base_url, id))
            .send()
            .await?;
        // The delete envelope carries no payload.
        handle_response::<serde_json::Value>(resp).await?;
        Ok(())
    }

    /// Lists the payments of one client.
    pub async fn client_payments(&self, client_id: &str) -> Result<Vec<Payment>, ClientError> {
        self.get(&format!("/api/payment/clientPayments/{}", client_id))
            .await
    }

    /// Sums the amounts of one client's payments.
    pub async fn balance(&self, client_id: &str) -> Result<Decimal, ClientError> {
        self.get(&format!("/api/payment/balance/{}", client_id))
            .await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        handle_response(resp).await?.ok_or(ClientError::MissingData)
    }
}

/// Maps the typed ownership classification onto the API's path discriminator.
fn discriminator(client_type: ClientType) -> &'static str {
    match client_type {
        ClientType::Personal => "1",
        ClientType::Company => "2",
    }
}

async fn handle_response<T: DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<Option<T>, ClientError> {
    let status = resp.status();
    let body = resp.text().await?;

    if status.is_success() {
        let envelope: Envelope<T> = serde_json::from_str(&body)?;
        Ok(envelope.data)
    } else {
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
            .unwrap_or(body);
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
