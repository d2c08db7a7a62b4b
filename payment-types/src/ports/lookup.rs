//! Remote lookup ports.
//!
//! These traits define the interface to the two upstream services that
//! validate payment creation. Implementations can be HTTP clients, mock
//! providers, etc.

use serde::{Deserialize, Serialize};

use crate::domain::ClientType;

/// Error type for remote lookup operations.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Remote service unavailable: {0}")]
    RemoteUnavailable(String),

    #[error("Remote service error: {0}")]
    RemoteError(String),
}

/// Envelope shape returned by both upstream services.
///
/// `data: None` is a valid "code did not resolve" reply, distinct from the
/// remote yielding no reply at all (modelled as `Ok(None)` at the port).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupReply<T> {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<u16>,
    pub data: Option<T>,
}

/// Payload returned by the active-management service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Payload returned by the client-management service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub client_type: ClientType,
}

/// Port trait for resolving actives (accounts) by code.
#[async_trait::async_trait]
pub trait ActiveLookup: Send + Sync + 'static {
    /// Resolves an active by code. `Ok(None)` means the remote yielded no
    /// reply at all; a reply with null `data` means the code did not
    /// resolve.
    async fn find_by_code(
        &self,
        code: &str,
    ) -> Result<Option<LookupReply<ActiveRecord>>, LookupError>;
}

/// Port trait for resolving clients by code.
#[async_trait::async_trait]
pub trait ClientLookup: Send + Sync + 'static {
    /// Resolves a client by code; the reply carries the classification used
    /// for the type-compatibility check.
    async fn find_by_code(
        &self,
        code: &str,
    ) -> Result<Option<LookupReply<ClientRecord>>, LookupError>;
}
