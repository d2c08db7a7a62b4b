//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use rust_decimal::Decimal;

use crate::error::AppError;

/// Candidate payment submitted on create and update.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDraft {
    /// Code of the active to transact against
    #[schema(example = "A1")]
    pub active_id: String,
    /// Code of the owning client
    #[schema(example = "C1")]
    pub client_id: String,
    /// Signed amount
    #[schema(value_type = f64, example = 50.0)]
    pub amount: Decimal,
}

/// Uniform wire wrapper carried by every endpoint.
///
/// Internally the service speaks `Result<T, AppError>`; the translation to
/// this shape happens only at the HTTP boundary.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Envelope<T> {
    /// Human-readable outcome, "Done" on success
    pub message: String,
    /// HTTP-status-like code repeated in the body
    pub status: u16,
    /// Payload, null on failure and for payload-less successes
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Successful envelope wrapping a payload.
    pub fn done(data: T) -> Self {
        Self {
            message: "Done".to_string(),
            status: 200,
            data: Some(data),
        }
    }

    /// Successful envelope with no payload (delete).
    pub fn done_empty() -> Self {
        Self {
            message: "Done".to_string(),
            status: 200,
            data: None,
        }
    }

    /// Failure envelope rendered from an application error.
    pub fn failure(err: &AppError) -> Self {
        Self {
            message: err.to_string(),
            status: err.status(),
            data: None,
        }
    }
}
