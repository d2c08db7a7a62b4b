//! Payment domain model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Unique identifier for a Payment, assigned by the record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct PaymentId(Uuid);

impl PaymentId {
    /// Creates a new random PaymentId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a PaymentId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Returns the UUID value.
    pub fn into_uuid(self) -> Uuid {
        self.0
    }
}

impl Default for PaymentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PaymentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PaymentId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Ownership classification shared by clients and the payments made for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClientType {
    Personal,
    Company,
}

impl ClientType {
    /// Resolves the path discriminator used on payment creation.
    ///
    /// `"1"` is personal, `"2"` is company; anything else resolves to no
    /// type and can never match a client's classification.
    pub fn from_discriminator(value: &str) -> Option<Self> {
        match value {
            "1" => Some(ClientType::Personal),
            "2" => Some(ClientType::Company),
            _ => None,
        }
    }
}

impl std::fmt::Display for ClientType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientType::Personal => write!(f, "PERSONAL"),
            ClientType::Company => write!(f, "COMPANY"),
        }
    }
}

/// A payment record awaiting persistence; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewPayment {
    pub active_id: String,
    pub client_id: String,
    pub amount: Decimal,
    pub type_code: ClientType,
    pub date_registered: DateTime<Utc>,
}

/// A persisted payment linking an active (account) and a client.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Unique identifier, assigned by the record store
    pub id: PaymentId,
    /// Code of the active this payment transacts against
    pub active_id: String,
    /// Code of the client the payment belongs to
    pub client_id: String,
    /// Signed amount
    #[schema(value_type = f64, example = 50.0)]
    pub amount: Decimal,
    /// Ownership classification resolved at creation
    pub type_code: ClientType,
    /// Set once when the record is created
    pub date_registered: DateTime<Utc>,
    /// Set on every update, absent until the first one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_updated: Option<DateTime<Utc>>,
}

impl Payment {
    /// Attaches a store-assigned id to a new record.
    pub fn from_new(id: PaymentId, new: NewPayment) -> Self {
        Self {
            id,
            active_id: new.active_id,
            client_id: new.client_id,
            amount: new.amount,
            type_code: new.type_code,
            date_registered: new.date_registered,
            date_updated: None,
        }
    }

    /// Reconstructs a payment from database fields.
    pub fn from_parts(
        id: PaymentId,
        active_id: String,
        client_id: String,
        amount: Decimal,
        type_code: ClientType,
        date_registered: DateTime<Utc>,
        date_updated: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            active_id,
            client_id,
            amount,
            type_code,
            date_registered,
            date_updated,
        }
    }
}
