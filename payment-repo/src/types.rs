//! Database row types for the SQLite adapter.
//!
//! Amounts and timestamps are stored as strings (decimal literal and
//! RFC 3339) so the adapter needs no database-side numeric affinity.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

use payment_types::{ClientType, Payment, PaymentId, RepoError};

/// Payment row from the database.
#[derive(FromRow)]
pub struct DbPayment {
    pub id: String,
    pub active_id: String,
    pub client_id: String,
    pub amount: String,
    pub type_code: String,
    pub date_registered: String,
    pub date_updated: Option<String>,
}

pub fn parse_client_type(s: &str) -> Result<ClientType, RepoError> {
    match s {
        "PERSONAL" => Ok(ClientType::Personal),
        "COMPANY" => Ok(ClientType::Company),
        _ => Err(RepoError::Database(format!("Unknown client type: {}", s))),
    }
}

fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, RepoError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepoError::Database(e.to_string()))
}

impl DbPayment {
    /// Convert database row to domain Payment.
    pub fn into_domain(self) -> Result<Payment, RepoError> {
        let uuid =
            uuid::Uuid::parse_str(&self.id).map_err(|e| RepoError::Database(e.to_string()))?;

        let amount =
            Decimal::from_str(&self.amount).map_err(|e| RepoError::Database(e.to_string()))?;

        let type_code = parse_client_type(&self.type_code)?;
        let date_registered = parse_timestamp(&self.date_registered)?;
        let date_updated = self
            .date_updated
            .as_deref()
            .map(parse_timestamp)
            .transpose()?;

        Ok(Payment::from_parts(
            PaymentId::from_uuid(uuid),
            self.active_id,
            self.client_id,
            amount,
            type_code,
            date_registered,
            date_updated,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_row_round_trip() {
        let row = DbPayment {
            id: uuid::Uuid::new_v4().to_string(),
            active_id: "A1".to_string(),
            client_id: "C1".to_string(),
            amount: "50.25".to_string(),
            type_code: "PERSONAL".to_string(),
            date_registered: Utc::now().to_rfc3339(),
            date_updated: None,
        };

        let payment = row.into_domain().unwrap();
        assert_eq!(payment.amount, dec!(50.25));
        assert_eq!(payment.type_code, ClientType::Personal);
        assert!(payment.date_updated.is_none());
    }

    #[test]
    fn test_unknown_type_code_fails() {
        assert!(parse_client_type("OTHER").is_err());
    }
}
