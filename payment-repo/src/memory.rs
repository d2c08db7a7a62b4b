//! In-memory repository adapter.
//!
//! Default store for development and tests; models the record store as a
//! plain concurrent document collection.

use async_trait::async_trait;
use dashmap::DashMap;

use payment_types::{NewPayment, Payment, PaymentId, PaymentRepository, RepoError};

/// In-memory repository backed by a concurrent map.
///
/// Iteration order is the map's own; the port makes no ordering guarantee.
#[derive(Default)]
pub struct MemoryRepo {
    payments: DashMap<PaymentId, Payment>,
}

impl MemoryRepo {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentRepository for MemoryRepo {
    async fn insert(&self, new: NewPayment) -> Result<Payment, RepoError> {
        let payment = Payment::from_new(PaymentId::new(), new);
        self.payments.insert(payment.id, payment.clone());
        Ok(payment)
    }

    async fn get(&self, id: PaymentId) -> Result<Option<Payment>, RepoError> {
        Ok(self.payments.get(&id).map(|p| p.clone()))
    }

    async fn exists(&self, id: PaymentId) -> Result<bool, RepoError> {
        Ok(self.payments.contains_key(&id))
    }

    async fn update(&self, payment: Payment) -> Result<Payment, RepoError> {
        if !self.payments.contains_key(&payment.id) {
            return Err(RepoError::NotFound);
        }
        self.payments.insert(payment.id, payment.clone());
        Ok(payment)
    }

    async fn delete(&self, id: PaymentId) -> Result<bool, RepoError> {
        Ok(self.payments.remove(&id).is_some())
    }

    async fn list_all(&self) -> Result<Vec<Payment>, RepoError> {
        Ok(self.payments.iter().map(|e| e.value().clone()).collect())
    }
}
