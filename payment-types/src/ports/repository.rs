//! Repository port trait.
//!
//! This is the primary port in our hexagonal architecture.
//! Adapters (SQLite, InMemory) will implement this trait.

use crate::domain::{NewPayment, Payment, PaymentId};
use crate::error::RepoError;

/// The record-store port for payment persistence.
///
/// The store owns id assignment: `insert` receives an id-less record and
/// returns it with the identifier attached.
#[async_trait::async_trait]
pub trait PaymentRepository: Send + Sync + 'static {
    /// Persists a new payment, assigning its id.
    async fn insert(&self, new: NewPayment) -> Result<Payment, RepoError>;

    /// Gets a payment by id.
    async fn get(&self, id: PaymentId) -> Result<Option<Payment>, RepoError>;

    /// Checks whether a payment exists.
    async fn exists(&self, id: PaymentId) -> Result<bool, RepoError>;

    /// Overwrites a stored payment. Fails with `NotFound` if absent.
    async fn update(&self, payment: Payment) -> Result<Payment, RepoError>;

    /// Deletes a payment. Returns false if it was absent.
    async fn delete(&self, id: PaymentId) -> Result<bool, RepoError>;

    /// Lists every stored payment in store-iteration order.
    async fn list_all(&self) -> Result<Vec<Payment>, RepoError>;
}
