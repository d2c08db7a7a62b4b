//! # Payment Repository
//!
//! Concrete record-store implementations (adapters) for the payment record
//! service. This crate provides adapters that implement the
//! `PaymentRepository` port.

#[cfg(not(any(feature = "memory", feature = "sqlite")))]
compile_error!("Enable a repo feature: `memory` or `sqlite`.");

use async_trait::async_trait;
use payment_types::{NewPayment, Payment, PaymentId, PaymentRepository, RepoError};

#[cfg(feature = "memory")]
pub mod memory;
#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "sqlite")]
mod types;

#[cfg(feature = "sqlite")]
#[cfg(test)]
mod sqlite_tests;

/// Unified repository wrapper that handles both adapters.
pub struct Repo {
    #[cfg(all(feature = "memory", not(feature = "sqlite")))]
    inner: memory::MemoryRepo,
    #[cfg(feature = "sqlite")]
    inner: sqlite::SqliteRepo,
}

/// Build and initialize a repository from a database URL.
///
/// With the `sqlite` feature this connects and runs migrations; with only
/// `memory` enabled the URL is ignored and a fresh in-memory store is
/// returned.
///
/// # Examples
///
/// ```ignore
/// // SQLite (with `sqlite` feature)
/// let repo = build_repo("sqlite://payments.db?mode=rwc").await?;
/// ```
pub async fn build_repo(database_url: &str) -> anyhow::Result<Repo> {
    Repo::new(database_url).await
}

impl Repo {
    #[cfg(all(feature = "memory", not(feature = "sqlite")))]
    pub async fn new(_database_url: &str) -> anyhow::Result<Self> {
        Ok(Self {
            inner: memory::MemoryRepo::new(),
        })
    }

    #[cfg(feature = "sqlite")]
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        let inner = sqlite::SqliteRepo::new(database_url).await?;
        Ok(Self { inner })
    }
}

// Re-export individual repos for direct use if needed
#[cfg(feature = "memory")]
pub use memory::MemoryRepo;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepo;

// ─────────────────────────────────────────────────────────────────────────────
// Implement PaymentRepository for Repo (delegation)
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl PaymentRepository for Repo {
    async fn insert(&self, new: NewPayment) -> Result<Payment, RepoError> {
        self.inner.insert(new).await
    }

    async fn get(&self, id: PaymentId) -> Result<Option<Payment>, RepoError> {
        self.inner.get(id).await
    }

    async fn exists(&self, id: PaymentId) -> Result<bool, RepoError> {
        self.inner.exists(id).await
    }

    async fn update(&self, payment: Payment) -> Result<Payment, RepoError> {
        self.inner.update(payment).await
    }

    async fn delete(&self, id: PaymentId) -> Result<bool, RepoError> {
        self.inner.delete(id).await
    }

    async fn list_all(&self) -> Result<Vec<Payment>, RepoError> {
        self.inner.list_all().await
    }
}
