//! Payment Application Service
//!
//! Orchestrates the cross-service validation chain and balance aggregation
//! through the repository and lookup ports. Contains NO infrastructure
//! logic - pure business orchestration.

use chrono::Utc;
use rust_decimal::Decimal;

use payment_types::{
    ActiveLookup, AppError, ClientLookup, ClientType, NewPayment, Payment, PaymentDraft,
    PaymentId, PaymentRepository,
};

/// Application service for payment record operations.
///
/// Generic over the three ports - the adapters are injected at compile time.
/// This enables:
/// - Swapping the record store without code changes
/// - Testing with in-memory repo and scripted lookups
/// - Compile-time checks for port implementations
pub struct PaymentService<R, A, C>
where
    R: PaymentRepository,
    A: ActiveLookup,
    C: ClientLookup,
{
    repo: R,
    actives: A,
    clients: C,
}

impl<R, A, C> PaymentService<R, A, C>
where
    R: PaymentRepository,
    A: ActiveLookup,
    C: ClientLookup,
{
    /// Creates a new payment service with the given adapters.
    pub fn new(repo: R, actives: A, clients: C) -> Self {
        Self {
            repo,
            actives,
            clients,
        }
    }

    /// Returns a reference to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Creation workflow
    // ─────────────────────────────────────────────────────────────────────────────

    /// Creates a payment after the sequential validation chain:
    /// active lookup, then client lookup, then the type-compatibility rule,
    /// then persistence. Each step short-circuits the rest of the chain.
    ///
    /// The active lookup is a hard prerequisite for the client lookup even
    /// though the latter does not consume its output (early-fail ordering).
    pub async fn create(
        &self,
        discriminator: &str,
        draft: PaymentDraft,
    ) -> Result<Payment, AppError> {
        let wanted = ClientType::from_discriminator(discriminator);

        let active = match self.actives.find_by_code(&draft.active_id).await {
            Ok(Some(reply)) => reply,
            Ok(None) => return Err(AppError::ActiveNoContent),
            Err(e) => {
                tracing::warn!(active_id = %draft.active_id, "active lookup failed: {}", e);
                return Err(AppError::ActiveNoContent);
            }
        };
        if active.data.is_none() {
            return Err(AppError::ActiveMissing);
        }

        let client = match self.clients.find_by_code(&draft.client_id).await {
            Ok(Some(reply)) => reply,
            Ok(None) => return Err(AppError::ClientNoContent),
            Err(e) => {
                tracing::warn!(client_id = %draft.client_id, "client lookup failed: {}", e);
                return Err(AppError::ClientNoContent);
            }
        };
        let Some(client_data) = client.data else {
            return Err(AppError::ClientMissing);
        };

        // An unrecognized discriminator resolves to no type and never matches.
        let type_code = match wanted {
            Some(t) if t == client_data.client_type => t,
            _ => return Err(AppError::TypeMismatch),
        };

        let new = NewPayment {
            active_id: draft.active_id,
            client_id: draft.client_id,
            amount: draft.amount,
            type_code,
            date_registered: Utc::now(),
        };

        self.repo.insert(new).await.map_err(Into::into)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Update & deletion workflows
    // ─────────────────────────────────────────────────────────────────────────────

    /// Overwrites a stored payment and stamps `date_updated`.
    ///
    /// Active/client compatibility is NOT re-checked here; only creation
    /// runs the validation chain.
    pub async fn update(&self, id: PaymentId, draft: PaymentDraft) -> Result<Payment, AppError> {
        let existing = self.repo.get(id).await?.ok_or(AppError::NotFound)?;

        let updated = Payment {
            id,
            active_id: draft.active_id,
            client_id: draft.client_id,
            amount: draft.amount,
            type_code: existing.type_code,
            date_registered: existing.date_registered,
            date_updated: Some(Utc::now()),
        };

        self.repo.update(updated).await.map_err(Into::into)
    }

    /// Deletes a payment by id.
    pub async fn delete(&self, id: PaymentId) -> Result<(), AppError> {
        if !self.repo.exists(id).await? {
            return Err(AppError::NotFound);
        }

        self.repo.delete(id).await?;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Listing & aggregation
    // ─────────────────────────────────────────────────────────────────────────────

    /// Gets a payment by id.
    pub async fn find(&self, id: PaymentId) -> Result<Payment, AppError> {
        self.repo
            .get(id)
            .await
            .map_err(AppError::from)
            .and_then(|opt| opt.ok_or(AppError::NoContent))
    }

    /// Lists every stored payment.
    pub async fn find_all(&self) -> Result<Vec<Payment>, AppError> {
        let payments = self.repo.list_all().await?;
        if payments.is_empty() {
            return Err(AppError::NoContent);
        }
        Ok(payments)
    }

    /// Lists the payments belonging to one client, in store order.
    pub async fn payments_for_client(&self, client_id: &str) -> Result<Vec<Payment>, AppError> {
        let matching: Vec<Payment> = self
            .repo
            .list_all()
            .await?
            .into_iter()
            .filter(|p| p.client_id == client_id)
            .collect();

        if matching.is_empty() {
            return Err(AppError::NoContent);
        }
        Ok(matching)
    }

    /// Sums the amounts of a client's payments.
    ///
    /// A strictly sequential fold over the materialized record set; an empty
    /// or non-matching set is a successful zero, not an error.
    pub async fn balance_for_client(&self, client_id: &str) -> Result<Decimal, AppError> {
        let payments = self.repo.list_all().await?;

        Ok(payments
            .iter()
            .filter(|p| p.client_id == client_id)
            .fold(Decimal::ZERO, |total, p| total + p.amount))
    }
}
