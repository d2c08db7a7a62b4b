//! HTTP request handlers.
//!
//! Every endpoint answers with the uniform `{message, status, data}`
//! envelope; the service's tagged results are translated here and nowhere
//! else.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use payment_types::{
    ActiveLookup, AppError, ClientLookup, Envelope, PaymentDraft, PaymentId, PaymentRepository,
};

use crate::PaymentService;

/// Application state shared across handlers.
pub struct AppState<R: PaymentRepository, A: ActiveLookup, C: ClientLookup> {
    pub service: PaymentService<R, A, C>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status()).unwrap_or(StatusCode::BAD_REQUEST);

        (status, Json(Envelope::<serde_json::Value>::failure(&self.0))).into_response()
    }
}

fn parse_payment_id(raw: &str) -> Result<PaymentId, ApiError> {
    raw.parse().map_err(|_| ApiError(AppError::InvalidId))
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// List all payments.
#[tracing::instrument(skip(state))]
pub async fn find_all<R: PaymentRepository, A: ActiveLookup, C: ClientLookup>(
    State(state): State<Arc<AppState<R, A, C>>>,
) -> Result<impl IntoResponse, ApiError> {
    let payments = state.service.find_all().await?;
    Ok(Json(Envelope::done(payments)))
}

/// Get one payment by id.
#[tracing::instrument(skip(state), fields(payment_id = %id))]
pub async fn find<R: PaymentRepository, A: ActiveLookup, C: ClientLookup>(
    State(state): State<Arc<AppState<R, A, C>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_payment_id(&id)?;
    let payment = state.service.find(id).await?;
    Ok(Json(Envelope::done(payment)))
}

/// Create a payment; the path segment is the type discriminator
/// ("1" personal, "2" company).
#[tracing::instrument(skip(state, draft), fields(discriminator = %discriminator))]
pub async fn create<R: PaymentRepository, A: ActiveLookup, C: ClientLookup>(
    State(state): State<Arc<AppState<R, A, C>>>,
    Path(discriminator): Path<String>,
    Json(draft): Json<PaymentDraft>,
) -> Result<impl IntoResponse, ApiError> {
    let payment = state.service.create(&discriminator, draft).await?;
    Ok(Json(Envelope::done(payment)))
}

/// Update a payment by id.
#[tracing::instrument(skip(state, draft), fields(payment_id = %id))]
pub async fn update<R: PaymentRepository, A: ActiveLookup, C: ClientLookup>(
    State(state): State<Arc<AppState<R, A, C>>>,
    Path(id): Path<String>,
    Json(draft): Json<PaymentDraft>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_payment_id(&id)?;
    let payment = state.service.update(id, draft).await?;
    Ok(Json(Envelope::done(payment)))
}

/// Delete a payment by id.
#[tracing::instrument(skip(state), fields(payment_id = %id))]
pub async fn delete<R: PaymentRepository, A: ActiveLookup, C: ClientLookup>(
    State(state): State<Arc<AppState<R, A, C>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_payment_id(&id)?;
    state.service.delete(id).await?;
    Ok(Json(Envelope::<serde_json::Value>::done_empty()))
}

/// List the payments of one client.
#[tracing::instrument(skip(state), fields(client_id = %id_client))]
pub async fn client_payments<R: PaymentRepository, A: ActiveLookup, C: ClientLookup>(
    State(state): State<Arc<AppState<R, A, C>>>,
    Path(id_client): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let payments = state.service.payments_for_client(&id_client).await?;
    Ok(Json(Envelope::done(payments)))
}

/// Sum the amounts of one client's payments.
#[tracing::instrument(skip(state), fields(client_id = %id_client))]
pub async fn balance<R: PaymentRepository, A: ActiveLookup, C: ClientLookup>(
    State(state): State<Arc<AppState<R, A, C>>>,
    Path(id_client): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let total = state.service.balance_for_client(&id_client).await?;
    Ok(Json(Envelope::done(total)))
}
