//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use payment_types::domain::{ClientType, Payment, PaymentId};
use payment_types::dto::{Envelope, PaymentDraft};
use rust_decimal::Decimal;
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// List all payments
#[utoipa::path(
    get,
    path = "/api/payment",
    tag = "payments",
    responses(
        (status = 200, description = "Every stored payment", body = Envelope<Vec<Payment>>),
        (status = 400, description = "Empty store ('No Content' envelope)")
    )
)]
async fn find_all() {}

/// Get payment by id
#[utoipa::path(
    get,
    path = "/api/payment/{id}",
    tag = "payments",
    params(
        ("id" = PaymentId, Path, description = "Payment ID (UUID)")
    ),
    responses(
        (status = 200, description = "Payment details", body = Envelope<Payment>),
        (status = 400, description = "Unknown id ('No Content' envelope)")
    )
)]
async fn find() {}

/// Create a payment
///
/// The path segment is the type discriminator: "1" personal, "2" company.
/// Creation runs the active lookup, the client lookup, and the
/// type-compatibility rule before persisting.
#[utoipa::path(
    post,
    path = "/api/payment/{type}",
    tag = "payments",
    params(
        ("type" = String, Path, description = "Type discriminator: 1 = PERSONAL, 2 = COMPANY")
    ),
    request_body = PaymentDraft,
    responses(
        (status = 200, description = "Payment created", body = Envelope<Payment>),
        (status = 400, description = "Validation failure; the envelope message names the failed step")
    )
)]
async fn create() {}

/// Update a payment
#[utoipa::path(
    put,
    path = "/api/payment/{id}",
    tag = "payments",
    params(
        ("id" = PaymentId, Path, description = "Payment ID (UUID)")
    ),
    request_body = PaymentDraft,
    responses(
        (status = 200, description = "Payment updated", body = Envelope<Payment>),
        (status = 404, description = "Payment not found")
    )
)]
async fn update() {}

/// Delete a payment
#[utoipa::path(
    delete,
    path = "/api/payment/{id}",
    tag = "payments",
    params(
        ("id" = PaymentId, Path, description = "Payment ID (UUID)")
    ),
    responses(
        (status = 200, description = "Payment deleted; envelope data is null"),
        (status = 404, description = "Payment not found")
    )
)]
async fn delete() {}

/// List the payments of one client
#[utoipa::path(
    get,
    path = "/api/payment/clientPayments/{idClient}",
    tag = "payments",
    params(
        ("idClient" = String, Path, description = "Client code")
    ),
    responses(
        (status = 200, description = "The client's payments", body = Envelope<Vec<Payment>>),
        (status = 400, description = "No matching payments ('No Content' envelope)")
    )
)]
async fn client_payments() {}

/// Sum the amounts of one client's payments
#[utoipa::path(
    get,
    path = "/api/payment/balance/{idClient}",
    tag = "payments",
    params(
        ("idClient" = String, Path, description = "Client code")
    ),
    responses(
        (status = 200, description = "The summed balance, 0 when nothing matches", body = Envelope<Decimal>)
    )
)]
async fn balance() {}

/// OpenAPI documentation for the Payment Record API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Payment Record Service API",
        version = "1.0.0",
        description = "Persists payment transactions, validates them against the active and client services, and exposes per-client balance aggregation.\n\nEvery endpoint answers with the uniform `{message, status, data}` envelope.",
    ),
    paths(
        health,
        find_all,
        find,
        create,
        update,
        delete,
        client_payments,
        balance,
    ),
    components(
        schemas(
            PaymentDraft,
            Payment,
            PaymentId,
            ClientType,
            Envelope<Payment>,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "payments", description = "Payment record operations"),
    )
)]
pub struct ApiDoc;
