//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{
    Json, Router, middleware,
    routing::get,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use payment_types::{ActiveLookup, ClientLookup, PaymentRepository};

use super::handlers::{self, AppState};
use super::rate_limit::{RateLimiterState, rate_limit_middleware};
use crate::PaymentService;
use crate::openapi::ApiDoc;

/// HTTP Server for the Payment Record API.
pub struct HttpServer<R: PaymentRepository, A: ActiveLookup, C: ClientLookup> {
    state: Arc<AppState<R, A, C>>,
    rate_limiter: Arc<RateLimiterState>,
}

impl<R: PaymentRepository, A: ActiveLookup, C: ClientLookup> HttpServer<R, A, C> {
    /// Creates a new HTTP server with the given service.
    pub fn new(service: PaymentService<R, A, C>) -> Self {
        Self {
            state: Arc::new(AppState { service }),
            rate_limiter: Arc::new(RateLimiterState::default()), // 100 req/min default
        }
    }

    /// Creates a new HTTP server with custom rate limiting.
    pub fn with_rate_limit(service: PaymentService<R, A, C>, requests_per_minute: u32) -> Self {
        use std::time::Duration;
        Self {
            state: Arc::new(AppState { service }),
            rate_limiter: Arc::new(RateLimiterState::new(
                requests_per_minute,
                Duration::from_secs(60),
            )),
        }
    }

    /// Builds the Axum router with all routes.
    ///
    /// The creation discriminator and the payment id share the same path
    /// position, so the four verbs hang off a single dynamic segment.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(handlers::health))
            .route("/api-docs/openapi.json", get(openapi_spec))
            .route("/api/payment", get(handlers::find_all::<R, A, C>))
            .route(
                "/api/payment/{id}",
                get(handlers::find::<R, A, C>)
                    .post(handlers::create::<R, A, C>)
                    .put(handlers::update::<R, A, C>)
                    .delete(handlers::delete::<R, A, C>),
            )
            .route(
                "/api/payment/clientPayments/{idClient}",
                get(handlers::client_payments::<R, A, C>),
            )
            .route(
                "/api/payment/balance/{idClient}",
                get(handlers::balance::<R, A, C>),
            )
            .layer(middleware::from_fn_with_state(
                self.rate_limiter.clone(),
                rate_limit_middleware,
            ))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
