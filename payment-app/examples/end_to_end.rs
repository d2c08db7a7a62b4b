//! End-to-end example driving the full validation chain against a running
//! server, with the two upstream services emulated in-process.
//!
//! Run with: cargo run -p payment-app --example end_to_end

use std::net::SocketAddr;

use axum::{Json, Router, extract::Path, routing::get};
use rust_decimal_macros::dec;
use tempfile::tempdir;
use tokio::net::TcpListener;

use payment_client::PaymentClient;
use payment_hex::{PaymentService, inbound::HttpServer};
use payment_lookups::{DEFAULT_TIMEOUT, HttpActiveLookup, HttpClientLookup};
use payment_repo::build_repo;
use payment_types::{ClientType, PaymentDraft};

/// Emulated active-management service: "A1" and "A2" exist.
async fn active_by_code(Path(id): Path<String>) -> Json<serde_json::Value> {
    let data = match id.as_str() {
        "A1" | "A2" => serde_json::json!({ "id": id, "name": "Checking" }),
        _ => serde_json::Value::Null,
    };
    Json(serde_json::json!({ "message": "Done", "status": 200, "data": data }))
}

/// Emulated client-management service: "C1" is personal, "C2" is a company.
async fn client_by_code(Path(id): Path<String>) -> Json<serde_json::Value> {
    let data = match id.as_str() {
        "C1" => serde_json::json!({ "id": id, "name": "Ada", "type": "PERSONAL" }),
        "C2" => serde_json::json!({ "id": id, "name": "Acme", "type": "COMPANY" }),
        _ => serde_json::Value::Null,
    };
    Json(serde_json::json!({ "message": "Done", "status": 200, "data": data }))
}

async fn serve_on_random_port(router: Router) -> anyhow::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, router.into_make_service())
            .await
            .unwrap();
    });
    Ok(format!("http://{}", addr))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    // Spin up the two emulated upstream services.
    let active_url =
        serve_on_random_port(Router::new().route("/api/active/{id}", get(active_by_code))).await?;
    let client_url =
        serve_on_random_port(Router::new().route("/api/client/{id}", get(client_by_code))).await?;
    println!("🔍 Active service: {active_url}");
    println!("🔍 Client service: {client_url}");

    // Use a temp file-backed SQLite DB.
    let tmp = tempdir()?;
    let db_path = tmp.path().join("payments.db");
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    println!("💾 Database: {db_url}");

    let repo = build_repo(&db_url).await?;
    let actives = HttpActiveLookup::new(&active_url, DEFAULT_TIMEOUT)?;
    let clients = HttpClientLookup::new(&client_url, DEFAULT_TIMEOUT)?;

    let service = PaymentService::new(repo, actives, clients);
    let router = HttpServer::new(service).router();
    let api_url = serve_on_random_port(router).await?;
    println!("🚀 Payment service: {api_url}\n");

    let client = PaymentClient::new(&api_url);

    // A personal payment for the personal client passes the chain.
    let payment = client
        .create(
            ClientType::Personal,
            &PaymentDraft {
                active_id: "A1".to_string(),
                client_id: "C1".to_string(),
                amount: dec!(50.0),
            },
        )
        .await?;
    println!("✓ Created payment {} for C1", payment.id);

    let refund = client
        .create(
            ClientType::Personal,
            &PaymentDraft {
                active_id: "A1".to_string(),
                client_id: "C1".to_string(),
                amount: dec!(-20.5),
            },
        )
        .await?;
    println!("✓ Created refund {} for C1", refund.id);

    // A personal payment for the company client fails the type rule.
    let mismatch = client
        .create(
            ClientType::Personal,
            &PaymentDraft {
                active_id: "A1".to_string(),
                client_id: "C2".to_string(),
                amount: dec!(10.0),
            },
        )
        .await;
    println!("✗ Mismatched create rejected: {}", mismatch.unwrap_err());

    // An unknown active fails before the client lookup runs.
    let no_active = client
        .create(
            ClientType::Personal,
            &PaymentDraft {
                active_id: "A-missing".to_string(),
                client_id: "C1".to_string(),
                amount: dec!(10.0),
            },
        )
        .await;
    println!("✗ Unknown active rejected: {}", no_active.unwrap_err());

    // Listing and aggregation.
    let payments = client.client_payments("C1").await?;
    println!("\nC1 has {} payments", payments.len());

    let balance = client.balance("C1").await?;
    println!("C1 balance: {balance}");

    Ok(())
}
