//! Integration tests for the HTTP surface.
//!
//! These verify the envelope contract end-to-end over the in-memory record
//! store with scripted lookup stubs, including rate limiting behavior.

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use payment_hex::{PaymentService, inbound::HttpServer};
use payment_repo::MemoryRepo;
use payment_types::{
    ActiveLookup, ActiveRecord, ClientLookup, ClientRecord, ClientType, LookupError, LookupReply,
};

/// Active lookup stub that resolves every code.
struct StubActive;

#[async_trait]
impl ActiveLookup for StubActive {
    async fn find_by_code(
        &self,
        code: &str,
    ) -> Result<Option<LookupReply<ActiveRecord>>, LookupError> {
        Ok(Some(LookupReply {
            message: Some("Done".to_string()),
            status: Some(200),
            data: Some(ActiveRecord {
                id: Some(code.to_string()),
                name: None,
            }),
        }))
    }
}

/// Client lookup stub that resolves every code with a fixed classification.
struct StubClient(ClientType);

#[async_trait]
impl ClientLookup for StubClient {
    async fn find_by_code(
        &self,
        code: &str,
    ) -> Result<Option<LookupReply<ClientRecord>>, LookupError> {
        Ok(Some(LookupReply {
            message: Some("Done".to_string()),
            status: Some(200),
            data: Some(ClientRecord {
                id: Some(code.to_string()),
                name: None,
                client_type: self.0,
            }),
        }))
    }
}

fn test_server(client_type: ClientType) -> HttpServer<MemoryRepo, StubActive, StubClient> {
    let service = PaymentService::new(MemoryRepo::new(), StubActive, StubClient(client_type));
    HttpServer::new(service)
}

fn create_request(discriminator: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(format!("/api/payment/{}", discriminator))
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

const DRAFT: &str = r#"{"activeId":"A1","clientId":"C1","amount":50.0}"#;

#[tokio::test]
async fn test_create_success_envelope() {
    let app = test_server(ClientType::Personal).router();

    let response = app.oneshot(create_request("1", DRAFT)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Done");
    assert_eq!(json["status"], 200);
    assert_eq!(json["data"]["activeId"], "A1");
    assert_eq!(json["data"]["clientId"], "C1");
    assert_eq!(json["data"]["typeCode"], "PERSONAL");
    assert!(json["data"]["id"].is_string());
    assert!(json["data"]["dateRegistered"].is_string());
}

#[tokio::test]
async fn test_create_type_mismatch_envelope() {
    let app = test_server(ClientType::Company).router();

    let response = app.oneshot(create_request("1", DRAFT)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "The Active is not enabled for the client");
    assert_eq!(json["status"], 400);
    assert!(json["data"].is_null());
}

#[tokio::test]
async fn test_list_empty_store_is_no_content() {
    let app = test_server(ClientType::Personal).router();

    let response = app.oneshot(get_request("/api/payment")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "No Content");
    assert_eq!(json["status"], 400);
}

#[tokio::test]
async fn test_malformed_id_is_rejected() {
    let app = test_server(ClientType::Personal).router();

    let response = app
        .clone()
        .oneshot(get_request("/api/payment/not-a-uuid"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Invalid payment id");
}

#[tokio::test]
async fn test_delete_missing_is_not_found() {
    let app = test_server(ClientType::Personal).router();

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri(format!("/api/payment/{}", uuid::Uuid::new_v4()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Not found");
    assert_eq!(json["status"], 404);
}

#[tokio::test]
async fn test_balance_with_no_records_is_zero() {
    let app = test_server(ClientType::Personal).router();

    let response = app
        .oneshot(get_request("/api/payment/balance/C9"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Done");
    assert_eq!(json["data"], 0.0);
}

#[tokio::test]
async fn test_full_payment_lifecycle() {
    let app = test_server(ClientType::Personal).router();

    // Create two payments for C1 and one for C2.
    for body in [
        r#"{"activeId":"A1","clientId":"C1","amount":50.0}"#,
        r#"{"activeId":"A1","clientId":"C1","amount":-20.5}"#,
        r#"{"activeId":"A2","clientId":"C2","amount":99.0}"#,
    ] {
        let response = app
            .clone()
            .oneshot(create_request("1", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    // Filtered listing.
    let response = app
        .clone()
        .oneshot(get_request("/api/payment/clientPayments/C1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    // Balance folds only C1 amounts.
    let response = app
        .clone()
        .oneshot(get_request("/api/payment/balance/C1"))
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["data"], 29.5);

    // Pick one id, update it, then delete it.
    let response = app
        .clone()
        .oneshot(get_request("/api/payment/clientPayments/C2"))
        .await
        .unwrap();
    let json = body_json(response).await;
    let id = json["data"][0]["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::PUT)
                .uri(format!("/api/payment/{}", id))
                .header("Content-Type", "application/json")
                .body(Body::from(
                    r#"{"activeId":"A2","clientId":"C2","amount":75.0}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["amount"], 75.0);
    assert!(json["data"]["dateUpdated"].is_string());

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri(format!("/api/payment/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Done");
    assert!(json["data"].is_null());

    // The deleted record no longer resolves.
    let response = app
        .oneshot(get_request(&format!("/api/payment/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "No Content");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = test_server(ClientType::Personal).router();

    let response = app
        .oneshot(get_request("/api-docs/openapi.json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["paths"]["/api/payment"].is_object());
    assert!(json["paths"]["/api/payment/balance/{idClient}"].is_object());
}

#[tokio::test]
async fn test_rate_limiting_returns_429_when_exceeded() {
    let service = PaymentService::new(
        MemoryRepo::new(),
        StubActive,
        StubClient(ClientType::Personal),
    );
    let app = HttpServer::with_rate_limit(service, 3).router();

    fn limited_request() -> Request<Body> {
        Request::builder()
            .uri("/api/payment")
            .header("x-forwarded-for", "203.0.113.7")
            .body(Body::empty())
            .unwrap()
    }

    for _ in 1..=3 {
        let response = app.clone().oneshot(limited_request()).await.unwrap();
        assert_ne!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    let response = app.clone().oneshot(limited_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

    let json = body_json(response).await;
    assert!(
        json["error"]
            .as_str()
            .unwrap()
            .contains("Rate limit exceeded")
    );
    assert_eq!(json["retry_after_seconds"], 60);
}

#[tokio::test]
async fn test_rate_limiting_health_endpoint_bypassed() {
    let service = PaymentService::new(
        MemoryRepo::new(),
        StubActive,
        StubClient(ClientType::Personal),
    );
    let app = HttpServer::with_rate_limit(service, 1).router();

    for _ in 0..10 {
        let response = app.clone().oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}

#[tokio::test]
async fn test_rate_limiting_per_caller_isolation() {
    let service = PaymentService::new(
        MemoryRepo::new(),
        StubActive,
        StubClient(ClientType::Personal),
    );
    let app = HttpServer::with_rate_limit(service, 1).router();

    fn from_addr(addr: &str) -> Request<Body> {
        Request::builder()
            .uri("/api/payment")
            .header("x-forwarded-for", addr.to_string())
            .body(Body::empty())
            .unwrap()
    }

    // Caller A uses up its quota.
    let _ = app.clone().oneshot(from_addr("203.0.113.1")).await.unwrap();
    let response = app.clone().oneshot(from_addr("203.0.113.1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

    // Caller B still has its own.
    let response = app.clone().oneshot(from_addr("203.0.113.2")).await.unwrap();
    assert_ne!(response.status(), StatusCode::TOO_MANY_REQUESTS);
}
