//! End-to-end tests for the receipt endpoints, driving the router in-process.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use receipt_api::{router, AppState};
use receipt_core::{score, validate, ReceiptPayload};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> (Arc<AppState>, Router) {
    let state = Arc::new(AppState::new());
    (state.clone(), router(state))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn post_json(app: &Router, body: String) -> (StatusCode, Value) {
    let request = Request::post("/receipts/process")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

async fn process(app: &Router, receipt: &Value) -> (StatusCode, Value) {
    post_json(app, receipt.to_string()).await
}

async fn points(app: &Router, id: &str) -> (StatusCode, Value) {
    let request = Request::get(format!("/receipts/{}/points", id))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

fn target_receipt() -> Value {
    json!({
        "retailer": "Target",
        "purchaseDate": "2022-01-01",
        "purchaseTime": "13:01",
        "items": [
            {"shortDescription": "Mountain Dew 12PK", "price": "6.49"},
            {"shortDescription": "Emils Cheese Pizza", "price": "12.25"},
            {"shortDescription": "Knorr Creamy Chicken", "price": "1.26"},
            {"shortDescription": "Doritos Nacho Cheese", "price": "3.35"},
            {"shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00"}
        ],
        "total": "35.35"
    })
}

fn corner_market_receipt() -> Value {
    json!({
        "retailer": "M&M Corner Market",
        "purchaseDate": "2022-03-20",
        "purchaseTime": "14:33",
        "items": [
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"}
        ],
        "total": "9.00"
    })
}

fn invalid_body() -> Value {
    json!({"error": "The receipt is invalid."})
}

#[tokio::test]
async fn test_process_then_lookup_target() {
    let (_, app) = app();

    let (status, body) = process(&app, &target_receipt()).await;
    assert_eq!(status, StatusCode::OK);
    let id = body["id"].as_str().unwrap().to_string();
    assert_eq!(id.len(), 36);

    let (status, body) = points(&app, &id).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"points": 28}));
}

#[tokio::test]
async fn test_process_then_lookup_corner_market() {
    let (_, app) = app();

    let (_, body) = process(&app, &corner_market_receipt()).await;
    let id = body["id"].as_str().unwrap();

    let (status, body) = points(&app, id).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"points": 109}));
}

#[tokio::test]
async fn test_lookup_matches_direct_score() {
    let (_, app) = app();

    for receipt in [target_receipt(), corner_market_receipt()] {
        let payload: ReceiptPayload = serde_json::from_value(receipt.clone()).unwrap();
        let expected = score(&validate(&payload).unwrap());

        let (_, body) = process(&app, &receipt).await;
        let (_, body) = points(&app, body["id"].as_str().unwrap()).await;
        assert_eq!(body["points"].as_u64(), Some(expected));
    }
}

#[tokio::test]
async fn test_each_submission_gets_a_new_id() {
    let (state, app) = app();

    let (_, first) = process(&app, &target_receipt()).await;
    let (_, second) = process(&app, &target_receipt()).await;

    assert_ne!(first["id"], second["id"]);
    assert_eq!(state.store.len().await, 2);
}

#[tokio::test]
async fn test_invalid_retailer_is_rejected() {
    let (state, app) = app();

    let mut receipt = target_receipt();
    receipt["retailer"] = json!("Target$");

    let (status, body) = process(&app, &receipt).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, invalid_body());
    assert!(state.store.is_empty().await);
}

#[tokio::test]
async fn test_missing_fields_are_rejected_without_storing() {
    let (state, app) = app();

    for field in ["retailer", "purchaseDate", "purchaseTime", "items", "total"] {
        let mut receipt = target_receipt();
        receipt.as_object_mut().unwrap().remove(field);

        let (status, body) = process(&app, &receipt).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "missing {}", field);
        assert_eq!(body, invalid_body());
    }

    assert!(state.store.is_empty().await);
}

#[tokio::test]
async fn test_format_errors_are_rejected() {
    let (_, app) = app();

    let cases = [
        ("purchaseDate", json!("01-01-2022")),
        ("purchaseTime", json!("1:01 PM")),
        ("total", json!("1.0")),
        ("items", json!([])),
        ("items", json!([{"shortDescription": "Pepsi"}])),
        ("items", json!([{"shortDescription": "Pepsi!", "price": "1.00"}])),
    ];

    for (field, value) in cases {
        let mut receipt = target_receipt();
        receipt[field] = value.clone();

        let (status, body) = process(&app, &receipt).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{} = {}", field, value);
        assert_eq!(body, invalid_body());
    }
}

#[tokio::test]
async fn test_wrong_json_types_are_rejected() {
    let (_, app) = app();

    let mut receipt = target_receipt();
    receipt["total"] = json!(35.35);

    let (status, body) = process(&app, &receipt).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, invalid_body());
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let (_, app) = app();

    let (status, body) = post_json(&app, "{not json".to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, invalid_body());
}

#[tokio::test]
async fn test_missing_content_type_is_rejected() {
    let (_, app) = app();

    let request = Request::post("/receipts/process")
        .body(Body::from(target_receipt().to_string()))
        .unwrap();

    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, invalid_body());
}

#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let (_, app) = app();
    let (_, body) = process(&app, &target_receipt()).await;
    let issued = body["id"].as_str().unwrap().to_string();

    let (status, _) = points(&app, &issued).await;
    assert_eq!(status, StatusCode::OK);

    let ids = [
        "7fb1377b-b223-49d9-a31a-5a02701dd310".to_string(),
        "not-a-uuid".to_string(),
        issued.to_uppercase(),
        issued.replace('-', ""),
        format!("urn:uuid:{}", issued),
    ];

    for id in &ids {
        let (status, body) = points(&app, id).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "No receipt found for that ID."}));
    }
}

#[tokio::test]
async fn test_health() {
    let (_, app) = app();

    let request = Request::get("/health").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"OK");
}
