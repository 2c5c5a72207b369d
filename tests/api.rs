//! End-to-end tests of the HTTP surface.

use reqwest::StatusCode;
use serde_json::{json, Value};

mod common;

#[tokio::test]
async fn test_banner() {
    let server = common::start_fast_server().await;
    let res = common::client().get(server.url("/")).send().await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let text = res.text().await.unwrap();
    assert!(text.contains("/api/products"));
    assert!(text.contains("/submit"));
}

#[tokio::test]
async fn test_products_listing_is_stable() {
    let server = common::start_fast_server().await;
    let client = common::client();

    let first: Value = client
        .get(server.url("/api/products"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let second: Value = client
        .get(server.url("/api/products"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(first, second);

    let products = first["products"].as_array().unwrap();
    assert_eq!(products.len(), 10);
    let ids: Vec<u64> = products.iter().map(|p| p["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    assert_eq!(
        products[0],
        json!({"id": 1, "name": "高性能筆記型電腦", "price": 35000})
    );
}

#[tokio::test]
async fn test_submit_success_echoes_values() {
    let server = common::start_fast_server().await;
    let res = common::client()
        .post(server.url("/submit"))
        .json(&json!({"name": "Alice", "email": "alice@example.com"}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "status": "success",
            "message": "data received successfully",
            "data": {"name": "Alice", "email": "alice@example.com"}
        })
    );
}

#[tokio::test]
async fn test_submit_keeps_whitespace() {
    let server = common::start_fast_server().await;
    let res = common::client()
        .post(server.url("/submit"))
        .json(&json!({"name": " Bob ", "email": " bob@example.org "}))
        .send()
        .await
        .unwrap();

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["data"]["name"], " Bob ");
    assert_eq!(body["data"]["email"], " bob@example.org ");
}

#[tokio::test]
async fn test_submit_validation_errors() {
    let server = common::start_fast_server().await;
    let client = common::client();

    let cases = [
        (json!({"email": "alice@example.com"}), "name and email are required fields"),
        (json!({"name": "Alice"}), "name and email are required fields"),
        (json!({"name": "", "email": "alice@example.com"}), "name and email are required fields"),
        (json!({"name": "Alice", "email": null}), "name and email are required fields"),
        (json!({"name": "A", "email": "no-at-sign"}), "email format is incorrect"),
        (json!({"name": "A", "email": "a@b"}), "email format is incorrect"),
    ];

    for (payload, message) in cases {
        let res = client
            .post(server.url("/submit"))
            .json(&payload)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "payload: {payload}");
        let body: Value = res.json().await.unwrap();
        assert_eq!(body, json!({"status": "error", "message": message}), "payload: {payload}");
    }
}

#[tokio::test]
async fn test_submit_non_json_body() {
    let server = common::start_fast_server().await;
    let client = common::client();

    let res = client
        .post(server.url("/submit"))
        .header("content-type", "application/x-www-form-urlencoded")
        .body("name=Alice&email=alice%40example.com")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"status": "error", "message": "request must be JSON format"}));

    let res = client
        .post(server.url("/submit"))
        .header("content-type", "application/json")
        .body("{\"name\": ")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "request must be JSON format");
}

#[tokio::test]
async fn test_cors_and_request_id_headers() {
    let server = common::start_fast_server().await;
    let res = common::client()
        .get(server.url("/api/products"))
        .header("origin", "http://example.test")
        .send()
        .await
        .unwrap();

    assert_eq!(res.headers()["access-control-allow-origin"], "*");
    let id = res.headers()["x-request-id"].to_str().unwrap();
    assert!(uuid::Uuid::parse_str(id).is_ok());
}

#[tokio::test]
async fn test_submit_duplicate_keys_last_value_wins() {
    let server = common::start_fast_server().await;
    let res = common::client()
        .post(server.url("/submit"))
        .header("content-type", "application/json")
        .body(r#"{"name":"A","name":"B","email":"a@b.c"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["data"], json!({"name": "B", "email": "a@b.c"}));
}
