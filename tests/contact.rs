mod common;

use reqwest::StatusCode;
use serde_json::{json, Value};

use common::spawn_app;

#[tokio::test]
async fn test_send_message() {
    let app = spawn_app().await;

    let response = app
        .client
        .post(app.url("/api/contact"))
        .json(&json!({
            "name": "Suresh",
            "email": "suresh@example.com",
            "subject": "Anniversary gift",
            "message": "Could you finish a couple portrait in two weeks?"
        }))
        .send()
        .await
        .expect("Failed to send contact request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response
        .json::<Value>()
        .await
        .expect("Failed to parse contact response JSON");
    assert!(body["id"].as_str().unwrap().starts_with("MSG-"));
}

#[tokio::test]
async fn test_message_requires_fields() {
    let app = spawn_app().await;

    let response = app
        .client
        .post(app.url("/api/contact"))
        .json(&json!({
            "name": "Suresh",
            "email": "suresh-at-example",
            "phone": "9000011111"
        }))
        .send()
        .await
        .expect("Failed to send contact request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response
        .json::<Value>()
        .await
        .expect("Failed to parse error JSON");
    assert_eq!(body["fields"], json!(["email", "message", "subject"]));
}

#[tokio::test]
async fn test_malformed_email_is_not_called_missing() {
    let app = spawn_app().await;

    let response = app
        .client
        .post(app.url("/api/contact"))
        .json(&json!({
            "name": "Suresh",
            "email": "suresh-at-example",
            "subject": "Frames",
            "message": "Do you ship frames?"
        }))
        .send()
        .await
        .expect("Failed to send contact request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response
        .json::<Value>()
        .await
        .expect("Failed to parse error JSON");
    assert_eq!(body["error"], "Please check the highlighted fields.");
    assert_eq!(body["fields"], json!(["email"]));
}
