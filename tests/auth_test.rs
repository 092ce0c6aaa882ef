mod common;

use common::{sample_entry, TestApp, TEST_TOKEN};
use reqwest::Client;
use serde_json::json;

fn entries_body() -> serde_json::Value {
    json!({ "entries": [sample_entry("1", "Morning", "Slept well, feeling rested.")] })
}

#[tokio::test]
async fn missing_authorization_header_is_rejected() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/analyze-entries", app.address))
        .json(&entries_body())
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn wrong_scheme_is_rejected() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    for header in ["Basic abc123", "Token abc123"] {
        let response = client
            .post(format!("{}/api/analyze-entries", app.address))
            .header("Authorization", header)
            .json(&entries_body())
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status().as_u16(), 401, "header: {}", header);
    }
}

#[tokio::test]
async fn empty_token_is_rejected() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/analyze-entries", app.address))
        .header("Authorization", "Bearer ")
        .json(&entries_body())
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn any_nonempty_bearer_token_is_accepted() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    for token in [TEST_TOKEN, "another-opaque-value", "x"] {
        let response = client
            .post(format!("{}/api/analyze-entries", app.address))
            .header("Authorization", format!("Bearer {}", token))
            .json(&entries_body())
            .send()
            .await
            .expect("Failed to execute request");

        assert!(response.status().is_success(), "token: {}", token);
    }
}

#[tokio::test]
async fn suggest_topics_requires_a_token() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/suggest-topics", app.address))
        .json(&entries_body())
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 401);
}
