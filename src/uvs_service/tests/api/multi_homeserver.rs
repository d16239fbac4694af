use serde_json::{Value, json};

use crate::helpers::{TestApp, TestAppOptions, negative_user};

async fn multi_app(allow_private_addresses: bool) -> TestApp {
    TestApp::with_options(TestAppOptions {
        multi_homeserver: true,
        allow_private_addresses,
        ..Default::default()
    })
    .await
}

#[tokio::test]
async fn should_return_400_without_server_name() {
    let app = multi_app(true).await;
    app.expect_no_homeserver_calls().await;

    let response = app.post_verify_user(&json!({"token": "foobar"}), None).await;

    assert_eq!(response.status().as_u16(), 400);
    assert!(response.json::<Value>().await.unwrap()["error"].is_string());
}

#[tokio::test]
async fn should_return_400_for_invalid_server_name() {
    let app = multi_app(true).await;
    app.expect_no_homeserver_calls().await;

    let body = json!({"token": "foobar", "matrix_server_name": "not a server/name"});
    let response = app.post_verify_user(&body, None).await;

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn should_verify_against_named_homeserver() {
    let app = multi_app(true).await;
    app.mock_valid_user(1).await;

    let body = json!({"token": "foobar", "matrix_server_name": app.homeserver_name()});
    let response = app.post_verify_user(&body, None).await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response.json::<Value>().await.unwrap(),
        json!({"results": {"user": true}, "user_id": "@user:synapse.local"})
    );
}

#[tokio::test]
async fn should_refuse_private_addresses_by_default() {
    let app = multi_app(false).await;
    app.expect_no_homeserver_calls().await;

    let body = json!({"token": "foobar", "matrix_server_name": app.homeserver_name()});
    let response = app.post_verify_user(&body, None).await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.json::<Value>().await.unwrap(), negative_user());
}
