use serde_json::{Value, json};

use crate::helpers::{TestApp, negative_user};

#[tokio::test]
async fn should_return_200_with_user_id_for_valid_token() {
    let app = TestApp::new().await;
    app.mock_valid_user(1).await;

    let response = app.post_verify_user(&json!({"token": "foobar"}), None).await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response.json::<Value>().await.unwrap(),
        json!({"results": {"user": true}, "user_id": "@user:synapse.local"})
    );
}

#[tokio::test]
async fn should_return_negative_result_when_homeserver_rejects_token() {
    let app = TestApp::new().await;
    app.mock_userinfo(
        401,
        json!({"errcode": "M_UNKNOWN_TOKEN", "error": "Invalid token"}),
        1,
    )
    .await;

    let response = app.post_verify_user(&json!({"token": "foobar"}), None).await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.json::<Value>().await.unwrap(), negative_user());
}

#[tokio::test]
async fn should_return_negative_result_for_malformed_homeserver_response() {
    let app = TestApp::new().await;
    app.mock_userinfo(200, json!({"unexpected": true}), 1).await;

    let response = app.post_verify_user(&json!({"token": "foobar"}), None).await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.json::<Value>().await.unwrap(), negative_user());
}

#[tokio::test]
async fn should_answer_identically_on_repeated_requests() {
    let app = TestApp::new().await;
    app.mock_valid_user(2).await;

    let body = json!({"token": "foobar"});
    let first = app.post_verify_user(&body, None).await;
    let second = app.post_verify_user(&body, None).await;

    assert_eq!(first.status(), second.status());
    assert_eq!(
        first.json::<Value>().await.unwrap(),
        second.json::<Value>().await.unwrap()
    );
}

#[tokio::test]
async fn should_ignore_server_name_in_single_homeserver_mode() {
    let app = TestApp::new().await;
    app.mock_valid_user(1).await;

    let body = json!({"token": "foobar", "matrix_server_name": "elsewhere.example"});
    let response = app.post_verify_user(&body, None).await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response.json::<Value>().await.unwrap()["user_id"],
        "@user:synapse.local"
    );
}

#[tokio::test]
async fn should_return_400_for_empty_token() {
    let app = TestApp::new().await;
    app.expect_no_homeserver_calls().await;

    let response = app.post_verify_user(&json!({"token": "  "}), None).await;

    assert_eq!(response.status().as_u16(), 400);
    assert!(response.json::<Value>().await.unwrap()["error"].is_string());
}

#[tokio::test]
async fn should_reject_malformed_input_without_calling_homeserver() {
    let app = TestApp::new().await;
    app.expect_no_homeserver_calls().await;

    let test_cases = [json!({}), json!({"token": 42}), json!({"tok": "foobar"})];

    for test_case in test_cases.iter() {
        let response = app.post_verify_user(test_case, None).await;
        assert!(
            response.status().is_client_error(),
            "Failed for input: {:?}",
            test_case
        );
    }
}
