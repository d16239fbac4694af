use serde_json::{Value, json};

use crate::helpers::{TestApp, TestAppOptions, negative_room, negative_user};

async fn gated_app() -> TestApp {
    TestApp::with_options(TestAppOptions {
        auth_token: Some("s3cret"),
        ..Default::default()
    })
    .await
}

#[tokio::test]
async fn should_admit_caller_with_shared_secret() {
    let app = gated_app().await;
    app.mock_valid_user(1).await;

    let response = app
        .post_verify_user(&json!({"token": "foobar"}), Some("Bearer s3cret"))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response.json::<Value>().await.unwrap()["user_id"],
        "@user:synapse.local"
    );
}

#[tokio::test]
async fn should_return_403_without_calling_homeserver() {
    let app = gated_app().await;
    app.expect_no_homeserver_calls().await;

    let test_cases = [
        None,
        Some("Bearer wrong"),
        Some("Bearer "),
        Some("Basic s3cret"),
        Some("bearer s3cret"),
        Some("s3cret"),
    ];

    for authorization in test_cases {
        let response = app
            .post_verify_user(&json!({"token": "foobar"}), authorization)
            .await;
        assert_eq!(
            response.status().as_u16(),
            403,
            "Failed for header: {:?}",
            authorization
        );
        assert_eq!(response.json::<Value>().await.unwrap(), negative_user());

        let response = app
            .post_verify_user_in_room(
                &json!({"token": "foobar", "room_id": "!barfoo:synapse.local"}),
                authorization,
            )
            .await;
        assert_eq!(response.status().as_u16(), 403);
        assert_eq!(response.json::<Value>().await.unwrap(), negative_room());
    }
}

#[tokio::test]
async fn should_reject_caller_before_validating_input() {
    let app = gated_app().await;
    app.expect_no_homeserver_calls().await;

    let response = app.post_verify_user(&json!({"token": ""}), None).await;

    assert_eq!(response.status().as_u16(), 403);
}

#[tokio::test]
async fn should_return_403_for_unauthenticated_malformed_requests() {
    let app = gated_app().await;
    app.expect_no_homeserver_calls().await;

    let response = app.post_verify_user(&json!({}), None).await;
    assert_eq!(response.status().as_u16(), 403);
    assert_eq!(response.json::<Value>().await.unwrap(), negative_user());

    let response = app
        .post_verify_user_in_room(&json!({"token": "foobar"}), Some("Bearer wrong"))
        .await;
    assert_eq!(response.status().as_u16(), 403);
    assert_eq!(response.json::<Value>().await.unwrap(), negative_room());

    let response = app
        .post_raw("/verify/user", r#"{"token": "foobar"}"#, None)
        .await;
    assert_eq!(response.status().as_u16(), 403);

    let response = app
        .post_raw("/verify/user/in-room", "not json", None)
        .await;
    assert_eq!(response.status().as_u16(), 403);
    assert_eq!(response.json::<Value>().await.unwrap(), negative_room());
}

#[tokio::test]
async fn should_reject_malformed_body_once_caller_is_admitted() {
    let app = gated_app().await;
    app.expect_no_homeserver_calls().await;

    let response = app
        .post_verify_user(&json!({}), Some("Bearer s3cret"))
        .await;

    assert_eq!(response.status().as_u16(), 422);
}

#[tokio::test]
async fn should_admit_everyone_without_shared_secret() {
    let app = TestApp::new().await;
    app.mock_valid_user(1).await;

    let response = app
        .post_verify_user(&json!({"token": "foobar"}), Some("Bearer anything"))
        .await;

    assert_eq!(response.status().as_u16(), 200);
}
