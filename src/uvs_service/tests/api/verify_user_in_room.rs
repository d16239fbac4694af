use serde_json::{Value, json};

use crate::helpers::{TestApp, TestAppOptions, negative_room};

fn room_request() -> Value {
    json!({"token": "foobar", "room_id": "!barfoo:synapse.local"})
}

#[tokio::test]
async fn should_report_non_member_when_room_is_empty() {
    let app = TestApp::new().await;
    app.mock_valid_user(1).await;
    app.mock_members(&[], 1).await;

    let response = app.post_verify_user_in_room(&room_request(), None).await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response.json::<Value>().await.unwrap(),
        json!({
            "results": {"user": true, "room_membership": false},
            "user_id": "@user:synapse.local"
        })
    );
}

#[tokio::test]
async fn should_report_member_when_user_is_in_room() {
    let app = TestApp::new().await;
    app.mock_valid_user(1).await;
    app.mock_members(&["@other:synapse.local", "@user:synapse.local"], 1)
        .await;

    let response = app.post_verify_user_in_room(&room_request(), None).await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response.json::<Value>().await.unwrap(),
        json!({
            "results": {"user": true, "room_membership": true},
            "user_id": "@user:synapse.local"
        })
    );
}

#[tokio::test]
async fn should_skip_membership_lookup_when_identity_fails() {
    let app = TestApp::new().await;
    app.mock_userinfo(401, json!({"errcode": "M_UNKNOWN_TOKEN"}), 1)
        .await;
    app.mock_members(&["@user:synapse.local"], 0).await;

    let response = app.post_verify_user_in_room(&room_request(), None).await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.json::<Value>().await.unwrap(), negative_room());
}

#[tokio::test]
async fn should_send_admin_token_to_members_api() {
    let app = TestApp::with_options(TestAppOptions {
        admin_token: Some("admin-token"),
        ..Default::default()
    })
    .await;
    app.mock_valid_user(1).await;

    wiremock::Mock::given(wiremock::matchers::path(crate::helpers::MEMBERS_PATH))
        .and(wiremock::matchers::header(
            "authorization",
            "Bearer admin-token",
        ))
        .respond_with(
            wiremock::ResponseTemplate::new(200)
                .set_body_json(json!({"members": ["@user:synapse.local"]})),
        )
        .expect(1)
        .mount(&app.homeserver)
        .await;

    let response = app.post_verify_user_in_room(&room_request(), None).await;

    assert_eq!(
        response.json::<Value>().await.unwrap()["results"]["room_membership"],
        true
    );
}

#[tokio::test]
async fn should_report_non_member_when_members_lookup_fails() {
    let app = TestApp::new().await;
    app.mock_valid_user(1).await;

    let response = app.post_verify_user_in_room(&room_request(), None).await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response.json::<Value>().await.unwrap(),
        json!({
            "results": {"user": true, "room_membership": false},
            "user_id": "@user:synapse.local"
        })
    );
}

#[tokio::test]
async fn should_serve_legacy_path() {
    let app = TestApp::new().await;
    app.mock_valid_user(1).await;
    app.mock_members(&["@user:synapse.local"], 1).await;

    let response = app
        .post_json("/verify/user_in_room", &room_request(), None)
        .await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response.json::<Value>().await.unwrap()["results"]["room_membership"],
        true
    );
}

#[tokio::test]
async fn should_return_400_for_invalid_room_id() {
    let app = TestApp::new().await;
    app.expect_no_homeserver_calls().await;

    let body = json!({"token": "foobar", "room_id": "barfoo"});
    let response = app.post_verify_user_in_room(&body, None).await;

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn should_reject_missing_room_id() {
    let app = TestApp::new().await;
    app.expect_no_homeserver_calls().await;

    let response = app
        .post_verify_user_in_room(&json!({"token": "foobar"}), None)
        .await;

    assert!(response.status().is_client_error());
}
