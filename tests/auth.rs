mod common;

use axum::http::StatusCode;
use common::{body_json, TestApp, TEST_PASSWORD};
use serde_json::json;

#[tokio::test]
async fn login_with_correct_password_sets_session_cookie() {
    let app = TestApp::new();

    let resp = app
        .post_json("/api/admin/auth", &json!({ "password": TEST_PASSWORD }), None)
        .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = resp
        .headers()
        .get("set-cookie")
        .expect("expected a session cookie")
        .to_str()
        .unwrap();
    assert!(cookie.starts_with("admin_session="));
    assert!(cookie.contains("HttpOnly"));
}

#[tokio::test]
async fn login_with_wrong_password_is_rejected_without_cookie() {
    let app = TestApp::new();

    let resp = app
        .post_json("/api/admin/auth", &json!({ "password": "wrong" }), None)
        .await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(resp.headers().get("set-cookie").is_none());
    let body = body_json(resp).await;
    assert_eq!(body["error"], "Invalid password");
}

#[tokio::test]
async fn status_reflects_session_state() {
    let app = TestApp::new();

    let resp = app.get("/api/admin/auth", None).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(resp).await;
    assert_eq!(body["authenticated"], false);

    let cookie = app.login().await;
    let resp = app.get("/api/admin/auth", Some(&cookie)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["authenticated"], true);
}

#[tokio::test]
async fn logout_revokes_the_session() {
    let app = TestApp::new();
    let cookie = app.login().await;

    let resp = app.delete("/api/admin/auth", Some(&cookie)).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // The old cookie no longer satisfies gated endpoints.
    let resp = app
        .post_json(
            "/api/admin/events",
            &json!({
                "title": "After Logout",
                "category": "Corporate Events",
                "date": "2025-01-01",
                "location": "Colombo",
            }),
            Some(&cookie),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn forged_cookie_value_is_not_authenticated() {
    let app = TestApp::new();

    // A non-empty cookie with no matching server-side session must be
    // treated as anonymous.
    let resp = app
        .get(
            "/api/admin/contacts",
            Some("admin_session=ZmFrZS1zZXNzaW9uLXRva2Vu"),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn gated_mutations_require_a_session() {
    let app = TestApp::new();

    let resp = app
        .post_json("/api/admin/events", &json!({ "title": "x" }), None)
        .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = app
        .put_json("/api/admin/events/1", &json!({ "title": "x" }), None)
        .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = app.delete("/api/admin/events/1", None).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = app.get("/api/admin/contacts", None).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = app.get("/api/admin/stats", None).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
