mod common;

use axum::http::StatusCode;
use common::{body_json, TestApp};
use serde_json::json;

#[tokio::test]
async fn create_validates_rating_range() {
    let app = TestApp::new();
    let cookie = app.login().await;

    let resp = app
        .post_json(
            "/api/admin/testimonials",
            &json!({
                "name": "Nimal Silva",
                "role": "Founder",
                "company": "Silva & Sons",
                "content": "Superb coverage of our opening night.",
                "rating": 6,
            }),
            Some(&cookie),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "rating must be between 1 and 5");
}

#[tokio::test]
async fn crud_flow() {
    let app = TestApp::new();
    let cookie = app.login().await;

    let resp = app
        .post_json(
            "/api/admin/testimonials",
            &json!({
                "name": "Nimal Silva",
                "role": "Founder",
                "company": "Silva & Sons",
                "content": "Superb coverage of our opening night.",
                "rating": 4,
            }),
            Some(&cookie),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = body_json(resp).await;
    let id = created["id"].as_str().unwrap().to_string();

    let resp = app
        .put_json(
            &format!("/api/admin/testimonials/{id}"),
            &json!({ "rating": 5 }),
            Some(&cookie),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated = body_json(resp).await;
    assert_eq!(updated["rating"], 5);
    assert_eq!(updated["name"], "Nimal Silva");

    let resp = app
        .delete(&format!("/api/admin/testimonials/{id}"), Some(&cookie))
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn public_list_returns_seed_testimonials() {
    let app = TestApp::new();

    let resp = app.get("/api/testimonials", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let testimonials = body_json(resp).await;
    let testimonials = testimonials.as_array().unwrap();
    assert_eq!(testimonials.len(), 3);
    assert_eq!(testimonials[0]["rating"], 5);
}
