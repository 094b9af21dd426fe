mod common;

use axum::http::StatusCode;
use common::{body_json, TestApp};
use serde_json::json;

#[tokio::test]
async fn public_list_is_open_and_mutations_are_gated() {
    let app = TestApp::new();

    let resp = app.get("/api/commercials", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await.as_array().unwrap().len(), 6);

    let resp = app
        .post_json("/api/admin/commercials", &json!({ "title": "x" }), None)
        .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn crud_flow() {
    let app = TestApp::new();
    let cookie = app.login().await;

    let resp = app
        .post_json(
            "/api/admin/commercials",
            &json!({
                "title": "Beverage Spot",
                "category": "FMCG",
                "client": "Ceylon Cola",
                "videoUrl": "https://www.youtube.com/watch?v=spot",
                "duration": "0:30",
            }),
            Some(&cookie),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = body_json(resp).await;
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["videoUrl"], "https://www.youtube.com/watch?v=spot");
    assert_eq!(created["featured"], false);

    let resp = app
        .put_json(
            &format!("/api/admin/commercials/{id}"),
            &json!({ "featured": true }),
            Some(&cookie),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated = body_json(resp).await;
    assert_eq!(updated["featured"], true);
    assert_eq!(updated["client"], "Ceylon Cola");

    let resp = app
        .delete(&format!("/api/admin/commercials/{id}"), Some(&cookie))
        .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .delete(&format!("/api/admin/commercials/{id}"), Some(&cookie))
        .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_requires_client() {
    let app = TestApp::new();
    let cookie = app.login().await;

    let resp = app
        .post_json(
            "/api/admin/commercials",
            &json!({ "title": "No Client", "category": "Misc", "client": "" }),
            Some(&cookie),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "client is required");
}
