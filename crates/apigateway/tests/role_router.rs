mod common;

use axum::http::{StatusCode, header};
use common::{body_json, get, loading_app, ready_app};
use shared::abstract_trait::SessionServiceTrait;
use tower::ServiceExt;

#[tokio::test]
async fn member_is_redirected_away_from_admin() {
    let app = ready_app().await;
    assert!(app.service.login("demo@gradlink.ng", "password123").await);

    let response = app.router.oneshot(get("/admin")).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/login");
}

#[tokio::test]
async fn admin_is_let_into_admin() {
    let app = ready_app().await;
    assert!(app.service.login("admin@gradlink.ng", "admin123").await);

    let response = app.router.oneshot(get("/admin")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"]["view"], "admin");
    assert_eq!(body["data"]["user"]["role"], "admin");
}

#[tokio::test]
async fn institution_view_only_takes_institutions() {
    let app = ready_app().await;

    assert!(app.service.login("admin@gradlink.ng", "admin123").await);
    let response = app
        .router
        .clone()
        .oneshot(get("/institution"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    assert!(app.service.login("institution@gradlink.ng", "inst123").await);
    let response = app.router.oneshot(get("/institution")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn dashboard_needs_a_session_of_any_role() {
    let app = ready_app().await;

    let response = app.router.clone().oneshot(get("/dashboard")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/login");

    assert!(app.service.login("institution@gradlink.ng", "inst123").await);
    let response = app.router.oneshot(get("/dashboard")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn loading_store_renders_a_placeholder() {
    let app = loading_app().await;

    let response = app.router.clone().oneshot(get("/admin")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.headers()[header::RETRY_AFTER], "1");

    let body = body_json(response).await;
    assert_eq!(body["status"], "loading");

    app.service.restore().await;
    let response = app.router.oneshot(get("/admin")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn redirect_target_is_the_login_view() {
    let app = ready_app().await;

    let response = app.router.oneshot(get("/login")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let accounts = body["data"].as_array().unwrap();
    assert_eq!(accounts.len(), 3);
    assert_eq!(accounts[1]["email"], "admin@gradlink.ng");
    assert_eq!(accounts[1]["role"], "admin");
}
