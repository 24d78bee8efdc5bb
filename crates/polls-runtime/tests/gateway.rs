mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use common::TestApp;
use polls_runtime::gateway::{REQUEST_ID_HEADER, TRACE_ID_HEADER};
use polls_runtime::GatewayConfig;

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::new();
    let response = app.get("/health").await;
    response.assert_status(StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn root_redirects_to_index() {
    let app = TestApp::new();
    let response = app.get("/").await;
    response.assert_status(StatusCode::PERMANENT_REDIRECT);
    assert_eq!(response.header(header::LOCATION.as_str()), Some("/polls/"));
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let app = TestApp::new();
    app.get("/admin/").await.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn responses_carry_request_ids() {
    let app = TestApp::new();
    let response = app.get("/polls/").await;
    assert!(response.header(REQUEST_ID_HEADER).is_some());
    assert!(response.header(TRACE_ID_HEADER).is_some());

    let not_found = app.get("/polls/1/").await;
    assert!(not_found.header(REQUEST_ID_HEADER).is_some());
}

#[tokio::test]
async fn request_id_is_propagated() {
    let app = TestApp::new();
    let request = Request::get("/polls/")
        .header(REQUEST_ID_HEADER, "req-abc")
        .body(Body::empty())
        .unwrap();
    let response = app.send(request).await;
    assert_eq!(response.header(REQUEST_ID_HEADER), Some("req-abc"));
}

#[tokio::test]
async fn site_title_and_index_limit_follow_config() {
    let app = TestApp::with_config(GatewayConfig {
        index_limit: 1,
        site_title: "Survey".to_string(),
        log_requests: false,
        ..GatewayConfig::default()
    });
    app.question("Older.", -2).await;
    app.question("Newer.", -1).await;

    let response = app.get("/polls/").await;
    assert!(response.body.contains("<title>Latest polls - Survey</title>"));
    assert_eq!(common::listed(&response.body), 1);
    assert!(response.body.contains("Newer."));
}
