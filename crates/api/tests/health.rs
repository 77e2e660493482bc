//! Health endpoint and cross-cutting middleware behaviour.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get};
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "../db/migrations")]
async fn health_reports_db_status(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
    assert!(json["version"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_path_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v2/nope").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Every response carries an `x-request-id` the middleware generated.
#[sqlx::test(migrations = "../db/migrations")]
async fn responses_carry_a_request_id(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/health").await;

    let id = response
        .headers()
        .get("x-request-id")
        .expect("x-request-id header missing")
        .to_str()
        .unwrap();
    assert!(
        uuid::Uuid::parse_str(id).is_ok(),
        "x-request-id should be a UUID, got: {id}"
    );
}

/// A preflight from the configured dev origin is granted.
#[sqlx::test(migrations = "../db/migrations")]
async fn cors_preflight_allows_dev_origin(pool: PgPool) {
    let app = common::build_test_app(pool);

    let preflight = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/v1/announcements")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type,authorization")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(preflight).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .expect("allow-origin header missing"),
        "http://localhost:5173"
    );
    let methods = response
        .headers()
        .get("access-control-allow-methods")
        .expect("allow-methods header missing")
        .to_str()
        .unwrap();
    assert!(methods.contains("POST"), "got: {methods}");
}

/// An origin outside the allow-list gets no allow-origin header back.
#[sqlx::test(migrations = "../db/migrations")]
async fn cors_preflight_ignores_unknown_origin(pool: PgPool) {
    let app = common::build_test_app(pool);

    let preflight = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/v1/announcements")
        .header("Origin", "https://evil.example")
        .header("Access-Control-Request-Method", "GET")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(preflight).await.unwrap();

    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_none());
}
