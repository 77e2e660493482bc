//! HTTP-level integration tests for the `/teachers` directory: the
//! public projection, self-service profile creation, and admin
//! management.

mod common;

use axum::http::StatusCode;
use axum::Router;
use campus_core::roles::Role;
use common::{body_json, create_user, delete_auth, get, get_auth, login, post_json_auth, put_json_auth};
use sqlx::PgPool;

async fn create_profile(app: Router, token: &str, employee_code: &str) -> serde_json::Value {
    let body = serde_json::json!({
        "first_name": "Bola",
        "last_name": "Ade",
        "qualification": "B.Ed Mathematics",
        "employee_code": employee_code,
        "salary": 250000.0,
        "phone": "0801234567"
    });
    let response = post_json_auth(app, "/api/v1/teachers", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Directory projection
// ---------------------------------------------------------------------------

/// Anonymous visitors get the public projection; admins the full row.
#[sqlx::test(migrations = "../db/migrations")]
async fn directory_projection_depends_on_viewer(pool: PgPool) {
    create_user(&pool, "teacher", Role::Teacher).await;
    create_user(&pool, "admin", Role::Admin).await;
    let app = common::build_test_app(pool);
    let teacher_token = login(app.clone(), "teacher").await;
    create_profile(app.clone(), &teacher_token, "EMP-001").await;

    let response = get(app.clone(), "/api/v1/teachers").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["first_name"], "Bola");
    // Staff-confidential fields are absent from the public projection.
    assert!(rows[0].get("salary").is_none());
    assert!(rows[0].get("phone").is_none());

    let admin_token = login(app.clone(), "admin").await;
    let response = get_auth(app, "/api/v1/teachers", &admin_token).await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap()[0]["salary"], 250000.0);
}

// ---------------------------------------------------------------------------
// Profile creation
// ---------------------------------------------------------------------------

/// A teacher creates their own profile exactly once; other roles cannot.
#[sqlx::test(migrations = "../db/migrations")]
async fn profile_is_self_service_and_unique(pool: PgPool) {
    let teacher_user = create_user(&pool, "teacher", Role::Teacher).await;
    create_user(&pool, "parent", Role::Parent).await;
    let app = common::build_test_app(pool);
    let token = login(app.clone(), "teacher").await;

    let profile = create_profile(app.clone(), &token, "EMP-001").await;
    assert_eq!(profile["user_id"], teacher_user.id);

    let body = serde_json::json!({
        "first_name": "Bola",
        "last_name": "Ade",
        "employee_code": "EMP-002"
    });
    let response = post_json_auth(app.clone(), "/api/v1/teachers", body.clone(), &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let parent_token = login(app.clone(), "parent").await;
    let response = post_json_auth(app, "/api/v1/teachers", body, &parent_token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(
        json["error"],
        "Only teacher accounts can create a teacher profile"
    );
}

// ---------------------------------------------------------------------------
// Updates
// ---------------------------------------------------------------------------

/// Teachers edit their own profile only; admins edit anyone's.
#[sqlx::test(migrations = "../db/migrations")]
async fn update_is_own_profile_or_admin(pool: PgPool) {
    create_user(&pool, "teacher", Role::Teacher).await;
    create_user(&pool, "other_teacher", Role::Teacher).await;
    create_user(&pool, "admin", Role::Admin).await;
    let app = common::build_test_app(pool);
    let token = login(app.clone(), "teacher").await;
    let profile = create_profile(app.clone(), &token, "EMP-001").await;
    let path = format!("/api/v1/teachers/{}", profile["id"]);

    let body = serde_json::json!({ "bio": "Maths lead since 2019" });
    let response = put_json_auth(app.clone(), &path, body.clone(), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["bio"], "Maths lead since 2019");

    let other_token = login(app.clone(), "other_teacher").await;
    let response = put_json_auth(app.clone(), &path, body.clone(), &other_token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["error"], "You can only update your own teacher profile");

    let admin_token = login(app.clone(), "admin").await;
    let body = serde_json::json!({ "salary": 300000.0 });
    let response = put_json_auth(app, &path, body, &admin_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["salary"], 300000.0);
}

// ---------------------------------------------------------------------------
// Deactivation
// ---------------------------------------------------------------------------

/// Deactivated profiles drop out of the public directory but stay
/// visible to admins; the delete is idempotent.
#[sqlx::test(migrations = "../db/migrations")]
async fn deactivation_hides_from_public(pool: PgPool) {
    create_user(&pool, "teacher", Role::Teacher).await;
    create_user(&pool, "admin", Role::Admin).await;
    let app = common::build_test_app(pool);
    let token = login(app.clone(), "teacher").await;
    let profile = create_profile(app.clone(), &token, "EMP-001").await;
    let path = format!("/api/v1/teachers/{}", profile["id"]);

    let response = delete_auth(app.clone(), &path, &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let admin_token = login(app.clone(), "admin").await;
    let response = delete_auth(app.clone(), &path, &admin_token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = delete_auth(app.clone(), &path, &admin_token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app.clone(), &path).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let response = get_auth(app.clone(), &path, &admin_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["is_active"], false);

    let response = delete_auth(app, "/api/v1/teachers/999999", &admin_token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
