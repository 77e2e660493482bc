//! HTTP-level integration tests for the auth endpoints.
//!
//! Tests cover registration, login, the teacher approval workflow, token
//! refresh with rotation, logout, and account lockout.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_user, get_auth, login, post_json, post_json_auth, TEST_PASSWORD};
use campus_core::roles::Role;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

/// Registering a parent returns 201 with tokens and an approved account.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_parent_success(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "username": "ada_parent",
        "email": "ada@example.com",
        "password": "a-long-enough-password",
        "password2": "a-long-enough-password",
        "role": "PARENT",
        "phone": "0801234567"
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["access_token"].is_string());
    assert!(json["refresh_token"].is_string());
    assert_eq!(json["user"]["username"], "ada_parent");
    assert_eq!(json["user"]["role"], "PARENT");
    assert_eq!(json["user"]["is_approved"], true);
}

/// Registering a teacher succeeds but leaves the account unapproved.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_teacher_starts_unapproved(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "username": "obi_teacher",
        "email": "obi@example.com",
        "password": "a-long-enough-password",
        "password2": "a-long-enough-password",
        "role": "TEACHER"
    });
    let response = post_json(app.clone(), "/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["user"]["is_approved"], false);
    assert_eq!(
        json["message"],
        "Registration successful. Teacher accounts require admin approval."
    );

    // The unapproved teacher cannot log in yet.
    let login_body = serde_json::json!({
        "username": "obi_teacher",
        "password": "a-long-enough-password"
    });
    let response = post_json(app, "/api/v1/auth/login", login_body).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Your account is pending admin approval");
}

/// Mismatched password confirmation is rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_password_mismatch(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "username": "mismatch",
        "email": "mismatch@example.com",
        "password": "a-long-enough-password",
        "password2": "a-different-password",
        "role": "PARENT"
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Password fields didn't match.");
}

/// Passwords below the minimum length are rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_short_password(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "username": "shorty",
        "email": "shorty@example.com",
        "password": "short",
        "password2": "short",
        "role": "PARENT"
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Self-registration as admin is refused.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_admin_role_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "username": "wannabe_admin",
        "email": "admin@example.com",
        "password": "a-long-enough-password",
        "password2": "a-long-enough-password",
        "role": "ADMIN"
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "You can only register as Parent or Teacher.");
}

/// Reusing a taken username surfaces as 409.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_duplicate_username_conflicts(pool: PgPool) {
    create_user(&pool, "taken", Role::Parent).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "username": "taken",
        "email": "other@example.com",
        "password": "a-long-enough-password",
        "password2": "a-long-enough-password",
        "role": "PARENT"
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

/// Successful login returns 200 with access_token, refresh_token, and user info.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let user = create_user(&pool, "loginuser", Role::Admin).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "loginuser", "password": TEST_PASSWORD });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["access_token"].is_string());
    assert!(json["refresh_token"].is_string());
    assert!(json["expires_in"].is_number());
    assert_eq!(json["user"]["id"], user.id);
    assert_eq!(json["user"]["username"], "loginuser");
    assert_eq!(json["user"]["role"], "ADMIN");
}

/// Login with an incorrect password returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    create_user(&pool, "wrongpw", Role::Parent).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "wrongpw", "password": "incorrect_password" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid username or password");
}

/// Login with an unknown username returns the same 401 as a bad password.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_unknown_user(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "ghost", "password": TEST_PASSWORD });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid username or password");
}

/// A deactivated account cannot log in.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_deactivated_account(pool: PgPool) {
    let user = create_user(&pool, "gone", Role::Parent).await;
    sqlx::query("UPDATE users SET is_active = false WHERE id = $1")
        .bind(user.id)
        .execute(&pool)
        .await
        .unwrap();
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "gone", "password": TEST_PASSWORD });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Account is deactivated");
}

/// Five failed attempts lock the account; the right password is then
/// refused until the lock expires.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_lockout_after_repeated_failures(pool: PgPool) {
    create_user(&pool, "lockme", Role::Parent).await;
    let app = common::build_test_app(pool);

    let bad = serde_json::json!({ "username": "lockme", "password": "wrong_password" });
    for _ in 0..5 {
        let response = post_json(app.clone(), "/api/v1/auth/login", bad.clone()).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    let good = serde_json::json!({ "username": "lockme", "password": TEST_PASSWORD });
    let response = post_json(app, "/api/v1/auth/login", good).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Account is temporarily locked. Try again later.");
}

// ---------------------------------------------------------------------------
// Refresh and logout
// ---------------------------------------------------------------------------

/// Refresh returns fresh tokens and rotates the old refresh token out.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_refresh_rotates_tokens(pool: PgPool) {
    create_user(&pool, "refresher", Role::Parent).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "refresher", "password": TEST_PASSWORD });
    let response = post_json(app.clone(), "/api/v1/auth/login", body).await;
    let login_json = body_json(response).await;
    let refresh_token = login_json["refresh_token"].as_str().unwrap().to_string();

    let body = serde_json::json!({ "refresh_token": refresh_token });
    let response = post_json(app.clone(), "/api/v1/auth/refresh", body.clone()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let refreshed = body_json(response).await;
    assert!(refreshed["access_token"].is_string());
    assert_ne!(refreshed["refresh_token"], login_json["refresh_token"]);

    // The rotated-out token no longer works.
    let response = post_json(app, "/api/v1/auth/refresh", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A made-up refresh token is rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_refresh_with_invalid_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "refresh_token": "not-a-real-token" });
    let response = post_json(app, "/api/v1/auth/refresh", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid or expired refresh token");
}

/// Logout revokes every session, so the refresh token stops working.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_logout_revokes_sessions(pool: PgPool) {
    create_user(&pool, "leaver", Role::Parent).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "leaver", "password": TEST_PASSWORD });
    let response = post_json(app.clone(), "/api/v1/auth/login", body).await;
    let login_json = body_json(response).await;
    let access = login_json["access_token"].as_str().unwrap().to_string();
    let refresh = login_json["refresh_token"].as_str().unwrap().to_string();

    let response = post_json_auth(
        app.clone(),
        "/api/v1/auth/logout",
        serde_json::json!({}),
        &access,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let body = serde_json::json!({ "refresh_token": refresh });
    let response = post_json(app, "/api/v1/auth/refresh", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// GET /auth/me returns the caller's own profile.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_me_returns_profile(pool: PgPool) {
    let user = create_user(&pool, "selfie", Role::Teacher).await;
    let app = common::build_test_app(pool);
    let token = login(app.clone(), "selfie").await;

    let response = get_auth(app, "/api/v1/auth/me", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], user.id);
    assert_eq!(json["username"], "selfie");
    assert_eq!(json["role"], "TEACHER");
    // The password hash must never appear in API responses.
    assert!(json.get("password_hash").is_none());
}

/// GET /auth/me without a token returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_me_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = common::get(app, "/api/v1/auth/me").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Missing Authorization header");
}

/// A syntactically broken bearer token is a 401, not anonymous access.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_me_with_garbage_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/auth/me", "garbage.token.here").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid or expired token");
}

// ---------------------------------------------------------------------------
// Teacher approval workflow
// ---------------------------------------------------------------------------

/// Admin approves a pending teacher, who can then log in.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_teacher_approval_flow(pool: PgPool) {
    create_user(&pool, "admin", Role::Admin).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "username": "pending_t",
        "email": "pending@example.com",
        "password": "a-long-enough-password",
        "password2": "a-long-enough-password",
        "role": "TEACHER"
    });
    let response = post_json(app.clone(), "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let registered = body_json(response).await;
    let teacher_id = registered["user"]["id"].as_i64().unwrap();

    let admin_token = login(app.clone(), "admin").await;

    // The pending listing contains the new teacher.
    let response = get_auth(app.clone(), "/api/v1/auth/teachers/pending", &admin_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let pending = body_json(response).await;
    assert!(pending
        .as_array()
        .unwrap()
        .iter()
        .any(|u| u["id"] == teacher_id));

    // Approve.
    let response = post_json_auth(
        app.clone(),
        &format!("/api/v1/auth/teachers/{teacher_id}/approve"),
        serde_json::json!({}),
        &admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Teacher approved successfully");
    assert_eq!(json["user"]["is_approved"], true);

    // The teacher can now log in.
    let body = serde_json::json!({
        "username": "pending_t",
        "password": "a-long-enough-password"
    });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// The pending listing is admin-only.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_pending_teachers_requires_admin(pool: PgPool) {
    create_user(&pool, "parent", Role::Parent).await;
    let app = common::build_test_app(pool);
    let token = login(app.clone(), "parent").await;

    let response = get_auth(app, "/api/v1/auth/teachers/pending", &token).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// Approving an id that is not a teacher account returns 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_approve_non_teacher_is_404(pool: PgPool) {
    create_user(&pool, "admin", Role::Admin).await;
    let parent = create_user(&pool, "parent", Role::Parent).await;
    let app = common::build_test_app(pool);
    let admin_token = login(app.clone(), "admin").await;

    let response = post_json_auth(
        app,
        &format!("/api/v1/auth/teachers/{}/approve", parent.id),
        serde_json::json!({}),
        &admin_token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
