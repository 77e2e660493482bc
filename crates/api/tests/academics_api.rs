//! HTTP-level integration tests for the academic-structure resources:
//! years, terms, classes, subjects, and class-subject assignments.

mod common;

use axum::http::StatusCode;
use campus_core::roles::Role;
use common::{body_json, create_user, delete_auth, get_auth, login, post_json_auth, put_json_auth};
use sqlx::PgPool;

/// POST an academic year and return its id.
async fn create_year(app: axum::Router, token: &str, label: &str, start: &str, end: &str) -> i64 {
    let body = serde_json::json!({
        "label": label,
        "start_date": start,
        "end_date": end
    });
    let response = post_json_auth(app, "/api/v1/academic-years", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

async fn create_term(app: axum::Router, token: &str, year_id: i64, number: i16) -> i64 {
    let body = serde_json::json!({
        "academic_year_id": year_id,
        "term_number": number,
        "start_date": "2025-09-01",
        "end_date": "2025-12-15"
    });
    let response = post_json_auth(app, "/api/v1/terms", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Access
// ---------------------------------------------------------------------------

/// Academic listings need a logged-in user of any role; writes need admin.
#[sqlx::test(migrations = "../db/migrations")]
async fn listings_require_auth_and_writes_require_admin(pool: PgPool) {
    create_user(&pool, "parent", Role::Parent).await;
    let app = common::build_test_app(pool);

    let response = common::get(app.clone(), "/api/v1/academic-years").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let token = login(app.clone(), "parent").await;
    let response = get_auth(app.clone(), "/api/v1/academic-years", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = serde_json::json!({
        "label": "2025-2026",
        "start_date": "2025-09-01",
        "end_date": "2026-07-31"
    });
    let response = post_json_auth(app, "/api/v1/academic-years", body, &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Admin role required");
}

// ---------------------------------------------------------------------------
// Current year and term
// ---------------------------------------------------------------------------

/// Setting a year current clears the flag on every other year.
#[sqlx::test(migrations = "../db/migrations")]
async fn set_current_year_is_exclusive(pool: PgPool) {
    create_user(&pool, "admin", Role::Admin).await;
    let app = common::build_test_app(pool);
    let token = login(app.clone(), "admin").await;

    let year_a = create_year(app.clone(), &token, "2024-2025", "2024-09-01", "2025-07-31").await;
    let year_b = create_year(app.clone(), &token, "2025-2026", "2025-09-01", "2026-07-31").await;

    let response = put_json_auth(
        app.clone(),
        &format!("/api/v1/academic-years/{year_a}/set-current"),
        serde_json::json!({}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["is_current"], true);

    let response = put_json_auth(
        app.clone(),
        &format!("/api/v1/academic-years/{year_b}/set-current"),
        serde_json::json!({}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_auth(app.clone(), "/api/v1/academic-years", &token).await;
    let json = body_json(response).await;
    let current: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .filter(|y| y["is_current"] == true)
        .collect();
    assert_eq!(current.len(), 1);
    assert_eq!(current[0]["id"], year_b);

    let response = put_json_auth(
        app,
        "/api/v1/academic-years/999999/set-current",
        serde_json::json!({}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// The current-term flag is exclusive across all years, not just within
/// one year.
#[sqlx::test(migrations = "../db/migrations")]
async fn set_current_term_is_exclusive_across_years(pool: PgPool) {
    create_user(&pool, "admin", Role::Admin).await;
    let app = common::build_test_app(pool);
    let token = login(app.clone(), "admin").await;

    let year_a = create_year(app.clone(), &token, "2024-2025", "2024-09-01", "2025-07-31").await;
    let year_b = create_year(app.clone(), &token, "2025-2026", "2025-09-01", "2026-07-31").await;
    let term_a = create_term(app.clone(), &token, year_a, 1).await;
    let term_b = create_term(app.clone(), &token, year_b, 1).await;

    for id in [term_a, term_b] {
        let response = put_json_auth(
            app.clone(),
            &format!("/api/v1/terms/{id}/set-current"),
            serde_json::json!({}),
            &token,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = get_auth(app, "/api/v1/terms", &token).await;
    let json = body_json(response).await;
    let current: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .filter(|t| t["is_current"] == true)
        .collect();
    assert_eq!(current.len(), 1);
    assert_eq!(current[0]["id"], term_b);
}

/// Term listings come joined with their year label.
#[sqlx::test(migrations = "../db/migrations")]
async fn term_listing_carries_year_label(pool: PgPool) {
    create_user(&pool, "admin", Role::Admin).await;
    let app = common::build_test_app(pool);
    let token = login(app.clone(), "admin").await;

    let year = create_year(app.clone(), &token, "2025-2026", "2025-09-01", "2026-07-31").await;
    create_term(app.clone(), &token, year, 1).await;

    let response = get_auth(app, "/api/v1/terms", &token).await;
    let json = body_json(response).await;
    let terms = json.as_array().unwrap();
    assert_eq!(terms.len(), 1);
    assert_eq!(terms[0]["year_label"], "2025-2026");
    assert_eq!(terms[0]["term_number"], 1);
}

/// A fourth term in the same year violates the term-number check.
#[sqlx::test(migrations = "../db/migrations")]
async fn out_of_range_term_number_rejected(pool: PgPool) {
    create_user(&pool, "admin", Role::Admin).await;
    let app = common::build_test_app(pool);
    let token = login(app.clone(), "admin").await;
    let year = create_year(app.clone(), &token, "2025-2026", "2025-09-01", "2026-07-31").await;

    let body = serde_json::json!({
        "academic_year_id": year,
        "term_number": 4,
        "start_date": "2026-05-01",
        "end_date": "2026-07-31"
    });
    let response = post_json_auth(app, "/api/v1/terms", body, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Classes
// ---------------------------------------------------------------------------

/// Class CRUD with the ?year listing filter and the unique
/// (grade, section, year) rule.
#[sqlx::test(migrations = "../db/migrations")]
async fn class_crud_and_year_filter(pool: PgPool) {
    create_user(&pool, "admin", Role::Admin).await;
    let app = common::build_test_app(pool);
    let token = login(app.clone(), "admin").await;

    let year_a = create_year(app.clone(), &token, "2024-2025", "2024-09-01", "2025-07-31").await;
    let year_b = create_year(app.clone(), &token, "2025-2026", "2025-09-01", "2026-07-31").await;

    let body = serde_json::json!({
        "name": "Primary 5A",
        "grade_level": 5,
        "section": "A",
        "academic_year_id": year_a
    });
    let response = post_json_auth(app.clone(), "/api/v1/classes", body.clone(), &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let class = body_json(response).await;

    // Same grade and section again in the same year is a conflict.
    let response = post_json_auth(app.clone(), "/api/v1/classes", body.clone(), &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // The same shape in another year is fine.
    let mut other = body;
    other["academic_year_id"] = serde_json::json!(year_b);
    let response = post_json_auth(app.clone(), "/api/v1/classes", other, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let path = format!("/api/v1/classes?year={year_a}");
    let response = get_auth(app.clone(), &path, &token).await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);

    let path = format!("/api/v1/classes/{}", class["id"]);
    let body = serde_json::json!({ "room_number": "B12", "capacity": 35 });
    let response = put_json_auth(app.clone(), &path, body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["room_number"], "B12");
    assert_eq!(json["capacity"], 35);

    let response = delete_auth(app.clone(), &path, &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = get_auth(app, &path, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Subjects
// ---------------------------------------------------------------------------

/// Subject creation, the duplicate-code conflict, update, and deletion.
#[sqlx::test(migrations = "../db/migrations")]
async fn subject_crud(pool: PgPool) {
    create_user(&pool, "admin", Role::Admin).await;
    create_user(&pool, "teacher", Role::Teacher).await;
    let app = common::build_test_app(pool);
    let admin_token = login(app.clone(), "admin").await;

    let body = serde_json::json!({
        "name": "Mathematics",
        "code": "MATH5",
        "grade_level": 5
    });
    let response = post_json_auth(app.clone(), "/api/v1/subjects", body.clone(), &admin_token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let subject = body_json(response).await;

    let response = post_json_auth(app.clone(), "/api/v1/subjects", body, &admin_token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Any signed-in role can read the catalogue.
    let teacher_token = login(app.clone(), "teacher").await;
    let response = get_auth(app.clone(), "/api/v1/subjects", &teacher_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);

    let path = format!("/api/v1/subjects/{}", subject["id"]);
    let body = serde_json::json!({ "description": "Numbers and shapes" });
    let response = put_json_auth(app.clone(), &path, body.clone(), &admin_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["description"], "Numbers and shapes");

    let response = put_json_auth(app.clone(), &path, body, &teacher_token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = delete_auth(app.clone(), &path, &admin_token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = delete_auth(app, &path, &admin_token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Class-subject assignments
// ---------------------------------------------------------------------------

/// Assigning a subject to a class, the ?class filter, and the
/// one-assignment-per-pair rule.
#[sqlx::test(migrations = "../db/migrations")]
async fn class_subject_assignment(pool: PgPool) {
    create_user(&pool, "admin", Role::Admin).await;
    let app = common::build_test_app(pool);
    let token = login(app.clone(), "admin").await;

    let year = create_year(app.clone(), &token, "2025-2026", "2025-09-01", "2026-07-31").await;
    let body = serde_json::json!({
        "name": "Primary 5A",
        "grade_level": 5,
        "section": "A",
        "academic_year_id": year
    });
    let response = post_json_auth(app.clone(), "/api/v1/classes", body, &token).await;
    let class = body_json(response).await;
    let body = serde_json::json!({
        "name": "Mathematics",
        "code": "MATH5",
        "grade_level": 5
    });
    let response = post_json_auth(app.clone(), "/api/v1/subjects", body, &token).await;
    let subject = body_json(response).await;

    let body = serde_json::json!({
        "class_id": class["id"],
        "subject_id": subject["id"]
    });
    let response = post_json_auth(app.clone(), "/api/v1/class-subjects", body.clone(), &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json_auth(app.clone(), "/api/v1/class-subjects", body, &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let path = format!("/api/v1/class-subjects?class={}", class["id"]);
    let response = get_auth(app.clone(), &path, &token).await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);

    let response = get_auth(app, "/api/v1/class-subjects?class=999999", &token).await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}
