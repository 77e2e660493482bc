pub mod academic_year;
pub mod announcement;
pub mod attendance;
pub mod auth;
pub mod class_subject;
pub mod fee;
pub mod gallery;
pub mod health;
pub mod public_info;
pub mod result;
pub mod school_class;
pub mod student;
pub mod subject;
pub mod teacher;
pub mod term;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                            register parent/teacher (public)
/// /auth/login                               login (public)
/// /auth/refresh                             refresh (public)
/// /auth/logout                              logout (requires auth)
/// /auth/me                                  current user profile
/// /auth/teachers/pending                    unapproved teachers (admin)
/// /auth/teachers/{user_id}/approve          approve a teacher (admin)
///
/// /students                                 list (role-scoped), create (admin/parent)
/// /students/my-children                     requester's own children
/// /students/{id}                            get, update, deactivate (admin)
///
/// /teachers                                 public directory, create own profile
/// /teachers/{id}                            get, update, deactivate (admin)
///
/// /academic-years                           list, create (admin)
/// /academic-years/{id}/set-current          mark current year (admin)
/// /terms                                    list with year labels, create (admin)
/// /terms/{id}/set-current                   mark current term (admin)
/// /classes                                  list (?year=), create (admin)
/// /classes/{id}                             get, update, delete (admin)
/// /subjects                                 list, create (admin)
/// /subjects/{id}                            update, delete (admin)
/// /class-subjects                           list (?class=), assign (admin)
///
/// /results                                  list (?student=, ?term=), create (staff)
/// /results/{id}                             get, update (staff), delete (admin)
/// /results/summary/{student_id}/{term_id}   per-term aggregate
/// /results/trend/{student_id}               aggregates across terms
/// /results/report-card/{student_id}/{term_id}  HTML report card download
///
/// /attendance                               list (?student=, ?date=), mark (staff)
/// /attendance/{id}                          amend (staff)
///
/// /fees                                     list (?student=, ?term=), create (admin)
/// /fees/{id}                                amend; status re-derived (admin)
///
/// /announcements                            live for the viewer (public)
/// /announcements/all                        every announcement (admin)
/// /announcements/{id}                       get, update, delete (admin)
///
/// /gallery                                  published images (?category=), create (admin)
/// /gallery/all                              every image (admin)
/// /gallery/categories                       list, create (admin)
/// /gallery/categories/{id}                  update, delete (admin)
/// /gallery/{id}                             get published, update, delete (admin)
///
/// /public/school-info                       school profile, upsert (admin)
/// /public/news                              published news, create (admin)
/// /public/news/{id}                         one published post
/// /public/stats                             headline counters
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Accounts: registration, sessions, teacher approval.
        .nest("/auth", auth::router())
        // Student records, role-scoped.
        .nest("/students", student::router())
        // Teacher directory and profiles.
        .nest("/teachers", teacher::router())
        // Academic structure: years, terms, classes, subjects.
        .nest("/academic-years", academic_year::router())
        .nest("/terms", term::router())
        .nest("/classes", school_class::router())
        .nest("/subjects", subject::router())
        .nest("/class-subjects", class_subject::router())
        // Academic records: results with summaries and report cards.
        .nest("/results", result::router())
        .nest("/attendance", attendance::router())
        .nest("/fees", fee::router())
        // Content for the school site.
        .nest("/announcements", announcement::router())
        .nest("/gallery", gallery::router())
        .nest("/public", public_info::router())
}
