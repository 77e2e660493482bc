//! Handlers for the `/announcements` resource.
//!
//! Reads are open to anonymous visitors but filtered to what the viewer
//! may see: live announcements whose audience matches their role.
//! Admins manage the full set through the `/all` listing and the write
//! endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use campus_core::announcements::{self, Audience, Priority};
use campus_core::error::CoreError;
use campus_core::types::DbId;
use campus_db::models::announcement::{Announcement, CreateAnnouncement, UpdateAnnouncement};
use campus_db::repositories::AnnouncementRepo;
use chrono::Utc;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::MaybeUser;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// GET /api/v1/announcements
///
/// List live announcements visible to the viewer. Anonymous visitors
/// see broadcasts only; signed-in users also see their group's notices;
/// admins see every audience.
pub async fn list_announcements(
    State(state): State<AppState>,
    user: MaybeUser,
) -> AppResult<Json<Vec<Announcement>>> {
    let audiences: Vec<String> = announcements::visible_audiences(user.role())
        .iter()
        .map(|a| a.as_str().to_string())
        .collect();

    let announcements = AnnouncementRepo::list_visible(&state.pool, &audiences).await?;
    Ok(Json(announcements))
}

/// GET /api/v1/announcements/all
///
/// List every announcement regardless of publish state. Admin only.
pub async fn list_all_announcements(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<Announcement>>> {
    let announcements = AnnouncementRepo::list_all(&state.pool).await?;
    Ok(Json(announcements))
}

/// GET /api/v1/announcements/{id}
///
/// Fetch one announcement. Non-admin viewers only reach live rows whose
/// audience matches them; anything else answers 404 rather than
/// revealing that a hidden announcement exists.
pub async fn get_announcement(
    State(state): State<AppState>,
    user: MaybeUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Announcement>> {
    let announcement = AnnouncementRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Announcement",
            id,
        }))?;

    if !user.is_admin() {
        let audience_ok = Audience::parse(&announcement.audience)
            .map(|audience| announcements::audience_matches(audience, user.role()))
            .unwrap_or(false);
        let live = announcements::is_live(
            Utc::now(),
            announcement.is_published,
            announcement.publish_date,
            announcement.expiry_date,
        );
        if !audience_ok || !live {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "Announcement",
                id,
            }));
        }
    }

    Ok(Json(announcement))
}

/// POST /api/v1/announcements
///
/// Publish an announcement. Admin only; the creator is recorded.
pub async fn create_announcement(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreateAnnouncement>,
) -> AppResult<(StatusCode, Json<Announcement>)> {
    validate_enums(input.audience.as_deref(), input.priority.as_deref())?;

    let announcement =
        AnnouncementRepo::create(&state.pool, &input, Some(admin.user_id)).await?;
    Ok((StatusCode::CREATED, Json(announcement)))
}

/// PUT /api/v1/announcements/{id}
pub async fn update_announcement(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAnnouncement>,
) -> AppResult<Json<Announcement>> {
    validate_enums(input.audience.as_deref(), input.priority.as_deref())?;

    let announcement = AnnouncementRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Announcement",
            id,
        }))?;
    Ok(Json(announcement))
}

/// DELETE /api/v1/announcements/{id}
pub async fn delete_announcement(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if AnnouncementRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Announcement",
            id,
        }))
    }
}

fn validate_enums(audience: Option<&str>, priority: Option<&str>) -> AppResult<()> {
    if let Some(audience) = audience {
        Audience::parse(audience)?;
    }
    if let Some(priority) = priority {
        Priority::parse(priority)?;
    }
    Ok(())
}
