//! Announcement model and DTOs.

use campus_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Announcement row. Visibility is derived from the publish window and
/// the viewer's role against `audience`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Announcement {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub audience: String,
    pub priority: String,
    pub is_published: bool,
    pub publish_date: Timestamp,
    pub expiry_date: Option<Timestamp>,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an announcement.
#[derive(Debug, Deserialize)]
pub struct CreateAnnouncement {
    pub title: String,
    pub content: String,
    pub audience: Option<String>,
    pub priority: Option<String>,
    pub is_published: Option<bool>,
    pub publish_date: Option<Timestamp>,
    pub expiry_date: Option<Timestamp>,
}

/// DTO for updating an announcement. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateAnnouncement {
    pub title: Option<String>,
    pub content: Option<String>,
    pub audience: Option<String>,
    pub priority: Option<String>,
    pub is_published: Option<bool>,
    pub publish_date: Option<Timestamp>,
    pub expiry_date: Option<Timestamp>,
}
