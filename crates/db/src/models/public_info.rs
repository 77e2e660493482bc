//! Public school profile and news models.

use campus_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// School profile row. The table holds at most one; the repository
/// updates it in place.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SchoolInfo {
    pub id: DbId,
    pub name: String,
    pub tagline: Option<String>,
    pub about: Option<String>,
    pub mission: Option<String>,
    pub vision: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub facebook_url: Option<String>,
    pub twitter_url: Option<String>,
    pub instagram_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub working_days: String,
    pub working_hours: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for upserting the school profile. Optional fields left out keep
/// their stored value.
#[derive(Debug, Deserialize)]
pub struct UpsertSchoolInfo {
    pub name: String,
    pub tagline: Option<String>,
    pub about: Option<String>,
    pub mission: Option<String>,
    pub vision: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub facebook_url: Option<String>,
    pub twitter_url: Option<String>,
    pub instagram_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub working_days: Option<String>,
    pub working_hours: Option<String>,
}

/// News post row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct News {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub image_url: Option<String>,
    pub is_published: bool,
    pub publish_date: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a news post.
#[derive(Debug, Deserialize)]
pub struct CreateNews {
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub image_url: Option<String>,
    pub is_published: Option<bool>,
    pub publish_date: Option<Timestamp>,
}

/// Public visitor counters for the landing page.
#[derive(Debug, Clone, Serialize)]
pub struct SchoolStats {
    pub total_students: i64,
    pub total_teachers: i64,
    pub total_classes: i64,
}
