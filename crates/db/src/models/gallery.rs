//! Gallery category and image models and DTOs.

use campus_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GalleryCategory {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize)]
pub struct CreateGalleryCategory {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateGalleryCategory {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Gallery image row. `image_url` points at externally hosted media.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GalleryImage {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub category_id: Option<DbId>,
    pub is_published: bool,
    pub event_date: Option<NaiveDate>,
    pub uploaded_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize)]
pub struct CreateGalleryImage {
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub category_id: Option<DbId>,
    pub is_published: Option<bool>,
    pub event_date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateGalleryImage {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub category_id: Option<DbId>,
    pub is_published: Option<bool>,
    pub event_date: Option<NaiveDate>,
}
