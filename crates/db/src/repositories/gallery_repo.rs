//! Repositories for the `gallery_categories` and `gallery_images` tables.

use campus_core::types::DbId;
use sqlx::PgPool;

use crate::models::gallery::{
    CreateGalleryCategory, CreateGalleryImage, GalleryCategory, GalleryImage,
    UpdateGalleryCategory, UpdateGalleryImage,
};

const CATEGORY_COLUMNS: &str = "id, name, description, created_at, updated_at";

const IMAGE_COLUMNS: &str = "id, title, description, image_url, category_id, is_published, \
                              event_date, uploaded_by, created_at, updated_at";

/// Provides CRUD operations for gallery categories.
pub struct GalleryCategoryRepo;

impl GalleryCategoryRepo {
    /// Insert a new category, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateGalleryCategory,
    ) -> Result<GalleryCategory, sqlx::Error> {
        let query = format!(
            "INSERT INTO gallery_categories (name, description)
             VALUES ($1, $2)
             RETURNING {CATEGORY_COLUMNS}"
        );
        sqlx::query_as::<_, GalleryCategory>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// List all categories by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<GalleryCategory>, sqlx::Error> {
        let query = format!("SELECT {CATEGORY_COLUMNS} FROM gallery_categories ORDER BY name");
        sqlx::query_as::<_, GalleryCategory>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a category. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGalleryCategory,
    ) -> Result<Option<GalleryCategory>, sqlx::Error> {
        let query = format!(
            "UPDATE gallery_categories SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {CATEGORY_COLUMNS}"
        );
        sqlx::query_as::<_, GalleryCategory>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a category. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM gallery_categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Provides CRUD operations for gallery images.
pub struct GalleryImageRepo;

impl GalleryImageRepo {
    /// Insert a new image, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateGalleryImage,
        uploaded_by: Option<DbId>,
    ) -> Result<GalleryImage, sqlx::Error> {
        let query = format!(
            "INSERT INTO gallery_images (title, description, image_url, category_id,
                                         is_published, event_date, uploaded_by)
             VALUES ($1, $2, $3, $4, COALESCE($5, true), $6, $7)
             RETURNING {IMAGE_COLUMNS}"
        );
        sqlx::query_as::<_, GalleryImage>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(input.category_id)
            .bind(input.is_published)
            .bind(input.event_date)
            .bind(uploaded_by)
            .fetch_one(pool)
            .await
    }

    /// Find a published image by ID.
    pub async fn find_published(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<GalleryImage>, sqlx::Error> {
        let query = format!(
            "SELECT {IMAGE_COLUMNS} FROM gallery_images
             WHERE id = $1 AND is_published = true"
        );
        sqlx::query_as::<_, GalleryImage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every image regardless of publish state, newest first. Admin
    /// console view.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<GalleryImage>, sqlx::Error> {
        let query = format!("SELECT {IMAGE_COLUMNS} FROM gallery_images ORDER BY created_at DESC");
        sqlx::query_as::<_, GalleryImage>(&query)
            .fetch_all(pool)
            .await
    }

    /// List published images, optionally narrowed to one category,
    /// newest first.
    pub async fn list_published(
        pool: &PgPool,
        category_id: Option<DbId>,
    ) -> Result<Vec<GalleryImage>, sqlx::Error> {
        let query = format!(
            "SELECT {IMAGE_COLUMNS} FROM gallery_images
             WHERE is_published = true
               AND ($1::bigint IS NULL OR category_id = $1)
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, GalleryImage>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// Update an image. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGalleryImage,
    ) -> Result<Option<GalleryImage>, sqlx::Error> {
        let query = format!(
            "UPDATE gallery_images SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                image_url = COALESCE($4, image_url),
                category_id = COALESCE($5, category_id),
                is_published = COALESCE($6, is_published),
                event_date = COALESCE($7, event_date),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {IMAGE_COLUMNS}"
        );
        sqlx::query_as::<_, GalleryImage>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(input.category_id)
            .bind(input.is_published)
            .bind(input.event_date)
            .fetch_optional(pool)
            .await
    }

    /// Delete an image. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM gallery_images WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
