//! Repository for the `announcements` table.

use campus_core::types::DbId;
use sqlx::PgPool;

use crate::models::announcement::{Announcement, CreateAnnouncement, UpdateAnnouncement};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, content, audience, priority, is_published, publish_date, \
                        expiry_date, created_by, created_at, updated_at";

/// Provides CRUD operations for announcements.
pub struct AnnouncementRepo;

impl AnnouncementRepo {
    /// Insert a new announcement, returning the created row. Missing
    /// fields fall back to the table defaults.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAnnouncement,
        created_by: Option<DbId>,
    ) -> Result<Announcement, sqlx::Error> {
        let query = format!(
            "INSERT INTO announcements (title, content, audience, priority, is_published,
                                        publish_date, expiry_date, created_by)
             VALUES ($1, $2, COALESCE($3, 'ALL'), COALESCE($4, 'MEDIUM'),
                     COALESCE($5, true), COALESCE($6, NOW()), $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Announcement>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.audience)
            .bind(&input.priority)
            .bind(input.is_published)
            .bind(input.publish_date)
            .bind(input.expiry_date)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// Find an announcement by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Announcement>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM announcements WHERE id = $1");
        sqlx::query_as::<_, Announcement>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List announcements that are currently live for the given
    /// audiences: published, past their publish time and not expired.
    /// Newest publish date first.
    pub async fn list_visible(
        pool: &PgPool,
        audiences: &[String],
    ) -> Result<Vec<Announcement>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM announcements
             WHERE is_published = true
               AND publish_date <= NOW()
               AND (expiry_date IS NULL OR expiry_date >= NOW())
               AND audience = ANY($1)
             ORDER BY publish_date DESC"
        );
        sqlx::query_as::<_, Announcement>(&query)
            .bind(audiences)
            .fetch_all(pool)
            .await
    }

    /// List every announcement regardless of state, newest first. Admin
    /// console view.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Announcement>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM announcements ORDER BY created_at DESC");
        sqlx::query_as::<_, Announcement>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update an announcement. Only non-`None` fields in `input` are
    /// applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAnnouncement,
    ) -> Result<Option<Announcement>, sqlx::Error> {
        let query = format!(
            "UPDATE announcements SET
                title = COALESCE($2, title),
                content = COALESCE($3, content),
                audience = COALESCE($4, audience),
                priority = COALESCE($5, priority),
                is_published = COALESCE($6, is_published),
                publish_date = COALESCE($7, publish_date),
                expiry_date = COALESCE($8, expiry_date),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Announcement>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.audience)
            .bind(&input.priority)
            .bind(input.is_published)
            .bind(input.publish_date)
            .bind(input.expiry_date)
            .fetch_optional(pool)
            .await
    }

    /// Delete an announcement. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM announcements WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
