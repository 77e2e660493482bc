//! Repositories for the single-row `school_info` table and the `news` table.

use campus_core::types::DbId;
use sqlx::PgPool;

use crate::models::public_info::{CreateNews, News, SchoolInfo, UpsertSchoolInfo};

const INFO_COLUMNS: &str = "id, name, tagline, about, mission, vision, email, phone, address, \
                             facebook_url, twitter_url, instagram_url, linkedin_url, \
                             working_days, working_hours, created_at, updated_at";

const NEWS_COLUMNS: &str = "id, title, content, excerpt, image_url, is_published, publish_date, \
                             created_at, updated_at";

/// Access to the school profile row.
pub struct SchoolInfoRepo;

impl SchoolInfoRepo {
    /// Fetch the school profile. Errors with `RowNotFound` until an
    /// admin has configured one.
    pub async fn get(pool: &PgPool) -> Result<SchoolInfo, sqlx::Error> {
        let query = format!("SELECT {INFO_COLUMNS} FROM school_info LIMIT 1");
        sqlx::query_as::<_, SchoolInfo>(&query).fetch_one(pool).await
    }

    /// Create the profile on first write, update it in place afterwards.
    ///
    /// Runs as one transaction with the existing row locked, so the
    /// table never holds more than one profile. Optional fields left
    /// out of the payload keep their stored value.
    pub async fn upsert(pool: &PgPool, input: &UpsertSchoolInfo) -> Result<SchoolInfo, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let existing: Option<(DbId,)> =
            sqlx::query_as("SELECT id FROM school_info LIMIT 1 FOR UPDATE")
                .fetch_optional(&mut *tx)
                .await?;

        let info = match existing {
            Some((id,)) => Self::update_row(&mut tx, id, input).await?,
            None => Self::insert_row(&mut tx, input).await?,
        };

        tx.commit().await?;
        Ok(info)
    }

    async fn update_row(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        id: DbId,
        input: &UpsertSchoolInfo,
    ) -> Result<SchoolInfo, sqlx::Error> {
        let query = format!(
            "UPDATE school_info SET
                name = $2,
                tagline = COALESCE($3, tagline),
                about = COALESCE($4, about),
                mission = COALESCE($5, mission),
                vision = COALESCE($6, vision),
                email = COALESCE($7, email),
                phone = COALESCE($8, phone),
                address = COALESCE($9, address),
                facebook_url = COALESCE($10, facebook_url),
                twitter_url = COALESCE($11, twitter_url),
                instagram_url = COALESCE($12, instagram_url),
                linkedin_url = COALESCE($13, linkedin_url),
                working_days = COALESCE($14, working_days),
                working_hours = COALESCE($15, working_hours),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {INFO_COLUMNS}"
        );
        sqlx::query_as::<_, SchoolInfo>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.tagline)
            .bind(&input.about)
            .bind(&input.mission)
            .bind(&input.vision)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.address)
            .bind(&input.facebook_url)
            .bind(&input.twitter_url)
            .bind(&input.instagram_url)
            .bind(&input.linkedin_url)
            .bind(&input.working_days)
            .bind(&input.working_hours)
            .fetch_one(&mut **tx)
            .await
    }

    async fn insert_row(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        input: &UpsertSchoolInfo,
    ) -> Result<SchoolInfo, sqlx::Error> {
        let query = format!(
            "INSERT INTO school_info (name, tagline, about, mission, vision, email, phone,
                                      address, facebook_url, twitter_url, instagram_url,
                                      linkedin_url, working_days, working_hours)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12,
                     COALESCE($13, 'Monday - Friday'), COALESCE($14, '8:00 AM - 4:00 PM'))
             RETURNING {INFO_COLUMNS}"
        );
        sqlx::query_as::<_, SchoolInfo>(&query)
            .bind(&input.name)
            .bind(&input.tagline)
            .bind(&input.about)
            .bind(&input.mission)
            .bind(&input.vision)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.address)
            .bind(&input.facebook_url)
            .bind(&input.twitter_url)
            .bind(&input.instagram_url)
            .bind(&input.linkedin_url)
            .bind(&input.working_days)
            .bind(&input.working_hours)
            .fetch_one(&mut **tx)
            .await
    }
}

/// Provides create and published-read operations for news posts.
pub struct NewsRepo;

impl NewsRepo {
    /// Insert a news post, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateNews) -> Result<News, sqlx::Error> {
        let query = format!(
            "INSERT INTO news (title, content, excerpt, image_url, is_published, publish_date)
             VALUES ($1, $2, $3, $4, COALESCE($5, true), COALESCE($6, NOW()))
             RETURNING {NEWS_COLUMNS}"
        );
        sqlx::query_as::<_, News>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.excerpt)
            .bind(&input.image_url)
            .bind(input.is_published)
            .bind(input.publish_date)
            .fetch_one(pool)
            .await
    }

    /// Find a published news post by ID.
    pub async fn find_published(pool: &PgPool, id: DbId) -> Result<Option<News>, sqlx::Error> {
        let query = format!(
            "SELECT {NEWS_COLUMNS} FROM news
             WHERE id = $1 AND is_published = true AND publish_date <= NOW()"
        );
        sqlx::query_as::<_, News>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List published news posts, newest publish date first.
    pub async fn list_published(pool: &PgPool) -> Result<Vec<News>, sqlx::Error> {
        let query = format!(
            "SELECT {NEWS_COLUMNS} FROM news
             WHERE is_published = true AND publish_date <= NOW()
             ORDER BY publish_date DESC"
        );
        sqlx::query_as::<_, News>(&query).fetch_all(pool).await
    }
}
