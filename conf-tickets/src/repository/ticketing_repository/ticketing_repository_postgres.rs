use super::{entity::TicketingRow, Ticketing, TicketingRepository, TicketingUpdate};
use crate::repository::{self, Error};
use axum::async_trait;
use sqlx::PgPool;

const CREATE_TABLE_TICKETING: &str = r#"
CREATE TABLE IF NOT EXISTS ticketing (
    id                  BIGSERIAL PRIMARY KEY,
    email               TEXT NOT NULL,
    receipt_photo_path  TEXT NOT NULL,
    paid                BOOLEAN NOT NULL DEFAULT FALSE,
    student             BOOLEAN NOT NULL DEFAULT FALSE,
    sha256sum           TEXT NOT NULL DEFAULT '',
    used                BOOLEAN NOT NULL DEFAULT FALSE,
    created_at          TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at          TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    CONSTRAINT unique_ticketing_email UNIQUE (email)
)
"#;

const UPSERT_RECEIPT: &str = r#"
INSERT INTO ticketing (email, receipt_photo_path)
VALUES ($1, $2)
ON CONFLICT (email) DO UPDATE
SET receipt_photo_path = EXCLUDED.receipt_photo_path,
    updated_at = NOW()
RETURNING id
"#;

const FIND_LATEST_BY_EMAIL: &str = r#"
SELECT id, email, receipt_photo_path, paid, student, sha256sum, used, created_at, updated_at
FROM ticketing
WHERE email = $1
ORDER BY created_at DESC, id DESC
LIMIT 1
"#;

const FIND_UNUSED: &str = r#"
SELECT id, email, receipt_photo_path, paid, student, sha256sum, used, created_at, updated_at
FROM ticketing
WHERE id = $1 AND used = FALSE
"#;

const UPDATE: &str = r#"
UPDATE ticketing
SET paid = COALESCE($2, paid),
    student = COALESCE($3, student),
    sha256sum = COALESCE($4, sha256sum),
    updated_at = NOW()
WHERE id = $1
"#;

const UPDATE_USED: &str = r#"
UPDATE ticketing
SET used = TRUE,
    updated_at = NOW()
WHERE id = $1 AND used = FALSE
"#;

///
/// Relational store, one record per email.
/// Every operation is a single statement so it commits atomically
///
pub struct TicketingRepositoryPostgres {
    pool: PgPool,
}

impl TicketingRepositoryPostgres {
    pub async fn new(pool: PgPool) -> Result<Self, sqlx::Error> {
        tracing::debug!(table = "ticketing", "creating table");
        sqlx::query(CREATE_TABLE_TICKETING).execute(&pool).await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl TicketingRepository for TicketingRepositoryPostgres {
    async fn insert_receipt(
        &self,
        email: &str,
        receipt_photo_path: &str,
    ) -> Result<i64, repository::Error> {
        let id = sqlx::query_scalar::<_, i64>(UPSERT_RECEIPT)
            .bind(email)
            .bind(receipt_photo_path)
            .fetch_one(&self.pool)
            .await?;

        Ok(id)
    }

    async fn find_latest_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Ticketing>, repository::Error> {
        let ticketing = sqlx::query_as::<_, TicketingRow>(FIND_LATEST_BY_EMAIL)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?
            .map(Ticketing::from);

        Ok(ticketing)
    }

    async fn find_unused(&self, id: i64) -> Result<Option<Ticketing>, repository::Error> {
        let ticketing = sqlx::query_as::<_, TicketingRow>(FIND_UNUSED)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(Ticketing::from);

        Ok(ticketing)
    }

    async fn update(&self, id: i64, update: TicketingUpdate) -> Result<(), repository::Error> {
        let result = sqlx::query(UPDATE)
            .bind(id)
            .bind(update.paid)
            .bind(update.student)
            .bind(update.sha256_sum)
            .execute(&self.pool)
            .await?;

        match result.rows_affected() == 1 {
            true => Ok(()),
            false => Err(Error::NoRecordUpdated),
        }
    }

    async fn update_used(&self, id: i64) -> Result<(), repository::Error> {
        let result = sqlx::query(UPDATE_USED)
            .bind(id)
            .execute(&self.pool)
            .await?;

        match result.rows_affected() == 1 {
            true => Ok(()),
            false => Err(Error::NoRecordUpdated),
        }
    }
}
