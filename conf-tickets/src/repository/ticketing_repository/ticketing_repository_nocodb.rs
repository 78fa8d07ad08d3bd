use super::{
    entity::{field, TicketingFindRecord, TicketingInsertRecord, TicketingUpdateRecord},
    Ticketing, TicketingRepository, TicketingUpdate,
};
use crate::repository::{self, Error};
use axum::async_trait;
use nocodb_client::{Comparison, ListTableRecordsOptions, NocoDbClient, Sort, Where};
use time::OffsetDateTime;
use tokio::sync::Mutex;

///
/// Spreadsheet-style store. Every receipt is a new record and readers
/// pick the most recent record of the email.
///
/// NocoDB has no conditional update so [TicketingRepository::update_used]
/// is serialized with a lock that only covers this process
///
pub struct TicketingRepositoryNocoDb {
    client: NocoDbClient,
    table_id: String,
    redemption_lock: Mutex<()>,
}

impl TicketingRepositoryNocoDb {
    pub fn new(client: NocoDbClient, table_id: String) -> Self {
        Self {
            client,
            table_id,
            redemption_lock: Mutex::new(()),
        }
    }

    async fn find_one(&self, r#where: Where) -> Result<Option<Ticketing>, repository::Error> {
        let options = ListTableRecordsOptions {
            r#where: Some(r#where),
            sort: vec![
                Sort::descending(field::CREATED_AT),
                Sort::descending(field::ID),
            ],
            limit: Some(1),
            ..Default::default()
        };

        let (records, _) = self
            .client
            .list_table_records::<TicketingFindRecord>(&self.table_id, &options)
            .await?;

        Ok(records.into_iter().next().map(Ticketing::from))
    }

    async fn patch(&self, record: TicketingUpdateRecord<'_>) -> Result<(), repository::Error> {
        let ids = self
            .client
            .update_table_records(&self.table_id, &[record])
            .await?;

        match ids.is_empty() {
            true => Err(Error::NoRecordUpdated),
            false => Ok(()),
        }
    }
}

#[async_trait]
impl TicketingRepository for TicketingRepositoryNocoDb {
    async fn insert_receipt(
        &self,
        email: &str,
        receipt_photo_path: &str,
    ) -> Result<i64, repository::Error> {
        let now = OffsetDateTime::now_utc();
        let record = TicketingInsertRecord {
            email,
            receipt_photo_path,
            paid: false,
            student: false,
            sha256_sum: "",
            used: false,
            created_at: now,
            updated_at: now,
        };

        let ids = self
            .client
            .create_table_records(&self.table_id, &[record])
            .await?;

        ids.first()
            .map(|record_id| record_id.id)
            .ok_or(Error::NoRecordInserted)
    }

    async fn find_latest_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Ticketing>, repository::Error> {
        self.find_one(Where::new(field::EMAIL, Comparison::Eq, email))
            .await
    }

    async fn find_unused(&self, id: i64) -> Result<Option<Ticketing>, repository::Error> {
        self.find_one(
            Where::new(field::ID, Comparison::Eq, id).and(field::USED, Comparison::Eq, false),
        )
        .await
    }

    async fn update(&self, id: i64, update: TicketingUpdate) -> Result<(), repository::Error> {
        self.patch(TicketingUpdateRecord {
            id,
            paid: update.paid,
            student: update.student,
            sha256_sum: update.sha256_sum.as_deref(),
            used: None,
            updated_at: OffsetDateTime::now_utc(),
        })
        .await
    }

    async fn update_used(&self, id: i64) -> Result<(), repository::Error> {
        let _guard = self.redemption_lock.lock().await;

        if self.find_unused(id).await?.is_none() {
            return Err(Error::NoRecordUpdated);
        }

        self.patch(TicketingUpdateRecord {
            id,
            paid: None,
            student: None,
            sha256_sum: None,
            used: Some(true),
            updated_at: OffsetDateTime::now_utc(),
        })
        .await
    }
}
