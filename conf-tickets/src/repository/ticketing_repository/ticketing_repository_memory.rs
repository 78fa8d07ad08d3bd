use super::{Ticketing, TicketingRepository, TicketingUpdate};
use crate::repository::{self, Error};
use axum::async_trait;
use std::sync::Mutex;
use time::OffsetDateTime;

///
/// Store used by service tests. Follows relational semantics,
/// one record per email
///
#[derive(Default)]
pub struct TicketingRepositoryMemory {
    records: Mutex<Vec<Ticketing>>,
}

impl TicketingRepositoryMemory {
    pub fn records(&self) -> Vec<Ticketing> {
        self.records.lock().unwrap().clone()
    }

    pub fn set_used(&self, id: i64, used: bool) {
        let mut records = self.records.lock().unwrap();
        if let Some(record) = records.iter_mut().find(|record| record.id == id) {
            record.used = used;
        }
    }
}

#[async_trait]
impl TicketingRepository for TicketingRepositoryMemory {
    async fn insert_receipt(
        &self,
        email: &str,
        receipt_photo_path: &str,
    ) -> Result<i64, repository::Error> {
        let mut records = self.records.lock().unwrap();
        let now = OffsetDateTime::now_utc();

        if let Some(record) = records.iter_mut().find(|record| record.email == email) {
            record.receipt_photo_path = receipt_photo_path.to_string();
            record.updated_at = now;
            return Ok(record.id);
        }

        let id = records.len() as i64 + 1;
        records.push(Ticketing {
            id,
            email: email.to_string(),
            receipt_photo_path: receipt_photo_path.to_string(),
            paid: false,
            student: false,
            sha256_sum: String::new(),
            used: false,
            created_at: now,
            updated_at: now,
        });

        Ok(id)
    }

    async fn find_latest_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Ticketing>, repository::Error> {
        let records = self.records.lock().unwrap();
        let ticketing = records
            .iter()
            .filter(|record| record.email == email)
            .max_by_key(|record| (record.created_at, record.id))
            .cloned();

        Ok(ticketing)
    }

    async fn find_unused(&self, id: i64) -> Result<Option<Ticketing>, repository::Error> {
        let records = self.records.lock().unwrap();
        let ticketing = records
            .iter()
            .find(|record| record.id == id && !record.used)
            .cloned();

        Ok(ticketing)
    }

    async fn update(&self, id: i64, update: TicketingUpdate) -> Result<(), repository::Error> {
        let mut records = self.records.lock().unwrap();
        let record = records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(Error::NoRecordUpdated)?;

        if let Some(paid) = update.paid {
            record.paid = paid;
        }
        if let Some(student) = update.student {
            record.student = student;
        }
        if let Some(sha256_sum) = update.sha256_sum {
            record.sha256_sum = sha256_sum;
        }
        record.updated_at = OffsetDateTime::now_utc();

        Ok(())
    }

    async fn update_used(&self, id: i64) -> Result<(), repository::Error> {
        let mut records = self.records.lock().unwrap();
        let record = records
            .iter_mut()
            .find(|record| record.id == id && !record.used)
            .ok_or(Error::NoRecordUpdated)?;

        record.used = true;
        record.updated_at = OffsetDateTime::now_utc();

        Ok(())
    }
}
