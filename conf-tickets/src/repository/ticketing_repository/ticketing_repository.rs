use super::{Ticketing, TicketingUpdate};
use crate::repository::Error;
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketingRepository: Send + Sync {
    ///
    /// Stores receipt of the participant.
    /// Depending on the backend the latest record of the email is updated
    /// or a new record is created. Either way the record holding
    /// `receipt_photo_path` becomes the latest one for the email.
    /// Fields paid, student, sha256_sum and used are never reset
    ///
    /// ### Returns
    /// ID of the record holding the receipt
    ///
    async fn insert_receipt(&self, email: &str, receipt_photo_path: &str) -> Result<i64, Error>;

    ///
    /// Finds record with the most recent created_at for the email
    ///
    async fn find_latest_by_email(&self, email: &str) -> Result<Option<Ticketing>, Error>;

    ///
    /// Finds record with id that was not used yet
    ///
    async fn find_unused(&self, id: i64) -> Result<Option<Ticketing>, Error>;

    ///
    /// Merges supplied fields into the record. There is no
    /// read-modify-write protection
    ///
    /// ### Errors
    /// - [Error::NoRecordUpdated] when record does not exist
    ///
    async fn update(&self, id: i64, update: TicketingUpdate) -> Result<(), Error>;

    ///
    /// Marks record as used if and only if it was unused
    ///
    /// ### Errors
    /// - [Error::NoRecordUpdated] when
    ///     - record does not exist
    ///     - record has already been used
    ///
    async fn update_used(&self, id: i64) -> Result<(), Error>;
}
