use crate::repository::ticketing_repository::entity::{TicketingFindRecord, TicketingRow};
use time::OffsetDateTime;

///
/// One payment/ticket lifecycle. Rows are never deleted
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticketing {
    pub id: i64,

    pub email: String,
    pub receipt_photo_path: String,

    pub paid: bool,
    pub student: bool,
    /// Hex SHA-256 of the rendered ticket, empty until the ticket is issued
    pub sha256_sum: String,
    pub used: bool,

    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<TicketingRow> for Ticketing {
    fn from(value: TicketingRow) -> Self {
        Self {
            id: value.id,
            email: value.email,
            receipt_photo_path: value.receipt_photo_path,
            paid: value.paid,
            student: value.student,
            sha256_sum: value.sha256sum,
            used: value.used,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl From<TicketingFindRecord> for Ticketing {
    fn from(value: TicketingFindRecord) -> Self {
        Self {
            id: value.id,
            email: value.email,
            receipt_photo_path: value.receipt_photo_path,
            paid: value.paid,
            student: value.student,
            sha256_sum: value.sha256_sum,
            used: value.used,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
