use serde::Serialize;
use time::OffsetDateTime;

#[derive(Serialize)]
pub struct TicketingInsertRecord<'a> {
    #[serde(rename = "Email")]
    pub email: &'a str,
    #[serde(rename = "ReceiptPhotoPath")]
    pub receipt_photo_path: &'a str,

    #[serde(rename = "Paid")]
    pub paid: bool,
    #[serde(rename = "Student")]
    pub student: bool,
    #[serde(rename = "SHA256Sum")]
    pub sha256_sum: &'a str,
    #[serde(rename = "Used")]
    pub used: bool,

    #[serde(rename = "CreatedAt", with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(rename = "UpdatedAt", with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}
