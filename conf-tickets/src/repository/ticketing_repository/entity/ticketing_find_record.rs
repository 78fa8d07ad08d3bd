use super::de_lenient;
use serde::Deserialize;
use time::OffsetDateTime;

#[derive(Deserialize)]
pub struct TicketingFindRecord {
    #[serde(rename = "Id")]
    pub id: i64,

    #[serde(rename = "Email", with = "de_lenient::string")]
    pub email: String,
    #[serde(rename = "ReceiptPhotoPath", default, with = "de_lenient::string")]
    pub receipt_photo_path: String,

    #[serde(rename = "Paid", default, with = "de_lenient::boolean")]
    pub paid: bool,
    #[serde(rename = "Student", default, with = "de_lenient::boolean")]
    pub student: bool,
    #[serde(rename = "SHA256Sum", default, with = "de_lenient::string")]
    pub sha256_sum: String,
    #[serde(rename = "Used", default, with = "de_lenient::boolean")]
    pub used: bool,

    #[serde(rename = "CreatedAt", with = "de_lenient::datetime")]
    pub created_at: OffsetDateTime,
    #[serde(rename = "UpdatedAt", with = "de_lenient::datetime")]
    pub updated_at: OffsetDateTime,
}
