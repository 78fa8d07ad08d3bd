use serde::Serialize;
use time::OffsetDateTime;

#[derive(Serialize)]
pub struct TicketingUpdateRecord<'a> {
    #[serde(rename = "Id")]
    pub id: i64,

    #[serde(rename = "Paid", skip_serializing_if = "Option::is_none")]
    pub paid: Option<bool>,
    #[serde(rename = "Student", skip_serializing_if = "Option::is_none")]
    pub student: Option<bool>,
    #[serde(rename = "SHA256Sum", skip_serializing_if = "Option::is_none")]
    pub sha256_sum: Option<&'a str>,
    #[serde(rename = "Used", skip_serializing_if = "Option::is_none")]
    pub used: Option<bool>,

    #[serde(rename = "UpdatedAt", with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}
