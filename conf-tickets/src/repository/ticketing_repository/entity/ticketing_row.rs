use time::OffsetDateTime;

#[derive(sqlx::FromRow)]
pub struct TicketingRow {
    pub id: i64,

    pub email: String,
    pub receipt_photo_path: String,

    pub paid: bool,
    pub student: bool,
    pub sha256sum: String,
    pub used: bool,

    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}
