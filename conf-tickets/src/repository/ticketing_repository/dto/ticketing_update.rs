///
/// Partial update, only fields that are `Some` are written.
/// Receipt photo changes only through
/// [crate::repository::TicketingRepository::insert_receipt]
/// and `used` only through
/// [crate::repository::TicketingRepository::update_used]
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketingUpdate {
    pub paid: Option<bool>,
    pub student: Option<bool>,
    pub sha256_sum: Option<String>,
}
