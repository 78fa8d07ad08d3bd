mod de_lenient;
mod ticketing_find_record;
mod ticketing_insert_record;
mod ticketing_row;
mod ticketing_update_record;

pub use ticketing_find_record::TicketingFindRecord;
pub use ticketing_insert_record::TicketingInsertRecord;
pub use ticketing_row::TicketingRow;
pub use ticketing_update_record::TicketingUpdateRecord;

/// Column names of the NocoDB ticketing table
pub mod field {
    pub const ID: &str = "Id";
    pub const EMAIL: &str = "Email";
    pub const USED: &str = "Used";
    pub const CREATED_AT: &str = "CreatedAt";
}
