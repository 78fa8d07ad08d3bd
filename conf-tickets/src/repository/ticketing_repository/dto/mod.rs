mod ticketing;
mod ticketing_update;

pub use ticketing::Ticketing;
pub use ticketing_update::TicketingUpdate;
