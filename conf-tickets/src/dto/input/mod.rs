mod participant_email;
mod payment_receipt;
mod ticket_scan;

pub use participant_email::*;
pub use payment_receipt::*;
pub use ticket_scan::*;
