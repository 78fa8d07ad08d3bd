mod ticket_issued;
mod verified_ticket;

pub use ticket_issued::*;
pub use verified_ticket::*;
