mod dto;
mod entity;
mod ticketing_repository;
#[cfg(test)]
mod ticketing_repository_memory;
mod ticketing_repository_nocodb;
mod ticketing_repository_postgres;

pub use dto::{Ticketing, TicketingUpdate};
pub use ticketing_repository::*;
#[cfg(test)]
pub use ticketing_repository_memory::*;
pub use ticketing_repository_nocodb::*;
pub use ticketing_repository_postgres::*;
