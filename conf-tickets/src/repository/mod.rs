mod error;
mod ticketing_repository;

pub use error::*;
pub use ticketing_repository::*;
