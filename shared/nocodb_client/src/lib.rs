//!
//! Minimal client for the NocoDB v2 table records API
//!

mod client;
mod dto;
mod error;

pub use client::{NocoDbClient, NocoDbClientConfig};
pub use dto::*;
pub use error::Error;
