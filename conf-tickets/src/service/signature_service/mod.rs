mod error;
mod signature_service;

pub use error::Error;
pub use signature_service::*;
