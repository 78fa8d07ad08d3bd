mod blob_storage_service;
mod dto;
mod error;
mod filesystem_blob_storage_service;

pub use blob_storage_service::*;
pub use dto::FilesystemBlobStorageServiceConfig;
pub use error::Error;
pub use filesystem_blob_storage_service::*;
