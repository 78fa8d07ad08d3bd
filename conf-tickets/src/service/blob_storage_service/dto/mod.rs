mod blob_metadata;
mod filesystem_blob_storage_service_config;

pub use blob_metadata::BlobMetadata;
pub use filesystem_blob_storage_service_config::FilesystemBlobStorageServiceConfig;
