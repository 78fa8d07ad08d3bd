use super::Error;
use axum::async_trait;
use std::collections::HashMap;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlobStorageService: Send + Sync {
    ///
    /// Stores content under the key. Key is chosen by the caller
    /// and is opaque afterwards
    ///
    /// ### Errors
    /// - [Error::InvalidKey] when key cannot be used as a single path segment
    ///
    async fn upload(
        &self,
        key: &str,
        content: Vec<u8>,
        content_type: &str,
        metadata: HashMap<String, String>,
    ) -> Result<(), Error>;
}
