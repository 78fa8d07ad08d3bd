use super::{dto::BlobMetadata, BlobStorageService, Error, FilesystemBlobStorageServiceConfig};
use axum::async_trait;
use std::{collections::HashMap, path::PathBuf};

const METADATA_SUFFIX: &str = ".metadata.json";

///
/// Stores every blob as a file in one directory. Content type and
/// metadata are kept next to it in `<key>.metadata.json`
///
pub struct FilesystemBlobStorageService {
    directory: PathBuf,
}

impl FilesystemBlobStorageService {
    pub async fn new(config: FilesystemBlobStorageServiceConfig) -> Result<Self, Error> {
        tracing::debug!(directory = %config.directory.display(), "creating blob directory");
        tokio::fs::create_dir_all(&config.directory).await?;

        Ok(Self {
            directory: config.directory,
        })
    }

    fn validate_key(key: &str) -> Result<(), Error> {
        let invalid = key.is_empty()
            || key == "."
            || key == ".."
            || key.contains(['/', '\\', '\0'])
            || key.ends_with(METADATA_SUFFIX);

        match invalid {
            true => Err(Error::InvalidKey(key.to_string())),
            false => Ok(()),
        }
    }
}

#[async_trait]
impl BlobStorageService for FilesystemBlobStorageService {
    async fn upload(
        &self,
        key: &str,
        content: Vec<u8>,
        content_type: &str,
        metadata: HashMap<String, String>,
    ) -> Result<(), Error> {
        Self::validate_key(key)?;

        let metadata = BlobMetadata {
            content_type: content_type.to_string(),
            metadata,
        };
        let metadata = serde_json::to_vec(&metadata)?;

        let size = content.len();
        tokio::fs::write(self.directory.join(key), content).await?;
        tokio::fs::write(
            self.directory.join(format!("{key}{METADATA_SUFFIX}")),
            metadata,
        )
        .await?;

        tracing::debug!(key, size, "uploaded blob");

        Ok(())
    }
}
