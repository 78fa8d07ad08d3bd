use std::path::PathBuf;

pub struct FilesystemBlobStorageServiceConfig {
    pub directory: PathBuf,
}
