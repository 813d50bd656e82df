use crate::storage::error::StorageError;
use crate::storage::file_system::FileSystemStorage;
use crate::storage::s3::S3Storage;
use url::Url;

pub mod error;
pub mod file_system;
pub mod s3;

#[derive(Clone, Debug)]
pub enum Storage {
    S3(S3Storage),
    FileSystem(FileSystemStorage),
}

impl Storage {
    /// Stores the content under `key` and returns the url it is reachable at
    pub async fn store(&self, key: &str, content_type: Option<&str>, content: Vec<u8>) -> Result<Url, StorageError> {
        match self {
            Storage::S3(storage) => storage.store(key, content_type, content).await,
            Storage::FileSystem(storage) => storage.store(key, content).await,
        }
    }
}

/// Joins `key` onto `base`, treating `base` as a directory even without a trailing slash
pub fn public_url(base: &Url, key: &str) -> Result<Url, StorageError> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(key).map_err(Into::into)
}
