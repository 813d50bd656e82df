use async_trait::async_trait;
use inninglog_utils::storage::Storage;
use inninglog_utils::storage::error::StorageError;
use std::path::Path;
use thiserror::Error;
use uuid::Uuid;

const KEY_PREFIX: &str = "journals";

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Uploaded file is empty")]
    EmptyFile,

    #[error("Unsupported content type: {0}")]
    UnsupportedContentType(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Stores the bytes under `key` and returns the public url of the stored object
    async fn put(&self, key: &str, content_type: Option<&str>, bytes: Vec<u8>) -> Result<String, UploadError>;
}

#[async_trait]
impl BlobStore for Storage {
    async fn put(&self, key: &str, content_type: Option<&str>, bytes: Vec<u8>) -> Result<String, UploadError> {
        let url = self.store(key, content_type, bytes).await?;
        Ok(url.into())
    }
}

fn extension(file_name: Option<&str>, content_type: Option<&str>) -> Option<String> {
    let from_name = file_name
        .and_then(|name| Path::new(name).extension())
        .and_then(|extension| extension.to_str());
    let from_content_type = content_type
        .and_then(|content_type| content_type.split_once('/'))
        .map(|(_, subtype)| subtype.split(['+', ';']).next().unwrap_or(subtype));
    from_name
        .or(from_content_type)
        .map(str::to_ascii_lowercase)
        .filter(|extension| !extension.is_empty() && extension.chars().all(|c| c.is_ascii_alphanumeric()))
}

/// Object key of a new journal image, `journals/<uuid>.<ext>`
#[must_use]
pub fn image_key(file_name: Option<&str>, content_type: Option<&str>) -> String {
    let id = Uuid::new_v4();
    match extension(file_name, content_type) {
        Some(extension) => format!("{KEY_PREFIX}/{id}.{extension}"),
        None => format!("{KEY_PREFIX}/{id}"),
    }
}

pub struct ImageUploader<B> {
    store: B,
}

impl<B: BlobStore> ImageUploader<B> {
    pub fn new(store: B) -> Self {
        Self { store }
    }

    #[tracing::instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub async fn upload(
        &self,
        file_name: Option<&str>,
        content_type: Option<&str>,
        bytes: Vec<u8>,
    ) -> Result<String, UploadError> {
        if bytes.is_empty() {
            return Err(UploadError::EmptyFile);
        }
        if let Some(content_type) = content_type
            && !content_type.starts_with("image/")
        {
            return Err(UploadError::UnsupportedContentType(content_type.to_owned()));
        }
        let key = image_key(file_name, content_type);
        let url = self.store.put(&key, content_type, bytes).await?;
        tracing::debug!(key, url, "stored journal image");
        Ok(url)
    }
}
