use crate::storage::error::StorageError;
use crate::storage::public_url;
use std::error::Error;
use std::path::{Component, Path, PathBuf};
use url::Url;

/// Stores objects below a local directory. Meant for development setups where the directory is
/// served by a static file server reachable under `public_url`.
#[derive(Clone, Debug)]
pub struct FileSystemStorage {
    root: PathBuf,
    public_url: Url,
}

impl FileSystemStorage {
    #[must_use]
    pub fn new(root: PathBuf, public_url: Url) -> Self {
        Self { root, public_url }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let relative = Path::new(key);
        if !relative
            .components()
            .all(|component| matches!(component, Component::Normal(_)))
        {
            return Err(StorageError::InvalidKey(key.to_owned()));
        }
        Ok(self.root.join(relative))
    }

    pub async fn store(&self, key: &str, content: Vec<u8>) -> Result<Url, StorageError> {
        let path = self.path_for(key)?;
        tracing::debug!(?path, size = content.len(), "storing file");
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .inspect_err(|error| tracing::error!(error = error as &dyn Error, ?parent, "failed to create dir"))?;
        }
        tokio::fs::write(&path, content)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, ?path, "failed to write file"))?;
        public_url(&self.public_url, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test(tokio::test)]
    async fn test_store_writes_below_root() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileSystemStorage::new(
            dir.path().to_path_buf(),
            Url::parse("http://localhost:8080/media").unwrap(),
        );

        let url = storage.store("journals/a.png", b"png".to_vec()).await.unwrap();

        assert_eq!(url.as_str(), "http://localhost:8080/media/journals/a.png");
        let written = std::fs::read(dir.path().join("journals").join("a.png")).unwrap();
        assert_eq!(written, b"png");
    }

    #[test(tokio::test)]
    async fn test_store_rejects_escaping_keys() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileSystemStorage::new(dir.path().to_path_buf(), Url::parse("http://localhost/").unwrap());

        let result = storage.store("../outside.png", b"png".to_vec()).await;

        assert!(matches!(result, Err(StorageError::InvalidKey(_))));
    }
}
