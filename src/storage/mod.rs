//! Local blob storage for uploaded portfolio images.
//!
//! Files are written under a generated filename and served publicly at
//! `/media/{file}`. Removal exists so a failed row insert can roll back
//! its upload.

use std::path::{Path, PathBuf};

use crate::errors::AppError;

/// A stored blob together with its public URL.
#[derive(Debug, Clone)]
pub struct StoredImage {
    pub file_name: String,
    pub public_url: String,
}

/// Filesystem-backed media store.
#[derive(Debug, Clone)]
pub struct MediaStore {
    root: PathBuf,
    public_base: String,
}

impl MediaStore {
    /// Open the store, creating the media directory if needed.
    pub async fn open(root: &Path, public_base: &str) -> Result<Self, AppError> {
        tokio::fs::create_dir_all(root).await?;
        Ok(Self {
            root: root.to_path_buf(),
            public_base: public_base.trim_end_matches('/').to_string(),
        })
    }

    /// Directory the store writes into.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write uploaded image bytes under a generated filename and return its
    /// public URL. The original filename only contributes the extension.
    pub async fn store(&self, original_name: &str, bytes: &[u8]) -> Result<StoredImage, AppError> {
        let ext = Path::new(original_name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("bin");
        let file_name = format!("{}.{}", uuid::Uuid::new_v4(), ext);
        let path = self.root.join(&file_name);

        tokio::fs::write(&path, bytes).await?;
        tracing::debug!("Stored media file {}", file_name);

        let public_url = format!("{}/media/{}", self.public_base, file_name);
        Ok(StoredImage {
            file_name,
            public_url,
        })
    }

    /// Remove a stored blob.
    pub async fn remove(&self, file_name: &str) -> Result<(), AppError> {
        tokio::fs::remove_file(self.root.join(file_name)).await?;
        tracing::debug!("Removed media file {}", file_name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_store_and_remove() {
        let dir = TempDir::new().unwrap();
        let store = MediaStore::open(dir.path(), "http://localhost:8080/")
            .await
            .unwrap();

        let stored = store.store("flash.png", b"not-a-real-png").await.unwrap();
        assert!(stored.file_name.ends_with(".png"));
        assert_eq!(
            stored.public_url,
            format!("http://localhost:8080/media/{}", stored.file_name)
        );
        assert!(dir.path().join(&stored.file_name).exists());

        store.remove(&stored.file_name).await.unwrap();
        assert!(!dir.path().join(&stored.file_name).exists());
    }

    #[tokio::test]
    async fn test_store_without_extension() {
        let dir = TempDir::new().unwrap();
        let store = MediaStore::open(dir.path(), "http://localhost:8080")
            .await
            .unwrap();

        let stored = store.store("upload", b"bytes").await.unwrap();
        assert!(stored.file_name.ends_with(".bin"));
    }
}
