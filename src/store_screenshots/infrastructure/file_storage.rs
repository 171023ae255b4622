use std::path::Path;

use super::error::InfrastructureError;
use tokio::fs;

pub struct LocalFileStorage;

impl LocalFileStorage {
    pub fn new() -> Self {
        Self
    }

    /// Creates `dir` and any missing parents.
    pub async fn ensure_dir_impl(&self, dir: &Path) -> Result<(), InfrastructureError> {
        fs::create_dir_all(dir).await.map_err(|e| {
            InfrastructureError::FileStorageError(format!("cannot create {}: {}", dir.display(), e))
        })
    }

    /// Writes `data` to `path`, replacing any existing file.
    pub async fn save_image_impl(&self, path: &Path, data: &[u8]) -> Result<(), InfrastructureError> {
        fs::write(path, data).await.map_err(InfrastructureError::IoError)?;
        Ok(())
    }

    pub async fn read_file_impl(&self, path: &Path) -> Result<Vec<u8>, InfrastructureError> {
        let data = fs::read(path).await.map_err(InfrastructureError::IoError)?;
        Ok(data)
    }
}

impl Default for LocalFileStorage {
    fn default() -> Self {
        Self::new()
    }
}
