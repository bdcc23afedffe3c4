use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use swapro_application::DocumentStorage;
use swapro_core::{AppError, AppResult};
use tokio::fs;

/// File-per-document storage under a data directory.
///
/// Each key maps to `<data_dir>/<key>.json`; writes replace the whole file,
/// mirroring the whole-document semantics of the port.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    data_dir: PathBuf,
}

impl JsonFileStorage {
    /// Creates a store rooted at `data_dir`. The directory is created on the
    /// first write.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Returns the backing data directory.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        self.data_dir.as_path()
    }

    fn document_path(&self, key: &str) -> AppResult<PathBuf> {
        // Keys name files directly, so restrict them to a flat charset.
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|character| character.is_ascii_alphanumeric() || character == '_' || character == '-');
        if !valid {
            return Err(AppError::Validation(format!(
                "invalid storage key '{key}'"
            )));
        }

        Ok(self.data_dir.join(format!("{key}.json")))
    }
}

#[async_trait]
impl DocumentStorage for JsonFileStorage {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.document_path(key)?;

        match fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(AppError::Storage(format!(
                "failed to read '{}': {error}",
                path.display()
            ))),
        }
    }

    async fn put(&self, key: &str, value: String) -> AppResult<()> {
        let path = self.document_path(key)?;

        fs::create_dir_all(&self.data_dir).await.map_err(|error| {
            AppError::Storage(format!(
                "failed to create '{}': {error}",
                self.data_dir.display()
            ))
        })?;

        fs::write(&path, value).await.map_err(|error| {
            AppError::Storage(format!("failed to write '{}': {error}", path.display()))
        })
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        let path = self.document_path(key)?;

        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(AppError::Storage(format!(
                "failed to remove '{}': {error}",
                path.display()
            ))),
        }
    }
}
