use super::backend::StorageBackend;
use crate::error::{RecordkeepError, Result};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

/// Filesystem backend: each key is a `<key>.json` file under `root`.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Path of the file backing `key`.
    pub fn blob_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{}.json", key)))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(RecordkeepError::Io)?;
        }
        Ok(())
    }
}

fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if valid {
        Ok(())
    } else {
        Err(RecordkeepError::Store(format!(
            "Invalid storage key '{}': use letters, digits, '-', '_' or '.'",
            key
        )))
    }
}

impl StorageBackend for FsBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.blob_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let blob = fs::read_to_string(path).map_err(RecordkeepError::Io)?;
        Ok(Some(blob))
    }

    fn set(&self, key: &str, blob: &str) -> Result<()> {
        let target = self.blob_path(key)?;
        self.ensure_dir()?;

        // Atomic Write
        let tmp = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp, blob).map_err(RecordkeepError::Io)?;
        fs::rename(&tmp, target).map_err(RecordkeepError::Io)?;

        Ok(())
    }
}
