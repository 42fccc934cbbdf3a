use std::path::PathBuf;

use async_trait::async_trait;
use log::debug;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use super::{KeyValueStore, StoreError};

/// File-per-key store rooted at a data directory.
///
/// Each key maps to `<dir>/<key>.json`. Writes land in a temp file that is
/// fsynced and renamed into place, so a crash mid-write leaves the previous
/// value intact.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        // Keys become file names; reject anything that could escape the
        // data directory.
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir).await?;

        let tmp_path = path.with_extension("json.tmp");

        // Atomic write
        {
            let mut f = fs::File::create(&tmp_path).await?;
            f.write_all(value.as_bytes()).await?;
            f.sync_all().await?;
        }
        fs::rename(&tmp_path, &path).await?;

        debug!("Wrote {} bytes under key '{}'", value.len(), key);
        Ok(())
    }
}
