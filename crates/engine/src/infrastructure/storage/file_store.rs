//! JSON file collection store.
//!
//! One `<collection>.json` file per collection inside a data directory.
//! Writes go to a temporary sibling file first and are renamed into place so a
//! crash never leaves a half-written collection behind.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::infrastructure::ports::{Collection, CollectionStore, RepoError};

pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open (and create if needed) the data directory.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, RepoError> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| RepoError::storage("open", format!("{}: {e}", dir.display())))?;
        tracing::debug!(dir = %dir.display(), "Opened JSON collection store");
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, collection: Collection) -> PathBuf {
        self.dir.join(format!("{}.json", collection.name()))
    }
}

#[async_trait]
impl CollectionStore for JsonFileStore {
    async fn get(&self, collection: Collection) -> Result<Option<String>, RepoError> {
        match tokio::fs::read_to_string(self.path_for(collection)).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(RepoError::storage("get", format!("{collection}: {e}"))),
        }
    }

    async fn set(&self, collection: Collection, contents: String) -> Result<(), RepoError> {
        let path = self.path_for(collection);
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, contents)
            .await
            .map_err(|e| RepoError::storage("set", format!("{collection}: {e}")))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|e| RepoError::storage("set", format!("{collection}: {e}")))?;
        Ok(())
    }
}
