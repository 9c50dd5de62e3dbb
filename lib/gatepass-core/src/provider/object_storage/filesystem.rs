use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use time::OffsetDateTime;
use url::Url;

use super::error::ObjectStorageError;
use super::{ObjectStorage, retrieval_url, validate_key};
use crate::model::stored_object::StoredObject;

const CONTENT_TYPE_SUFFIX: &str = ".content-type";
const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Stores each object as a file below `root`, its content type in a sidecar file
pub struct FilesystemObjectStorage {
    root: PathBuf,
    public_base_url: Url,
}

impl FilesystemObjectStorage {
    pub fn new(root: PathBuf, public_base_url: Url) -> Self {
        Self {
            root,
            public_base_url,
        }
    }

    fn object_path(&self, key: &str) -> Result<PathBuf, ObjectStorageError> {
        validate_key(key)?;
        if key.ends_with(CONTENT_TYPE_SUFFIX) {
            return Err(ObjectStorageError::InvalidKey(key.to_owned()));
        }

        Ok(key
            .split('/')
            .fold(self.root.clone(), |path, segment| path.join(segment)))
    }
}

fn content_type_path(path: &Path) -> PathBuf {
    let mut file_name = path.as_os_str().to_owned();
    file_name.push(CONTENT_TYPE_SUFFIX);
    PathBuf::from(file_name)
}

async fn remove_if_exists(path: &Path) -> Result<(), ObjectStorageError> {
    match tokio::fs::remove_file(path).await {
        Err(error) if error.kind() != ErrorKind::NotFound => Err(error.into()),
        _ => Ok(()),
    }
}

#[async_trait]
impl ObjectStorage for FilesystemObjectStorage {
    async fn put(
        &self,
        key: &str,
        content: Vec<u8>,
        content_type: &str,
    ) -> Result<(), ObjectStorageError> {
        let path = self.object_path(key)?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&path, content).await?;
        tokio::fs::write(content_type_path(&path), content_type).await?;

        Ok(())
    }

    async fn get_retrieval_url(&self, key: &str) -> Result<String, ObjectStorageError> {
        self.object_path(key)?;
        retrieval_url(&self.public_base_url, key)
    }

    async fn get(&self, key: &str) -> Result<Option<StoredObject>, ObjectStorageError> {
        let path = self.object_path(key)?;

        let content = match tokio::fs::read(&path).await {
            Ok(content) => content,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(error.into()),
        };

        let content_type = match tokio::fs::read_to_string(content_type_path(&path)).await {
            Ok(content_type) => content_type,
            Err(error) if error.kind() == ErrorKind::NotFound => DEFAULT_CONTENT_TYPE.to_owned(),
            Err(error) => return Err(error.into()),
        };

        let metadata = tokio::fs::metadata(&path).await?;
        let last_modified = metadata
            .modified()
            .map(OffsetDateTime::from)
            .unwrap_or_else(|_| OffsetDateTime::now_utc());
        let created_date = metadata
            .created()
            .map(OffsetDateTime::from)
            .unwrap_or(last_modified);

        Ok(Some(StoredObject {
            key: key.to_owned(),
            content_type,
            content,
            created_date,
            last_modified,
        }))
    }

    async fn delete(&self, key: &str) -> Result<(), ObjectStorageError> {
        let path = self.object_path(key)?;

        remove_if_exists(&path).await?;
        remove_if_exists(&content_type_path(&path)).await
    }
}
