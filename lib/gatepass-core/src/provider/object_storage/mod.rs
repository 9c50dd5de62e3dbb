//! Blob storage addressed by hierarchical keys such as `qrcodes/<id>.png`.

use std::sync::Arc;

use async_trait::async_trait;
use url::Url;

use self::db::RepositoryObjectStorage;
use self::error::ObjectStorageError;
use self::filesystem::FilesystemObjectStorage;
use crate::config::ConfigValidationError;
use crate::config::core_config::{ObjectStorageConfig, ObjectStorageType};
use crate::model::stored_object::StoredObject;
use crate::repository::stored_object_repository::StoredObjectRepository;

pub mod db;
pub mod error;
pub mod filesystem;


#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Stores `content` under `key`, replacing any previous content
    async fn put(
        &self,
        key: &str,
        content: Vec<u8>,
        content_type: &str,
    ) -> Result<(), ObjectStorageError>;

    /// URL under which the object stored at `key` can be downloaded
    async fn get_retrieval_url(&self, key: &str) -> Result<String, ObjectStorageError>;

    async fn get(&self, key: &str) -> Result<Option<StoredObject>, ObjectStorageError>;

    /// Deleting a missing key is not an error
    async fn delete(&self, key: &str) -> Result<(), ObjectStorageError>;
}

pub(crate) fn object_storage_from_config(
    config: &ObjectStorageConfig,
    public_base_url: Url,
    stored_object_repository: Arc<dyn StoredObjectRepository>,
) -> Result<Arc<dyn ObjectStorage>, ConfigValidationError> {
    Ok(match config.r#type {
        ObjectStorageType::Db => Arc::new(RepositoryObjectStorage::new(
            stored_object_repository,
            public_base_url,
        )),
        ObjectStorageType::Filesystem => {
            let root = config
                .root_directory
                .clone()
                .ok_or(ConfigValidationError::MissingRootDirectory)?;
            Arc::new(FilesystemObjectStorage::new(root, public_base_url))
        }
    })
}

pub(crate) fn validate_key(key: &str) -> Result<(), ObjectStorageError> {
    let valid = !key.is_empty()
        && key
            .split('/')
            .all(|segment| !segment.is_empty() && segment != "." && segment != "..");

    if valid {
        Ok(())
    } else {
        Err(ObjectStorageError::InvalidKey(key.to_owned()))
    }
}

/// `<base>/files/<key>` with every key segment percent-encoded
pub(crate) fn retrieval_url(base: &Url, key: &str) -> Result<String, ObjectStorageError> {
    validate_key(key)?;

    let encoded_key = key
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/");

    let base = base.as_str().trim_end_matches('/');
    let url = Url::parse(&format!("{base}/files/{encoded_key}"))?;

    Ok(url.to_string())
}
