use std::sync::Arc;

use async_trait::async_trait;
use url::Url;

use super::error::ObjectStorageError;
use super::{ObjectStorage, retrieval_url, validate_key};
use crate::model::stored_object::StoredObject;
use crate::repository::stored_object_repository::StoredObjectRepository;

pub struct RepositoryObjectStorage {
    stored_object_repository: Arc<dyn StoredObjectRepository>,
    public_base_url: Url,
}

impl RepositoryObjectStorage {
    pub fn new(
        stored_object_repository: Arc<dyn StoredObjectRepository>,
        public_base_url: Url,
    ) -> Self {
        Self {
            stored_object_repository,
            public_base_url,
        }
    }
}

#[async_trait]
impl ObjectStorage for RepositoryObjectStorage {
    async fn put(
        &self,
        key: &str,
        content: Vec<u8>,
        content_type: &str,
    ) -> Result<(), ObjectStorageError> {
        validate_key(key)?;

        Ok(self
            .stored_object_repository
            .upsert_object(StoredObject::new(key, content, content_type))
            .await?)
    }

    async fn get_retrieval_url(&self, key: &str) -> Result<String, ObjectStorageError> {
        retrieval_url(&self.public_base_url, key)
    }

    async fn get(&self, key: &str) -> Result<Option<StoredObject>, ObjectStorageError> {
        validate_key(key)?;

        Ok(self.stored_object_repository.get_object(key).await?)
    }

    async fn delete(&self, key: &str) -> Result<(), ObjectStorageError> {
        validate_key(key)?;

        Ok(self.stored_object_repository.delete_object(key).await?)
    }
}
