use async_trait::async_trait;

use super::error::DataLayerError;
use crate::model::stored_object::StoredObject;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait StoredObjectRepository: Send + Sync {
    /// Replaces content and content type of an existing key, keeping its creation date
    async fn upsert_object(&self, object: StoredObject) -> Result<(), DataLayerError>;

    async fn get_object(&self, key: &str) -> Result<Option<StoredObject>, DataLayerError>;

    async fn delete_object(&self, key: &str) -> Result<(), DataLayerError>;
}
