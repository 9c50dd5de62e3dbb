use std::sync::Arc;

use gatepass_core::model::stored_object::StoredObject;
use gatepass_core::repository::stored_object_repository::StoredObjectRepository;

pub struct StoredObjectsDB {
    repository: Arc<dyn StoredObjectRepository>,
}

impl StoredObjectsDB {
    pub fn new(repository: Arc<dyn StoredObjectRepository>) -> Self {
        Self { repository }
    }

    pub async fn get(&self, key: &str) -> Option<StoredObject> {
        self.repository.get_object(key).await.unwrap()
    }

    pub async fn create(&self, key: &str, content: &[u8], content_type: &str) {
        self.repository
            .upsert_object(StoredObject::new(key, content.to_vec(), content_type))
            .await
            .unwrap();
    }
}
