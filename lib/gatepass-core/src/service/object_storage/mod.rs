use std::sync::Arc;

use crate::provider::object_storage::ObjectStorage;

pub mod dto;
pub mod service;


#[derive(Clone)]
pub struct ObjectStorageService {
    object_storage: Arc<dyn ObjectStorage>,
}

impl ObjectStorageService {
    pub(crate) fn new(object_storage: Arc<dyn ObjectStorage>) -> Self {
        Self { object_storage }
    }
}
