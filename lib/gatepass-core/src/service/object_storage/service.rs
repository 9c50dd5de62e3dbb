use super::ObjectStorageService;
use super::dto::GetObjectResponseDTO;
use crate::provider::object_storage::error::ObjectStorageError;
use crate::service::error::{EntityNotFoundError, ServiceError};

impl ObjectStorageService {
    pub async fn get_object(&self, key: &str) -> Result<GetObjectResponseDTO, ServiceError> {
        let object = match self.object_storage.get(key).await {
            Ok(object) => object,
            // an invalid key can never have been stored
            Err(ObjectStorageError::InvalidKey(_)) => None,
            Err(error) => return Err(error.into()),
        };

        object
            .map(Into::into)
            .ok_or_else(|| EntityNotFoundError::StoredObject(key.to_owned()).into())
    }
}
