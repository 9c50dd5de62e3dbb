use async_trait::async_trait;
use autometrics::autometrics;
use gatepass_core::model::stored_object::StoredObject;
use gatepass_core::repository::error::DataLayerError;
use gatepass_core::repository::stored_object_repository::StoredObjectRepository;
use sea_orm::sea_query::OnConflict;
use sea_orm::{EntityTrait, Set};

use super::StoredObjectProvider;
use crate::entity::stored_object;
use crate::mapper::to_data_layer_error;

#[autometrics]
#[async_trait]
impl StoredObjectRepository for StoredObjectProvider {
    async fn upsert_object(&self, object: StoredObject) -> Result<(), DataLayerError> {
        let model = stored_object::ActiveModel {
            key: Set(object.key),
            content_type: Set(object.content_type),
            content: Set(object.content),
            created_date: Set(object.created_date),
            last_modified: Set(object.last_modified),
        };

        stored_object::Entity::insert(model)
            .on_conflict(
                OnConflict::column(stored_object::Column::Key)
                    .update_columns([
                        stored_object::Column::ContentType,
                        stored_object::Column::Content,
                        stored_object::Column::LastModified,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(())
    }

    async fn get_object(&self, key: &str) -> Result<Option<StoredObject>, DataLayerError> {
        let object = stored_object::Entity::find_by_id(key)
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(object.map(Into::into))
    }

    async fn delete_object(&self, key: &str) -> Result<(), DataLayerError> {
        stored_object::Entity::delete_by_id(key)
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(())
    }
}
