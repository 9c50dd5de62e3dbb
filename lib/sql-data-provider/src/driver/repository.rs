use async_trait::async_trait;
use autometrics::autometrics;
use gatepass_core::model::driver::{Driver, DriverListQuery, UpdateDriverRequest};
use gatepass_core::repository::driver_repository::DriverRepository;
use gatepass_core::repository::error::DataLayerError;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, QueryTrait,
    Set, Unchanged,
};
use shared_types::DriverId;
use time::OffsetDateTime;

use super::DriverProvider;
use crate::entity::driver;
use crate::mapper::{order_from_sort_direction, to_data_layer_error, to_update_data_layer_error};

#[autometrics]
#[async_trait]
impl DriverRepository for DriverProvider {
    async fn create_driver(&self, request: Driver) -> Result<DriverId, DataLayerError> {
        let id = request.id;

        driver::Entity::insert::<driver::ActiveModel>(request.into())
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(id)
    }

    async fn get_driver(&self, id: &DriverId) -> Result<Option<Driver>, DataLayerError> {
        let driver = driver::Entity::find_by_id(*id)
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(driver.map(Into::into))
    }

    async fn get_driver_by_vehicle_registration_number(
        &self,
        vehicle_registration_number: &str,
    ) -> Result<Option<Driver>, DataLayerError> {
        let driver = driver::Entity::find()
            .filter(driver::Column::VehicleRegistrationNumber.eq(vehicle_registration_number))
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(driver.map(Into::into))
    }

    async fn update_driver(&self, request: UpdateDriverRequest) -> Result<(), DataLayerError> {
        let update_model = driver::ActiveModel {
            id: Unchanged(request.id),
            qr_code_url: request
                .qr_code_url
                .map(|url| Set(Some(url)))
                .unwrap_or_default(),
            status: request
                .status
                .map(|status| Set(status.into()))
                .unwrap_or_default(),
            last_modified: Set(OffsetDateTime::now_utc()),
            ..Default::default()
        };

        update_model
            .update(&self.db)
            .await
            .map_err(to_update_data_layer_error)?;

        Ok(())
    }

    async fn get_driver_list(
        &self,
        query: DriverListQuery,
    ) -> Result<Vec<Driver>, DataLayerError> {
        let drivers = driver::Entity::find()
            .apply_if(query.status, |select, status| {
                select.filter(driver::Column::Status.eq(driver::DriverStatus::from(status)))
            })
            .apply_if(query.registered_before, |select, registered_before| {
                select.filter(driver::Column::RegistrationDate.lt(registered_before))
            })
            .order_by(
                driver::Column::RegistrationDate,
                order_from_sort_direction(query.sort_direction),
            )
            .limit(query.limit)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(drivers.into_iter().map(Into::into).collect())
    }

    async fn delete_driver(&self, id: &DriverId) -> Result<(), DataLayerError> {
        driver::Entity::delete_by_id(*id)
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(())
    }
}
