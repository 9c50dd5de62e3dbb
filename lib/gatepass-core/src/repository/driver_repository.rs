use async_trait::async_trait;
use shared_types::DriverId;

use super::error::DataLayerError;
use crate::model::driver::{Driver, DriverListQuery, UpdateDriverRequest};

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait DriverRepository: Send + Sync {
    /// Fails with [`DataLayerError::AlreadyExists`] when the vehicle registration number is taken
    async fn create_driver(&self, request: Driver) -> Result<DriverId, DataLayerError>;

    async fn get_driver(&self, id: &DriverId) -> Result<Option<Driver>, DataLayerError>;

    async fn get_driver_by_vehicle_registration_number(
        &self,
        vehicle_registration_number: &str,
    ) -> Result<Option<Driver>, DataLayerError>;

    async fn update_driver(&self, request: UpdateDriverRequest) -> Result<(), DataLayerError>;

    /// Most recently registered first
    async fn get_driver_list(&self, query: DriverListQuery)
    -> Result<Vec<Driver>, DataLayerError>;

    async fn delete_driver(&self, id: &DriverId) -> Result<(), DataLayerError>;
}
