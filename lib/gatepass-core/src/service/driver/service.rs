use one_dto_mapper::convert_inner;
use shared_types::DriverId;

use super::dto::{GetDriverListQueryDTO, GetDriverResponseDTO};
use super::{DEFAULT_DRIVER_LIST_LIMIT, DriverService, MAX_DRIVER_LIST_LIMIT};
use crate::common_validator::validate_limit;
use crate::model::driver::{DriverListQuery, SortDirection};
use crate::service::error::{EntityNotFoundError, ServiceError};

impl DriverService {
    pub async fn get_driver(&self, id: &DriverId) -> Result<GetDriverResponseDTO, ServiceError> {
        let driver = self
            .driver_repository
            .get_driver(id)
            .await?
            .ok_or(EntityNotFoundError::from(*id))?;

        Ok(driver.into())
    }

    /// Most recently registered drivers first
    pub async fn get_driver_list(
        &self,
        query: GetDriverListQueryDTO,
    ) -> Result<Vec<GetDriverResponseDTO>, ServiceError> {
        let limit = validate_limit(
            query.limit,
            DEFAULT_DRIVER_LIST_LIMIT,
            MAX_DRIVER_LIST_LIMIT,
        )?;

        let drivers = self
            .driver_repository
            .get_driver_list(DriverListQuery {
                limit,
                status: query.status,
                registered_before: None,
                sort_direction: SortDirection::Descending,
            })
            .await?;

        Ok(convert_inner(drivers))
    }
}
