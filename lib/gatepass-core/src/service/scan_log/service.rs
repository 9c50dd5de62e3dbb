use one_dto_mapper::convert_inner;
use shared_types::DriverId;

use super::dto::{GetScanLogListQueryDTO, GetScanLogResponseDTO};
use super::{DEFAULT_SCAN_LOG_LIST_LIMIT, MAX_SCAN_LOG_LIST_LIMIT, ScanLogService};
use crate::common_validator::validate_limit;
use crate::model::scan_log::ScanLogListQuery;
use crate::service::error::{EntityNotFoundError, ServiceError};

impl ScanLogService {
    /// Most recent scans first
    pub async fn get_scan_log_list(
        &self,
        query: GetScanLogListQueryDTO,
    ) -> Result<Vec<GetScanLogResponseDTO>, ServiceError> {
        let limit = validate_limit(
            query.limit,
            DEFAULT_SCAN_LOG_LIST_LIMIT,
            MAX_SCAN_LOG_LIST_LIMIT,
        )?;

        let scan_logs = self
            .scan_log_repository
            .get_scan_log_list(ScanLogListQuery {
                limit,
                driver_id: None,
            })
            .await?;

        Ok(convert_inner(scan_logs))
    }

    pub async fn get_driver_scan_log_list(
        &self,
        driver_id: &DriverId,
        query: GetScanLogListQueryDTO,
    ) -> Result<Vec<GetScanLogResponseDTO>, ServiceError> {
        let limit = validate_limit(
            query.limit,
            DEFAULT_SCAN_LOG_LIST_LIMIT,
            MAX_SCAN_LOG_LIST_LIMIT,
        )?;

        if self.driver_repository.get_driver(driver_id).await?.is_none() {
            return Err(EntityNotFoundError::from(*driver_id).into());
        }

        let scan_logs = self
            .scan_log_repository
            .get_scan_log_list(ScanLogListQuery {
                limit,
                driver_id: Some(*driver_id),
            })
            .await?;

        Ok(convert_inner(scan_logs))
    }
}
