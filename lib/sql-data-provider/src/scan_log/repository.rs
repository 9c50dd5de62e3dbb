use async_trait::async_trait;
use autometrics::autometrics;
use gatepass_core::model::scan_log::{ScanLog, ScanLogListQuery};
use gatepass_core::repository::error::DataLayerError;
use gatepass_core::repository::scan_log_repository::ScanLogRepository;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, QueryTrait};
use shared_types::ScanLogId;

use super::ScanLogProvider;
use crate::entity::scan_log;
use crate::mapper::to_data_layer_error;

#[autometrics]
#[async_trait]
impl ScanLogRepository for ScanLogProvider {
    async fn create_scan_log(&self, request: ScanLog) -> Result<ScanLogId, DataLayerError> {
        let id = request.id;

        scan_log::Entity::insert::<scan_log::ActiveModel>(request.into())
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(id)
    }

    async fn get_scan_log_list(
        &self,
        query: ScanLogListQuery,
    ) -> Result<Vec<ScanLog>, DataLayerError> {
        let scan_logs = scan_log::Entity::find()
            .apply_if(query.driver_id, |select, driver_id| {
                select.filter(scan_log::Column::DriverId.eq(driver_id))
            })
            .order_by_desc(scan_log::Column::ScannedAt)
            .limit(query.limit)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(scan_logs.into_iter().map(Into::into).collect())
    }
}
