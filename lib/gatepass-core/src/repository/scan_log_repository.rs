use async_trait::async_trait;
use shared_types::ScanLogId;

use super::error::DataLayerError;
use crate::model::scan_log::{ScanLog, ScanLogListQuery};

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait ScanLogRepository: Send + Sync {
    async fn create_scan_log(&self, request: ScanLog) -> Result<ScanLogId, DataLayerError>;

    /// Most recent scans first
    async fn get_scan_log_list(
        &self,
        query: ScanLogListQuery,
    ) -> Result<Vec<ScanLog>, DataLayerError>;
}
