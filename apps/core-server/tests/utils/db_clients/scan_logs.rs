use std::sync::Arc;

use gatepass_core::model::scan_log::{ScanLog, ScanLogListQuery};
use gatepass_core::repository::scan_log_repository::ScanLogRepository;
use shared_types::DriverId;

pub struct ScanLogsDB {
    repository: Arc<dyn ScanLogRepository>,
}

impl ScanLogsDB {
    pub fn new(repository: Arc<dyn ScanLogRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self, driver_id: Option<DriverId>) -> Vec<ScanLog> {
        self.repository
            .get_scan_log_list(ScanLogListQuery {
                limit: 1000,
                driver_id,
            })
            .await
            .unwrap()
    }
}
