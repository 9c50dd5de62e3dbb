use std::sync::Arc;

use crate::repository::driver_repository::DriverRepository;
use crate::repository::scan_log_repository::ScanLogRepository;

pub mod dto;
pub mod service;


pub(crate) const DEFAULT_SCAN_LOG_LIST_LIMIT: u64 = 50;
pub(crate) const MAX_SCAN_LOG_LIST_LIMIT: u64 = 500;

#[derive(Clone)]
pub struct ScanLogService {
    scan_log_repository: Arc<dyn ScanLogRepository>,
    driver_repository: Arc<dyn DriverRepository>,
}

impl ScanLogService {
    pub(crate) fn new(
        scan_log_repository: Arc<dyn ScanLogRepository>,
        driver_repository: Arc<dyn DriverRepository>,
    ) -> Self {
        Self {
            scan_log_repository,
            driver_repository,
        }
    }
}
