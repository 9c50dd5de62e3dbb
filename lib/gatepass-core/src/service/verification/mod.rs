use std::sync::Arc;

use crate::config::core_config;
use crate::repository::driver_repository::DriverRepository;
use crate::repository::scan_log_repository::ScanLogRepository;

pub mod dto;
pub mod mapper;
pub mod service;


#[derive(Clone)]
pub struct VerificationService {
    driver_repository: Arc<dyn DriverRepository>,
    scan_log_repository: Arc<dyn ScanLogRepository>,
    config: Arc<core_config::CoreConfig>,
}

impl VerificationService {
    pub(crate) fn new(
        driver_repository: Arc<dyn DriverRepository>,
        scan_log_repository: Arc<dyn ScanLogRepository>,
        config: Arc<core_config::CoreConfig>,
    ) -> Self {
        Self {
            driver_repository,
            scan_log_repository,
            config,
        }
    }
}
