use std::sync::Arc;

pub mod driver_repository;
pub mod error;
pub mod scan_log_repository;
pub mod stored_object_repository;

use driver_repository::DriverRepository;
use scan_log_repository::ScanLogRepository;
use stored_object_repository::StoredObjectRepository;

pub trait DataRepository: Send + Sync {
    fn get_driver_repository(&self) -> Arc<dyn DriverRepository>;
    fn get_scan_log_repository(&self) -> Arc<dyn ScanLogRepository>;
    fn get_stored_object_repository(&self) -> Arc<dyn StoredObjectRepository>;
}
