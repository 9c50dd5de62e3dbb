use std::sync::Arc;

use crate::repository::driver_repository::DriverRepository;

pub mod dto;
pub mod service;


pub(crate) const DEFAULT_DRIVER_LIST_LIMIT: u64 = 5;
pub(crate) const MAX_DRIVER_LIST_LIMIT: u64 = 100;

#[derive(Clone)]
pub struct DriverService {
    driver_repository: Arc<dyn DriverRepository>,
}

impl DriverService {
    pub(crate) fn new(driver_repository: Arc<dyn DriverRepository>) -> Self {
        Self { driver_repository }
    }
}
