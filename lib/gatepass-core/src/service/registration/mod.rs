use std::sync::Arc;

use crate::config::core_config;
use crate::proto::registration_finalizer::RegistrationFinalizer;
use crate::provider::object_storage::ObjectStorage;
use crate::repository::driver_repository::DriverRepository;

pub mod dto;
pub mod mapper;
pub mod service;
pub(crate) mod validator;


#[derive(Clone)]
pub struct RegistrationService {
    driver_repository: Arc<dyn DriverRepository>,
    object_storage: Arc<dyn ObjectStorage>,
    registration_finalizer: Arc<dyn RegistrationFinalizer>,
    config: Arc<core_config::CoreConfig>,
}

impl RegistrationService {
    pub(crate) fn new(
        driver_repository: Arc<dyn DriverRepository>,
        object_storage: Arc<dyn ObjectStorage>,
        registration_finalizer: Arc<dyn RegistrationFinalizer>,
        config: Arc<core_config::CoreConfig>,
    ) -> Self {
        Self {
            driver_repository,
            object_storage,
            registration_finalizer,
            config,
        }
    }
}
