//! Campus vehicle registration and QR code verification.
//!
//! [`GateCore`] wires the services to a [`DataRepository`] implementation and the
//! configured providers.

use std::sync::Arc;

use config::ConfigError;
use config::core_config::CoreConfig;
use proto::registration_finalizer::RegistrationFinalizer;
use proto::registration_finalizer::finalizer::RegistrationFinalizerImpl;
use provider::object_storage::object_storage_from_config;
use provider::qr_code::png::PngQrCodeGenerator;
use provider::task::provider::TaskProviderImpl;
use provider::task::tasks_from_config;
use repository::DataRepository;
use service::driver::DriverService;
use service::object_storage::ObjectStorageService;
use service::registration::RegistrationService;
use service::scan_log::ScanLogService;
use service::task::TaskService;
use service::verification::VerificationService;

pub mod config;
pub mod model;
pub mod provider;
pub mod repository;
pub mod service;
pub mod util;

mod common_validator;
mod proto;

#[derive(Clone)]
pub struct GateCore {
    pub registration_service: RegistrationService,
    pub verification_service: VerificationService,
    pub driver_service: DriverService,
    pub scan_log_service: ScanLogService,
    pub object_storage_service: ObjectStorageService,
    pub task_service: TaskService,
    config: Arc<CoreConfig>,
}

impl GateCore {
    /// `core_base_url` is the public address of this server, used for retrieval URLs
    /// unless `objectStorage.publicBaseUrl` is configured
    pub fn new(
        data_provider: Arc<dyn DataRepository>,
        config: CoreConfig,
        core_base_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let public_base_url = config
            .object_storage
            .resolve_public_base_url(core_base_url.as_deref())?;

        let driver_repository = data_provider.get_driver_repository();
        let scan_log_repository = data_provider.get_scan_log_repository();

        let object_storage = object_storage_from_config(
            &config.object_storage,
            public_base_url,
            data_provider.get_stored_object_repository(),
        )?;

        let registration_finalizer: Arc<dyn RegistrationFinalizer> =
            Arc::new(RegistrationFinalizerImpl::new(
                driver_repository.clone(),
                object_storage.clone(),
                Arc::new(PngQrCodeGenerator::new()),
                config.qr_code.clone(),
                config.registration.step_timeout,
            ));

        let task_provider = Arc::new(TaskProviderImpl::new(tasks_from_config(
            &config.task,
            driver_repository.clone(),
            registration_finalizer.clone(),
        )));

        let config = Arc::new(config);

        Ok(GateCore {
            registration_service: RegistrationService::new(
                driver_repository.clone(),
                object_storage.clone(),
                registration_finalizer,
                config.clone(),
            ),
            verification_service: VerificationService::new(
                driver_repository.clone(),
                scan_log_repository.clone(),
                config.clone(),
            ),
            driver_service: DriverService::new(driver_repository.clone()),
            scan_log_service: ScanLogService::new(scan_log_repository, driver_repository),
            object_storage_service: ObjectStorageService::new(object_storage),
            task_service: TaskService::new(task_provider),
            config,
        })
    }

    pub fn get_config(&self) -> Arc<CoreConfig> {
        self.config.clone()
    }
}
