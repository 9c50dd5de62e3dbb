use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use self::finalize_pending_registrations::FinalizePendingRegistrations;
use crate::config::core_config::{TaskConfig, TaskType};
use crate::proto::registration_finalizer::RegistrationFinalizer;
use crate::repository::driver_repository::DriverRepository;
use crate::service::error::ServiceError;

pub mod finalize_pending_registrations;
pub mod provider;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait Task: Send + Sync {
    async fn run(&self) -> Result<Value, ServiceError>;
}

pub(crate) fn tasks_from_config(
    config: &TaskConfig,
    driver_repository: Arc<dyn DriverRepository>,
    registration_finalizer: Arc<dyn RegistrationFinalizer>,
) -> HashMap<String, Arc<dyn Task>> {
    let mut tasks: HashMap<String, Arc<dyn Task>> = HashMap::new();

    tasks.insert(
        TaskType::FinalizePendingRegistrations.to_string(),
        Arc::new(FinalizePendingRegistrations::new(
            config.finalize_pending_registrations.clone(),
            driver_repository,
            registration_finalizer,
        )),
    );

    tasks
}
