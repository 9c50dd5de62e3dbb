use std::sync::Arc;

use serde_json::{Value, json};
use time::OffsetDateTime;

use super::Task;
use crate::config::core_config::FinalizePendingRegistrationsConfig;
use crate::model::driver::{DriverListQuery, DriverStatus, SortDirection};
use crate::proto::registration_finalizer::RegistrationFinalizer;
use crate::repository::driver_repository::DriverRepository;
use crate::service::error::ServiceError;


/// Completes registrations whose QR code step failed earlier
pub struct FinalizePendingRegistrations {
    config: FinalizePendingRegistrationsConfig,
    driver_repository: Arc<dyn DriverRepository>,
    registration_finalizer: Arc<dyn RegistrationFinalizer>,
}

impl FinalizePendingRegistrations {
    pub(crate) fn new(
        config: FinalizePendingRegistrationsConfig,
        driver_repository: Arc<dyn DriverRepository>,
        registration_finalizer: Arc<dyn RegistrationFinalizer>,
    ) -> Self {
        Self {
            config,
            driver_repository,
            registration_finalizer,
        }
    }
}

#[async_trait::async_trait]
impl Task for FinalizePendingRegistrations {
    async fn run(&self) -> Result<Value, ServiceError> {
        // records younger than min_age may still be in the middle of registration
        let registered_before = OffsetDateTime::now_utc() - self.config.min_age;

        let pending = self
            .driver_repository
            .get_driver_list(DriverListQuery {
                limit: self.config.batch_size,
                status: Some(DriverStatus::PendingQr),
                registered_before: Some(registered_before),
                sort_direction: SortDirection::Ascending,
            })
            .await?;

        let mut finalized = 0;
        let mut failed = 0;

        for driver in pending {
            match self.registration_finalizer.finalize(driver.id).await {
                Ok(_) => finalized += 1,
                Err(error) => {
                    tracing::warn!(driver_id = %driver.id, %error, "Failed to finalize pending registration");
                    failed += 1;
                }
            }
        }

        tracing::info!(finalized, failed, "Pending registrations processed");

        Ok(json!({
            "finalized": finalized,
            "failed": failed,
        }))
    }
}
