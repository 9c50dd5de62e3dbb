use std::sync::Arc;
use std::time::Duration;

use shared_types::DriverId;

use super::{RegistrationFinalizer, qr_code_key};
use crate::config::core_config::QrCodeConfig;
use crate::model::driver::{DriverStatus, UpdateDriverRequest};
use crate::provider::object_storage::ObjectStorage;
use crate::provider::qr_code::QrCodeGenerator;
use crate::repository::driver_repository::DriverRepository;
use crate::service::error::{QrGenerationError, ServiceError, StorageError};
use crate::util::timeout::with_timeout;

pub(crate) struct RegistrationFinalizerImpl {
    driver_repository: Arc<dyn DriverRepository>,
    object_storage: Arc<dyn ObjectStorage>,
    qr_code_generator: Arc<dyn QrCodeGenerator>,
    qr_code_config: QrCodeConfig,
    step_timeout: Duration,
}

impl RegistrationFinalizerImpl {
    pub(crate) fn new(
        driver_repository: Arc<dyn DriverRepository>,
        object_storage: Arc<dyn ObjectStorage>,
        qr_code_generator: Arc<dyn QrCodeGenerator>,
        qr_code_config: QrCodeConfig,
        step_timeout: Duration,
    ) -> Self {
        Self {
            driver_repository,
            object_storage,
            qr_code_generator,
            qr_code_config,
            step_timeout,
        }
    }
}

#[async_trait::async_trait]
impl RegistrationFinalizer for RegistrationFinalizerImpl {
    async fn finalize(&self, driver_id: DriverId) -> Result<String, ServiceError> {
        let payload = driver_id.to_string();

        let qr_code = with_timeout(
            self.step_timeout,
            "generating QR code",
            self.qr_code_generator.render(
                &payload,
                self.qr_code_config.size,
                self.qr_code_config.margin,
            ),
        )
        .await
        .map_err(QrGenerationError::Timeout)??;
        tracing::debug!(%driver_id, "QR code generated");

        let key = qr_code_key(&driver_id);
        with_timeout(
            self.step_timeout,
            "uploading QR code",
            self.object_storage
                .put(&key, qr_code, mime::IMAGE_PNG.essence_str()),
        )
        .await
        .map_err(StorageError::from)??;

        let qr_code_url = with_timeout(
            self.step_timeout,
            "resolving QR code URL",
            self.object_storage.get_retrieval_url(&key),
        )
        .await
        .map_err(StorageError::from)??;

        with_timeout(
            self.step_timeout,
            "finalizing driver record",
            self.driver_repository.update_driver(UpdateDriverRequest {
                id: driver_id,
                qr_code_url: Some(qr_code_url.clone()),
                status: Some(DriverStatus::Complete),
            }),
        )
        .await
        .map_err(StorageError::from)??;
        tracing::debug!(%driver_id, "driver registration finalized");

        Ok(qr_code_url)
    }
}
