use shared_types::DriverId;
use time::OffsetDateTime;

use super::RegistrationService;
use super::dto::RegisterDriverRequestDTO;
use super::mapper::{driver_from_request, passport_photo_key, trim_request};
use super::validator::validate_register_driver_request;
use crate::config::core_config::QrFailurePolicy;
use crate::proto::registration_finalizer::qr_code_key;
use crate::repository::error::DataLayerError;
use crate::service::error::{BusinessLogicError, ServiceError, StorageError};
use crate::util::timeout::with_timeout;

impl RegistrationService {
    /// Registers a driver with their vehicle and issues the QR code identifying them.
    ///
    /// # Arguments
    ///
    /// * `request` - driver, vehicle and passport photo data
    pub async fn register_driver(
        &self,
        request: RegisterDriverRequestDTO,
    ) -> Result<DriverId, ServiceError> {
        let mut request = trim_request(request);
        let (photo, photo_media_type) = validate_register_driver_request(&mut request)?;

        let step_timeout = self.config.registration.step_timeout;

        let existing = with_timeout(
            step_timeout,
            "checking vehicle registration number",
            self.driver_repository
                .get_driver_by_vehicle_registration_number(&request.vehicle_registration_number),
        )
        .await
        .map_err(StorageError::from)??;

        if existing.is_some() {
            return Err(BusinessLogicError::VehicleAlreadyRegistered(
                request.vehicle_registration_number,
            )
            .into());
        }

        let now = OffsetDateTime::now_utc();
        let photo_key = passport_photo_key(now, photo.file_name.as_deref());

        with_timeout(
            step_timeout,
            "uploading passport photo",
            self.object_storage
                .put(&photo_key, photo.content, photo_media_type.as_ref()),
        )
        .await
        .map_err(StorageError::from)??;

        let passport_photo_url = with_timeout(
            step_timeout,
            "resolving passport photo URL",
            self.object_storage.get_retrieval_url(&photo_key),
        )
        .await
        .map_err(StorageError::from)??;
        tracing::debug!(key = %photo_key, "passport photo stored");

        let driver = driver_from_request(request, passport_photo_url, now);
        let vehicle_registration_number = driver.vehicle_registration_number.clone();

        let driver_id = with_timeout(
            step_timeout,
            "creating driver record",
            self.driver_repository.create_driver(driver),
        )
        .await
        .map_err(StorageError::from)?
        .map_err(|error| match error {
            DataLayerError::AlreadyExists => ServiceError::from(
                BusinessLogicError::VehicleAlreadyRegistered(vehicle_registration_number),
            ),
            error => ServiceError::from(error),
        })?;
        tracing::info!(%driver_id, "driver record created");

        if let Err(error) = self.registration_finalizer.finalize(driver_id).await {
            match self.config.registration.on_qr_failure {
                QrFailurePolicy::KeepPending => {
                    tracing::warn!(%driver_id, %error, "QR code step failed, registration left pending");
                }
                QrFailurePolicy::Rollback => {
                    self.rollback_registration(driver_id, &photo_key).await;
                }
            }
            return Err(error);
        }

        tracing::info!(%driver_id, "driver registered");
        Ok(driver_id)
    }

    async fn rollback_registration(&self, driver_id: DriverId, photo_key: &str) {
        let step_timeout = self.config.registration.step_timeout;

        let result = with_timeout(
            step_timeout,
            "deleting driver record",
            self.driver_repository.delete_driver(&driver_id),
        )
        .await
        .map_err(StorageError::from)
        .and_then(|result| result.map_err(StorageError::from));
        if let Err(error) = result {
            tracing::warn!(%driver_id, %error, "Failed to delete driver record during rollback");
        }

        for key in [photo_key.to_owned(), qr_code_key(&driver_id)] {
            let result = with_timeout(
                step_timeout,
                "deleting stored object",
                self.object_storage.delete(&key),
            )
            .await
            .map_err(StorageError::from)
            .and_then(|result| result.map_err(StorageError::from));
            if let Err(error) = result {
                tracing::warn!(%driver_id, %key, %error, "Failed to delete stored object during rollback");
            }
        }

        tracing::info!(%driver_id, "driver registration rolled back");
    }
}
