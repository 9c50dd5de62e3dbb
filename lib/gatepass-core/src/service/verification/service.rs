use shared_types::DriverId;
use time::OffsetDateTime;

use super::VerificationService;
use super::dto::VerificationResultDTO;
use super::mapper::scan_log_from_driver;
use crate::config::core_config::ScanLogFailurePolicy;
use crate::service::error::{EntityNotFoundError, ServiceError, StorageError, ValidationError};
use crate::util::timeout::with_timeout;

impl VerificationService {
    /// Resolves a scanned QR payload to a registered driver and logs the scan.
    ///
    /// # Arguments
    ///
    /// * `scanned_id` - decoded QR payload
    /// * `verified_by` - identity of the staff member scanning
    pub async fn verify_driver(
        &self,
        scanned_id: &str,
        verified_by: &str,
    ) -> Result<VerificationResultDTO, ServiceError> {
        let verified_by = verified_by.trim();
        if verified_by.is_empty() {
            return Err(ValidationError::EmptyField("verified_by").into());
        }

        let scanned_id = scanned_id.trim();
        // only the canonical hyphenated form issued in QR codes matches a record
        let driver_id = scanned_id
            .parse::<DriverId>()
            .ok()
            .filter(|driver_id| driver_id.to_string() == scanned_id)
            .ok_or_else(|| EntityNotFoundError::Driver(scanned_id.to_owned()))?;

        let step_timeout = self.config.registration.step_timeout;

        let driver = with_timeout(
            step_timeout,
            "loading scanned driver",
            self.driver_repository.get_driver(&driver_id),
        )
        .await
        .map_err(StorageError::from)??
        .ok_or(EntityNotFoundError::from(driver_id))?;

        let scan_log = scan_log_from_driver(&driver, verified_by, OffsetDateTime::now_utc());

        let result = with_timeout(
            step_timeout,
            "logging scan",
            self.scan_log_repository.create_scan_log(scan_log),
        )
        .await
        .map_err(StorageError::from)
        .and_then(|result| result.map_err(StorageError::from));

        let scan_log_id = match result {
            Ok(scan_log_id) => Some(scan_log_id),
            Err(error) => match self.config.verification.on_scan_log_failure {
                ScanLogFailurePolicy::Ignore => {
                    tracing::warn!(%driver_id, %error, "Failed to log scan");
                    None
                }
                ScanLogFailurePolicy::Fail => return Err(error.into()),
            },
        };

        tracing::info!(%driver_id, verified_by, "driver verified");

        Ok(VerificationResultDTO {
            driver: driver.into(),
            scan_log_id,
        })
    }
}
