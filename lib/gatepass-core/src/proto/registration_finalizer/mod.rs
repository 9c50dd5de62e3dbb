use shared_types::DriverId;

use crate::service::error::ServiceError;

pub(crate) mod finalizer;


pub(crate) fn qr_code_key(driver_id: &DriverId) -> String {
    format!("qrcodes/{driver_id}.png")
}

/// Renders, stores and attaches the QR code of a driver, marking the registration complete.
///
/// Idempotent: the payload, the object key and therefore the URL only depend on the driver id.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub(crate) trait RegistrationFinalizer: Send + Sync {
    /// Returns the retrieval URL of the stored QR code
    async fn finalize(&self, driver_id: DriverId) -> Result<String, ServiceError>;
}
