use shared_types::ScanLogId;

use crate::service::driver::dto::GetDriverResponseDTO;

#[derive(Clone, Debug)]
pub struct VerificationResultDTO {
    pub driver: GetDriverResponseDTO,
    /// `None` when the scan could not be logged and the failure was tolerated
    pub scan_log_id: Option<ScanLogId>,
}
