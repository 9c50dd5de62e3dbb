use gatepass_core::service::verification::dto::VerificationResultDTO;
use one_dto_mapper::From;
use serde::{Deserialize, Serialize};
use shared_types::ScanLogId;
use utoipa::ToSchema;

use crate::endpoint::driver::dto::GetDriverResponseRestDTO;

#[derive(Clone, Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VerifyDriverRequestRestDTO {
    /// Payload decoded from the scanned QR code
    #[schema(example = "0b1a6c3e-4b3f-4c1e-9a57-2f1c1a4d6e11")]
    pub driver_id: String,
    /// Staff member performing the scan
    #[schema(example = "admin@x.com")]
    pub verified_by: String,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[from(VerificationResultDTO)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VerifyDriverResponseRestDTO {
    pub driver: GetDriverResponseRestDTO,
    /// Missing when the scan could not be logged
    pub scan_log_id: Option<ScanLogId>,
}
