use gatepass_core::model::scan_log::ScanLogStatus;
use gatepass_core::service::scan_log::dto::GetScanLogResponseDTO;
use one_dto_mapper::From;
use serde::{Deserialize, Serialize};
use shared_types::{DriverId, ScanLogId};
use time::OffsetDateTime;
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, ToSchema, From)]
#[from(ScanLogStatus)]
pub(crate) enum ScanLogStatusRestEnum {
    #[serde(rename = "VERIFIED")]
    Verified,
    #[serde(rename = "NOT_FOUND")]
    NotFound,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[from(GetScanLogResponseDTO)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GetScanLogResponseRestDTO {
    pub id: ScanLogId,
    pub driver_id: DriverId,
    pub driver_name: String,
    pub vehicle_registration_number: String,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, example = "2025-03-01T10:00:00Z")]
    pub scanned_at: OffsetDateTime,
    pub verified_by: String,
    pub status: ScanLogStatusRestEnum,
}

#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub(crate) struct GetScanLogListQueryParamsRest {
    /// Defaults to 50, at most 500
    pub limit: Option<u64>,
}
