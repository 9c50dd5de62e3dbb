use one_dto_mapper::From;
use shared_types::{DriverId, ScanLogId};
use time::OffsetDateTime;

use crate::model::scan_log::{ScanLog, ScanLogStatus};

#[derive(Clone, Debug, PartialEq, Eq, From)]
#[from(ScanLog)]
pub struct GetScanLogResponseDTO {
    pub id: ScanLogId,
    pub driver_id: DriverId,
    pub driver_name: String,
    pub vehicle_registration_number: String,
    pub scanned_at: OffsetDateTime,
    pub verified_by: String,
    pub status: ScanLogStatus,
}

#[derive(Clone, Debug, Default)]
pub struct GetScanLogListQueryDTO {
    pub limit: Option<u64>,
}
