use shared_types::{DriverId, ScanLogId};
use strum::{Display, EnumString};
use time::OffsetDateTime;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScanLog {
    pub id: ScanLogId,
    pub driver_id: DriverId,
    pub driver_name: String,
    pub vehicle_registration_number: String,
    pub scanned_at: OffsetDateTime,
    pub verified_by: String,
    pub status: ScanLogStatus,
}

#[derive(Clone, Copy, Debug, Display, EnumString, Eq, PartialEq)]
pub enum ScanLogStatus {
    #[strum(serialize = "VERIFIED")]
    Verified,
    #[strum(serialize = "NOT_FOUND")]
    NotFound,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScanLogListQuery {
    pub limit: u64,
    pub driver_id: Option<DriverId>,
}
