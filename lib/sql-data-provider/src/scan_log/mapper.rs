use gatepass_core::model::scan_log::ScanLog;
use sea_orm::Set;

use crate::entity::scan_log;

impl From<ScanLog> for scan_log::ActiveModel {
    fn from(value: ScanLog) -> Self {
        Self {
            id: Set(value.id),
            driver_id: Set(value.driver_id),
            driver_name: Set(value.driver_name),
            vehicle_registration_number: Set(value.vehicle_registration_number),
            scanned_at: Set(value.scanned_at),
            verified_by: Set(value.verified_by),
            status: Set(value.status.into()),
        }
    }
}
