use shared_types::ScanLogId;
use time::OffsetDateTime;

use crate::model::driver::Driver;
use crate::model::scan_log::{ScanLog, ScanLogStatus};

pub(super) fn scan_log_from_driver(
    driver: &Driver,
    verified_by: &str,
    now: OffsetDateTime,
) -> ScanLog {
    ScanLog {
        id: ScanLogId::new_random(),
        driver_id: driver.id,
        driver_name: driver.full_name.clone(),
        vehicle_registration_number: driver.vehicle_registration_number.clone(),
        scanned_at: now,
        verified_by: verified_by.to_owned(),
        status: ScanLogStatus::Verified,
    }
}
