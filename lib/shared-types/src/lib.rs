mod driver_id;
mod macros;
mod scan_log_id;

pub use driver_id::DriverId;
pub use scan_log_id::ScanLogId;
