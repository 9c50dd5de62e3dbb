pub mod driver;
pub mod scan_log;
pub mod stored_object;
