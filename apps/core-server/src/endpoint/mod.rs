pub mod misc;

pub mod driver;
pub mod file;
pub mod scan;
pub mod scan_log;
pub mod task;
