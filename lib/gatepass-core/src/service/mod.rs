pub mod driver;
pub mod error;
pub mod object_storage;
pub mod registration;
pub mod scan_log;
pub mod task;
pub mod verification;

#[cfg(test)]
pub(crate) mod test_utilities;
