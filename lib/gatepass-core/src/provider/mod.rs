pub mod object_storage;
pub mod qr_code;
pub mod task;
