use crate::macros::uuid_id;

uuid_id!(ScanLogId);
