use shared_types::DriverId;
use strum::{Display, EnumString};
use time::OffsetDateTime;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Driver {
    pub id: DriverId,
    pub full_name: String,
    pub nin: String,
    pub phone_number: String,
    pub email: String,
    pub address: String,
    pub vehicle_registration_number: String,
    pub vehicle_type: String,
    pub vehicle_color: String,
    pub vehicle_model: String,
    pub passport_photo_url: String,
    pub qr_code_url: Option<String>,
    pub status: DriverStatus,
    pub registration_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
}

/// `PendingQr` until the QR code is stored and attached to the record
#[derive(Clone, Copy, Debug, Display, EnumString, Eq, PartialEq, Hash)]
pub enum DriverStatus {
    #[strum(serialize = "PENDING_QR")]
    PendingQr,
    #[strum(serialize = "COMPLETE")]
    Complete,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpdateDriverRequest {
    pub id: DriverId,
    pub qr_code_url: Option<String>,
    pub status: Option<DriverStatus>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DriverListQuery {
    pub limit: u64,
    pub status: Option<DriverStatus>,
    pub registered_before: Option<OffsetDateTime>,
    /// Ordering by registration date
    pub sort_direction: SortDirection,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}
