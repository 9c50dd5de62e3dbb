use one_dto_mapper::From;
use shared_types::DriverId;
use time::OffsetDateTime;

use crate::model::driver::{Driver, DriverStatus};

#[derive(Clone, Debug, PartialEq, Eq, From)]
#[from(Driver)]
pub struct GetDriverResponseDTO {
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

#[derive(Clone, Debug, Default)]
pub struct GetDriverListQueryDTO {
    pub limit: Option<u64>,
    pub status: Option<DriverStatus>,
}
