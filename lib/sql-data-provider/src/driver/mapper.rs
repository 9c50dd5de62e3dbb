use gatepass_core::model::driver::Driver;
use sea_orm::Set;

use crate::entity::driver;

impl From<Driver> for driver::ActiveModel {
    fn from(value: Driver) -> Self {
        Self {
            id: Set(value.id),
            full_name: Set(value.full_name),
            nin: Set(value.nin),
            phone_number: Set(value.phone_number),
            email: Set(value.email),
            address: Set(value.address),
            vehicle_registration_number: Set(value.vehicle_registration_number),
            vehicle_type: Set(value.vehicle_type),
            vehicle_color: Set(value.vehicle_color),
            vehicle_model: Set(value.vehicle_model),
            passport_photo_url: Set(value.passport_photo_url),
            qr_code_url: Set(value.qr_code_url),
            status: Set(value.status.into()),
            registration_date: Set(value.registration_date),
            last_modified: Set(value.last_modified),
        }
    }
}
