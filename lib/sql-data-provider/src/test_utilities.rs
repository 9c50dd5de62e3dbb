use gatepass_core::model::driver::{Driver, DriverStatus};
use time::OffsetDateTime;
use time::macros::datetime;
use uuid::Uuid;

use crate::{DataLayer, db_conn};

pub fn get_dummy_date() -> OffsetDateTime {
    datetime!(2005-04-02 21:37 +1)
}

pub fn dummy_driver(vehicle_registration_number: &str) -> Driver {
    Driver {
        id: Uuid::new_v4().into(),
        full_name: "John Doe".to_string(),
        nin: "12345678901".to_string(),
        phone_number: "08012345678".to_string(),
        email: "john.doe@example.com".to_string(),
        address: "12 University Road, Lagos".to_string(),
        vehicle_registration_number: vehicle_registration_number.to_string(),
        vehicle_type: "Car".to_string(),
        vehicle_color: "Blue".to_string(),
        vehicle_model: "Toyota Corolla".to_string(),
        passport_photo_url: "http://localhost:3000/files/passports/photo.jpg".to_string(),
        qr_code_url: Some("http://localhost:3000/files/qrcodes/qr.png".to_string()),
        status: DriverStatus::Complete,
        registration_date: get_dummy_date(),
        last_modified: get_dummy_date(),
    }
}

pub async fn setup_test_data_layer_and_connection_with_custom_url(database_url: &str) -> DataLayer {
    let db = db_conn(database_url, true).await.unwrap();
    DataLayer::build(db)
}

pub async fn setup_test_data_layer_and_connection() -> DataLayer {
    setup_test_data_layer_and_connection_with_custom_url("sqlite::memory:").await
}
