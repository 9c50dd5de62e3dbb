use std::time::Duration;

use shared_types::DriverId;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::config::core_config::{
    CoreConfig, ObjectStorageConfig, ObjectStorageType, QrCodeConfig, RegistrationConfig,
    TaskConfig, VerificationConfig,
};
use crate::model::driver::{Driver, DriverStatus};
use crate::model::scan_log::{ScanLog, ScanLogStatus};

pub fn generic_config() -> CoreConfig {
    CoreConfig {
        object_storage: ObjectStorageConfig {
            r#type: ObjectStorageType::Db,
            public_base_url: Some("http://localhost:3000".to_string()),
            root_directory: None,
        },
        qr_code: QrCodeConfig::default(),
        registration: RegistrationConfig {
            step_timeout: Duration::from_secs(5),
            ..Default::default()
        },
        verification: VerificationConfig::default(),
        task: TaskConfig::default(),
    }
}

pub fn dummy_driver() -> Driver {
    let now = OffsetDateTime::now_utc();
    Driver {
        id: Uuid::new_v4().into(),
        full_name: "John Doe".to_string(),
        nin: "12345678901".to_string(),
        phone_number: "08012345678".to_string(),
        email: "john.doe@example.com".to_string(),
        address: "12 University Road, Campus".to_string(),
        vehicle_registration_number: "KJA-123AB".to_string(),
        vehicle_type: "Car".to_string(),
        vehicle_color: "Blue".to_string(),
        vehicle_model: "Toyota Corolla".to_string(),
        passport_photo_url: "http://localhost:3000/files/passports/1_a_photo.jpg".to_string(),
        qr_code_url: Some("http://localhost:3000/files/qrcodes/a.png".to_string()),
        status: DriverStatus::Complete,
        registration_date: now,
        last_modified: now,
    }
}

pub fn dummy_scan_log(driver_id: DriverId) -> ScanLog {
    ScanLog {
        id: Uuid::new_v4().into(),
        driver_id,
        driver_name: "John Doe".to_string(),
        vehicle_registration_number: "KJA-123AB".to_string(),
        scanned_at: OffsetDateTime::now_utc(),
        verified_by: "guard@campus.edu".to_string(),
        status: ScanLogStatus::Verified,
    }
}
