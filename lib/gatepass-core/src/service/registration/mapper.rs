use shared_types::DriverId;
use time::OffsetDateTime;
use uuid::Uuid;

use super::dto::RegisterDriverRequestDTO;
use crate::model::driver::{Driver, DriverStatus};

const DEFAULT_PHOTO_FILE_NAME: &str = "photo";

pub(super) fn trim_request(request: RegisterDriverRequestDTO) -> RegisterDriverRequestDTO {
    let trim = |value: String| value.trim().to_owned();

    RegisterDriverRequestDTO {
        full_name: trim(request.full_name),
        nin: trim(request.nin),
        phone_number: trim(request.phone_number),
        email: trim(request.email),
        address: trim(request.address),
        vehicle_registration_number: trim(request.vehicle_registration_number),
        vehicle_type: trim(request.vehicle_type),
        vehicle_color: trim(request.vehicle_color),
        vehicle_model: trim(request.vehicle_model),
        passport_photo: request.passport_photo,
    }
}

/// `passports/<unix millis>_<random>_<file name>`, unique even for identical uploads
pub(super) fn passport_photo_key(now: OffsetDateTime, file_name: Option<&str>) -> String {
    let millis = now.unix_timestamp_nanos() / 1_000_000;
    let file_name = file_name
        .map(sanitize_file_name)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_PHOTO_FILE_NAME.to_owned());

    format!("passports/{millis}_{}_{file_name}", Uuid::new_v4())
}

pub(super) fn sanitize_file_name(file_name: &str) -> String {
    // browsers may send a full client-side path
    let base_name = file_name.rsplit(['/', '\\']).next().unwrap_or_default();

    base_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
        .trim_start_matches('.')
        .to_owned()
}

pub(super) fn driver_from_request(
    request: RegisterDriverRequestDTO,
    passport_photo_url: String,
    now: OffsetDateTime,
) -> Driver {
    Driver {
        id: DriverId::new_random(),
        full_name: request.full_name,
        nin: request.nin,
        phone_number: request.phone_number,
        email: request.email,
        address: request.address,
        vehicle_registration_number: request.vehicle_registration_number,
        vehicle_type: request.vehicle_type,
        vehicle_color: request.vehicle_color,
        vehicle_model: request.vehicle_model,
        passport_photo_url,
        qr_code_url: None,
        status: DriverStatus::PendingQr,
        registration_date: now,
        last_modified: now,
    }
}
