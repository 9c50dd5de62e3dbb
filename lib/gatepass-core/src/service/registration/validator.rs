use mime::Mime;
use validator::{ValidateEmail, ValidateLength};

use super::dto::{PassportPhotoDTO, RegisterDriverRequestDTO};
use crate::service::error::ValidationError;

fn validate_min_length(
    field: &'static str,
    value: &str,
    min: u64,
) -> Result<(), ValidationError> {
    if value.validate_length(Some(min), None, None) {
        Ok(())
    } else {
        Err(ValidationError::FieldTooShort { field, min })
    }
}

/// Expects trimmed values. Fields are checked in form order and the first violation is returned.
///
/// On success the passport photo is moved out of the request together with its media type.
pub(crate) fn validate_register_driver_request(
    request: &mut RegisterDriverRequestDTO,
) -> Result<(PassportPhotoDTO, Mime), ValidationError> {
    validate_min_length("full_name", &request.full_name, 3)?;
    validate_min_length("nin", &request.nin, 5)?;
    validate_min_length("phone_number", &request.phone_number, 10)?;

    if !request.email.validate_email() {
        return Err(ValidationError::InvalidEmail);
    }

    validate_min_length("address", &request.address, 10)?;
    validate_min_length(
        "vehicle_registration_number",
        &request.vehicle_registration_number,
        3,
    )?;
    validate_min_length("vehicle_type", &request.vehicle_type, 3)?;
    validate_min_length("vehicle_color", &request.vehicle_color, 3)?;
    validate_min_length("vehicle_model", &request.vehicle_model, 3)?;

    validate_passport_photo(request.passport_photo.take())
}

fn validate_passport_photo(
    photo: Option<PassportPhotoDTO>,
) -> Result<(PassportPhotoDTO, Mime), ValidationError> {
    let photo = photo
        .filter(|photo| !photo.content.is_empty())
        .ok_or(ValidationError::MissingPassportPhoto)?;

    let content_type = photo.content_type.as_deref().unwrap_or_default();
    let media_type = content_type
        .parse::<Mime>()
        .ok()
        .filter(|media_type| media_type.type_() == mime::IMAGE)
        .ok_or_else(|| ValidationError::InvalidPassportPhotoType(content_type.to_owned()))?;

    Ok((photo, media_type))
}
