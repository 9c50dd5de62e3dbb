use axum::extract::Multipart;
use gatepass_core::service::driver::dto::GetDriverListQueryDTO;
use gatepass_core::service::registration::dto::{PassportPhotoDTO, RegisterDriverRequestDTO};

use super::dto::{GetDriverListQueryParamsRest, PassportPhotoRestDTO, RegisterDriverRequestRestDTO};
use crate::dto::error::ErrorResponseRestDTO;

impl RegisterDriverRequestRestDTO {
    /// Collects the form parts. Missing text parts stay empty so that validation reports them.
    pub(crate) async fn from_multipart(mut multipart: Multipart) -> Result<Self, ErrorResponseRestDTO> {
        let mut request = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(ToOwned::to_owned) else {
                continue;
            };

            let target = match name.as_str() {
                "fullName" => &mut request.full_name,
                "nin" => &mut request.nin,
                "phoneNumber" => &mut request.phone_number,
                "email" => &mut request.email,
                "address" => &mut request.address,
                "vehicleRegistrationNumber" => &mut request.vehicle_registration_number,
                "vehicleType" => &mut request.vehicle_type,
                "vehicleColor" => &mut request.vehicle_color,
                "vehicleModel" => &mut request.vehicle_model,
                "passportPhoto" => {
                    let file_name = field.file_name().map(ToOwned::to_owned);
                    let content_type = field.content_type().map(ToOwned::to_owned);
                    let content = field.bytes().await?.to_vec();

                    request.passport_photo = Some(PassportPhotoRestDTO {
                        file_name,
                        content_type,
                        content,
                    });
                    continue;
                }
                other => {
                    tracing::debug!("Ignoring unknown form field `{other}`");
                    continue;
                }
            };

            *target = field.text().await?;
        }

        Ok(request)
    }
}

impl From<PassportPhotoRestDTO> for PassportPhotoDTO {
    fn from(value: PassportPhotoRestDTO) -> Self {
        Self {
            file_name: value.file_name,
            content_type: value.content_type,
            content: value.content,
        }
    }
}

impl From<RegisterDriverRequestRestDTO> for RegisterDriverRequestDTO {
    fn from(value: RegisterDriverRequestRestDTO) -> Self {
        Self {
            full_name: value.full_name,
            nin: value.nin,
            phone_number: value.phone_number,
            email: value.email,
            address: value.address,
            vehicle_registration_number: value.vehicle_registration_number,
            vehicle_type: value.vehicle_type,
            vehicle_color: value.vehicle_color,
            vehicle_model: value.vehicle_model,
            passport_photo: value.passport_photo.map(Into::into),
        }
    }
}

impl From<GetDriverListQueryParamsRest> for GetDriverListQueryDTO {
    fn from(value: GetDriverListQueryParamsRest) -> Self {
        Self {
            limit: value.limit,
            status: value.status.map(Into::into),
        }
    }
}
