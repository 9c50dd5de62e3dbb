use gatepass_core::model::driver::DriverStatus;
use gatepass_core::service::driver::dto::GetDriverResponseDTO;
use one_dto_mapper::{From, Into};
use serde::{Deserialize, Serialize};
use shared_types::DriverId;
use time::OffsetDateTime;
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize, ToSchema, From, Into)]
#[from(DriverStatus)]
#[into(DriverStatus)]
pub(crate) enum DriverStatusRestEnum {
    #[serde(rename = "PENDING_QR")]
    PendingQr,
    #[serde(rename = "COMPLETE")]
    Complete,
}

/// Multipart form of a driver registration
#[derive(Debug, Default, ToSchema)]
#[schema(rename_all = "camelCase")]
pub(crate) struct RegisterDriverRequestRestDTO {
    #[schema(example = "John Doe")]
    pub full_name: String,
    /// National identification number
    #[schema(example = "12345678901")]
    pub nin: String,
    #[schema(example = "08012345678")]
    pub phone_number: String,
    #[schema(example = "john@example.com")]
    pub email: String,
    pub address: String,
    /// Must not be registered yet
    #[schema(example = "KJA-123AB")]
    pub vehicle_registration_number: String,
    #[schema(example = "Car")]
    pub vehicle_type: String,
    #[schema(example = "Blue")]
    pub vehicle_color: String,
    #[schema(example = "Toyota Corolla")]
    pub vehicle_model: String,
    /// Image file
    #[schema(value_type = String, format = Binary)]
    pub passport_photo: Option<PassportPhotoRestDTO>,
}

#[derive(Debug)]
pub(crate) struct PassportPhotoRestDTO {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub content: Vec<u8>,
}

#[derive(Clone, Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RegisterDriverResponseRestDTO {
    pub driver_id: DriverId,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[from(GetDriverResponseDTO)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GetDriverResponseRestDTO {
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
    pub status: DriverStatusRestEnum,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, example = "2025-03-01T10:00:00Z")]
    pub registration_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, example = "2025-03-01T10:00:00Z")]
    pub last_modified: OffsetDateTime,
}

#[derive(Clone, Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub(crate) struct GetDriverListQueryParamsRest {
    /// Defaults to 5, at most 100
    pub limit: Option<u64>,
    #[param(inline)]
    pub status: Option<DriverStatusRestEnum>,
}
