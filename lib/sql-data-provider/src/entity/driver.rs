use gatepass_core::model::driver::{Driver, DriverStatus as ModelDriverStatus};
use one_dto_mapper::{From, Into};
use sea_orm::entity::prelude::*;
use shared_types::DriverId;
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Into)]
#[into(Driver)]
#[sea_orm(table_name = "driver")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: DriverId,
    pub full_name: String,
    pub nin: String,
    pub phone_number: String,
    pub email: String,
    pub address: String,
    #[sea_orm(unique)]
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

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, From, Into)]
#[from(ModelDriverStatus)]
#[into(ModelDriverStatus)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum DriverStatus {
    #[sea_orm(string_value = "PENDING_QR")]
    PendingQr,
    #[sea_orm(string_value = "COMPLETE")]
    Complete,
}
