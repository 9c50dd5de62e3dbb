use gatepass_core::model::scan_log::{ScanLog, ScanLogStatus as ModelScanLogStatus};
use one_dto_mapper::{From, Into};
use sea_orm::entity::prelude::*;
use shared_types::{DriverId, ScanLogId};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Into)]
#[into(ScanLog)]
#[sea_orm(table_name = "scan_log")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: ScanLogId,
    pub driver_id: DriverId,
    pub driver_name: String,
    pub vehicle_registration_number: String,
    pub scanned_at: OffsetDateTime,
    pub verified_by: String,
    pub status: ScanLogStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, From, Into)]
#[from(ModelScanLogStatus)]
#[into(ModelScanLogStatus)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ScanLogStatus {
    #[sea_orm(string_value = "VERIFIED")]
    Verified,
    #[sea_orm(string_value = "NOT_FOUND")]
    NotFound,
}
