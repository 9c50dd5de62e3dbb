use sea_orm_migration::prelude::*;

use crate::datatype::{ColumnDefExt, timestamp, uuid_char};

#[derive(DeriveMigrationName)]
pub struct Migration;

const UNIQUE_DRIVER_VEHICLE_REGISTRATION_NUMBER_INDEX: &str =
    "index-Driver-VehicleRegistrationNumber-Unique";
const DRIVER_STATUS_REGISTRATION_DATE_INDEX: &str = "index-Driver-Status-RegistrationDate";
const DRIVER_REGISTRATION_DATE_INDEX: &str = "index-Driver-RegistrationDate";
const SCAN_LOG_DRIVER_ID_INDEX: &str = "index-ScanLog-DriverId";
const SCAN_LOG_SCANNED_AT_INDEX: &str = "index-ScanLog-ScannedAt";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Driver::Table)
                    .if_not_exists()
                    .col(uuid_char(Driver::Id).primary_key())
                    .col(ColumnDef::new(Driver::FullName).string().not_null())
                    .col(ColumnDef::new(Driver::Nin).string().not_null())
                    .col(ColumnDef::new(Driver::PhoneNumber).string().not_null())
                    .col(ColumnDef::new(Driver::Email).string().not_null())
                    .col(ColumnDef::new(Driver::Address).text().not_null())
                    .col(
                        ColumnDef::new(Driver::VehicleRegistrationNumber)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Driver::VehicleType).string().not_null())
                    .col(ColumnDef::new(Driver::VehicleColor).string().not_null())
                    .col(ColumnDef::new(Driver::VehicleModel).string().not_null())
                    .col(ColumnDef::new(Driver::PassportPhotoUrl).text().not_null())
                    .col(ColumnDef::new(Driver::QrCodeUrl).text().null())
                    .col(ColumnDef::new(Driver::Status).string().not_null())
                    .col(timestamp(Driver::RegistrationDate, manager))
                    .col(timestamp(Driver::LastModified, manager))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(UNIQUE_DRIVER_VEHICLE_REGISTRATION_NUMBER_INDEX)
                    .table(Driver::Table)
                    .col(Driver::VehicleRegistrationNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(DRIVER_REGISTRATION_DATE_INDEX)
                    .table(Driver::Table)
                    .col(Driver::RegistrationDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(DRIVER_STATUS_REGISTRATION_DATE_INDEX)
                    .table(Driver::Table)
                    .col(Driver::Status)
                    .col(Driver::RegistrationDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ScanLog::Table)
                    .if_not_exists()
                    .col(uuid_char(ScanLog::Id).primary_key())
                    .col(uuid_char(ScanLog::DriverId))
                    .col(ColumnDef::new(ScanLog::DriverName).string().not_null())
                    .col(
                        ColumnDef::new(ScanLog::VehicleRegistrationNumber)
                            .string()
                            .not_null(),
                    )
                    .col(timestamp(ScanLog::ScannedAt, manager))
                    .col(ColumnDef::new(ScanLog::VerifiedBy).string().not_null())
                    .col(ColumnDef::new(ScanLog::Status).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(SCAN_LOG_DRIVER_ID_INDEX)
                    .table(ScanLog::Table)
                    .col(ScanLog::DriverId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(SCAN_LOG_SCANNED_AT_INDEX)
                    .table(ScanLog::Table)
                    .col(ScanLog::ScannedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(StoredObject::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StoredObject::Key)
                            .string_len(512)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StoredObject::ContentType)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StoredObject::Content)
                            .large_blob(manager)
                            .not_null(),
                    )
                    .col(timestamp(StoredObject::CreatedDate, manager))
                    .col(timestamp(StoredObject::LastModified, manager))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StoredObject::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ScanLog::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Driver::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Driver {
    Table,
    Id,
    FullName,
    Nin,
    PhoneNumber,
    Email,
    Address,
    VehicleRegistrationNumber,
    VehicleType,
    VehicleColor,
    VehicleModel,
    PassportPhotoUrl,
    QrCodeUrl,
    Status,
    RegistrationDate,
    LastModified,
}

#[derive(Iden)]
pub enum ScanLog {
    Table,
    Id,
    DriverId,
    DriverName,
    VehicleRegistrationNumber,
    ScannedAt,
    VerifiedBy,
    Status,
}

#[derive(Iden)]
pub enum StoredObject {
    Table,
    Key,
    ContentType,
    Content,
    CreatedDate,
    LastModified,
}
