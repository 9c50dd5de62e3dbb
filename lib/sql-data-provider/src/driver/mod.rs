use sea_orm::DatabaseConnection;

pub mod mapper;
pub mod repository;

pub(crate) struct DriverProvider {
    pub db: DatabaseConnection,
}
