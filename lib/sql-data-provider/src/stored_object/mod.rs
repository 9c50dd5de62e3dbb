use sea_orm::DatabaseConnection;

pub mod repository;

pub(crate) struct StoredObjectProvider {
    pub db: DatabaseConnection,
}
