use std::sync::Arc;
use std::time::Duration;

use driver::DriverProvider;
use gatepass_core::repository::DataRepository;
use gatepass_core::repository::driver_repository::DriverRepository;
use gatepass_core::repository::error::DataLayerError;
use gatepass_core::repository::scan_log_repository::ScanLogRepository;
use gatepass_core::repository::stored_object_repository::StoredObjectRepository;
use migration::{Migrator, MigratorTrait};
use scan_log::ScanLogProvider;
use sea_orm::{ConnectOptions, DatabaseConnection};
use stored_object::StoredObjectProvider;

mod entity;
mod mapper;

pub mod driver;
pub mod scan_log;
pub mod stored_object;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utilities;

pub type DbConn = DatabaseConnection;

#[derive(Clone)]
pub struct DataLayer {
    // Used for tests for now
    #[allow(unused)]
    db: DatabaseConnection,
    driver_repository: Arc<dyn DriverRepository>,
    scan_log_repository: Arc<dyn ScanLogRepository>,
    stored_object_repository: Arc<dyn StoredObjectRepository>,
}

impl DataLayer {
    pub fn build(db: DatabaseConnection) -> Self {
        Self {
            driver_repository: Arc::new(DriverProvider { db: db.clone() }),
            scan_log_repository: Arc::new(ScanLogProvider { db: db.clone() }),
            stored_object_repository: Arc::new(StoredObjectProvider { db: db.clone() }),
            db,
        }
    }
}

impl DataRepository for DataLayer {
    fn get_driver_repository(&self) -> Arc<dyn DriverRepository> {
        self.driver_repository.clone()
    }

    fn get_scan_log_repository(&self) -> Arc<dyn ScanLogRepository> {
        self.scan_log_repository.clone()
    }

    fn get_stored_object_repository(&self) -> Arc<dyn StoredObjectRepository> {
        self.stored_object_repository.clone()
    }
}

/// Connects to the database and optionally brings the schema up to date
pub async fn db_conn(
    database_url: impl Into<String>,
    run_migrations: bool,
) -> Result<DbConn, DataLayerError> {
    let database_url = database_url.into();

    let mut options = ConnectOptions::new(database_url.clone());
    options
        .sqlx_logging(false)
        .acquire_timeout(Duration::from_secs(30));

    // every in-memory sqlite connection would otherwise see its own empty database
    if database_url.contains(":memory:") {
        options.max_connections(1).min_connections(1);
    }

    let db = sea_orm::Database::connect(options)
        .await
        .map_err(|err| DataLayerError::Db(err.into()))?;

    if run_migrations {
        tracing::info!("Running database migrations");
        Migrator::up(&db, None)
            .await
            .map_err(|err| DataLayerError::Db(err.into()))?;
    }

    Ok(db)
}
