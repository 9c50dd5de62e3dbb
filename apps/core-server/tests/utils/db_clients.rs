use gatepass_core::repository::DataRepository;
use sql_data_provider::{DataLayer, DbConn};

use self::drivers::DriversDB;
use self::scan_logs::ScanLogsDB;
use self::stored_objects::StoredObjectsDB;

pub mod drivers;
pub mod scan_logs;
pub mod stored_objects;

pub struct DbClient {
    pub drivers: DriversDB,
    pub scan_logs: ScanLogsDB,
    pub stored_objects: StoredObjectsDB,
    #[allow(unused)]
    pub db_conn: DbConn,
}

impl DbClient {
    pub fn new(db: DbConn) -> Self {
        let layer = DataLayer::build(db.clone());
        Self {
            db_conn: db,
            drivers: DriversDB::new(layer.get_driver_repository()),
            scan_logs: ScanLogsDB::new(layer.get_scan_log_repository()),
            stored_objects: StoredObjectsDB::new(layer.get_stored_object_repository()),
        }
    }
}
