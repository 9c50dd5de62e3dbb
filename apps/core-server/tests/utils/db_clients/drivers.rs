use std::sync::Arc;

use gatepass_core::model::driver::{Driver, DriverListQuery, DriverStatus, SortDirection};
use gatepass_core::repository::driver_repository::DriverRepository;
use shared_types::DriverId;
use sql_data_provider::test_utilities::dummy_driver;
use time::OffsetDateTime;

pub struct DriversDB {
    repository: Arc<dyn DriverRepository>,
}

impl DriversDB {
    pub fn new(repository: Arc<dyn DriverRepository>) -> Self {
        Self { repository }
    }

    pub async fn get(&self, id: &DriverId) -> Option<Driver> {
        self.repository.get_driver(id).await.unwrap()
    }

    pub async fn create(&self, vehicle_registration_number: &str) -> Driver {
        let driver = Driver {
            registration_date: OffsetDateTime::now_utc(),
            last_modified: OffsetDateTime::now_utc(),
            ..dummy_driver(vehicle_registration_number)
        };

        self.repository.create_driver(driver.clone()).await.unwrap();
        driver
    }

    /// Driver stuck without a QR code, registered at the given time
    pub async fn create_pending(
        &self,
        vehicle_registration_number: &str,
        registration_date: OffsetDateTime,
    ) -> Driver {
        let driver = Driver {
            qr_code_url: None,
            status: DriverStatus::PendingQr,
            registration_date,
            last_modified: registration_date,
            ..dummy_driver(vehicle_registration_number)
        };

        self.repository.create_driver(driver.clone()).await.unwrap();
        driver
    }

    pub async fn count(&self) -> usize {
        self.repository
            .get_driver_list(DriverListQuery {
                limit: 1000,
                status: None,
                registered_before: None,
                sort_direction: SortDirection::Descending,
            })
            .await
            .unwrap()
            .len()
    }
}
