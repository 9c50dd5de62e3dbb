use core_server::router::start_server;
use gatepass_core::model::driver::Driver;
use tokio::task::JoinHandle;

use super::api_clients::Client;
use super::db_clients::DbClient;
use crate::fixtures;

pub struct TestContext {
    pub db: DbClient,
    pub api: Client,
    pub base_url: String,
    _handle: JoinHandle<()>,
}

impl TestContext {
    pub async fn new() -> Self {
        Self::new_with_config(None).await
    }

    pub async fn new_with_config(additional_config: Option<&str>) -> Self {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let config = fixtures::create_config(&base_url, additional_config);
        let db = fixtures::create_db(&config).await;
        let _handle = tokio::spawn({
            let db = db.clone();
            async move { start_server(listener, config, db).await }
        });

        Self {
            db: DbClient::new(db),
            api: Client::new(base_url.to_owned(), "test".into()),
            base_url,
            _handle,
        }
    }

    pub async fn new_with_driver() -> (Self, Driver) {
        let context = Self::new().await;
        let driver = context.db.drivers.create("KJA-123AB").await;
        (context, driver)
    }
}
