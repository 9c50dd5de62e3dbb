use shared_types::DriverId;

use super::{HttpClient, Response};
use crate::fixtures::DriverForm;

pub struct DriversApi {
    client: HttpClient,
}

#[derive(Default)]
pub struct DriverFilters {
    pub limit: Option<u64>,
    pub status: Option<&'static str>,
}

impl DriversApi {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn register(&self, form: DriverForm) -> Response {
        self.client
            .post_multipart("/api/driver/v1", form.into_multipart())
            .await
    }

    pub async fn get(&self, id: impl Into<String>) -> Response {
        let url = format!("/api/driver/v1/{}", id.into());
        self.client.get(&url).await
    }

    pub async fn list(&self, filters: DriverFilters) -> Response {
        let mut params = vec![];
        if let Some(limit) = filters.limit {
            params.push(format!("limit={limit}"));
        }
        if let Some(status) = filters.status {
            params.push(format!("status={status}"));
        }

        let url = if params.is_empty() {
            "/api/driver/v1".to_string()
        } else {
            format!("/api/driver/v1?{}", params.join("&"))
        };
        self.client.get(&url).await
    }

    pub async fn scan_logs(&self, id: &DriverId, limit: Option<u64>) -> Response {
        let url = match limit {
            Some(limit) => format!("/api/driver/v1/{id}/scan-log?limit={limit}"),
            None => format!("/api/driver/v1/{id}/scan-log"),
        };
        self.client.get(&url).await
    }
}
