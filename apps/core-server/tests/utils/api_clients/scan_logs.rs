use super::{HttpClient, Response};

pub struct ScanLogsApi {
    client: HttpClient,
}

impl ScanLogsApi {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, limit: Option<u64>) -> Response {
        let url = match limit {
            Some(limit) => format!("/api/scan-log/v1?limit={limit}"),
            None => "/api/scan-log/v1".to_string(),
        };
        self.client.get(&url).await
    }
}
