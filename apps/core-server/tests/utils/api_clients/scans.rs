use serde_json::json;

use super::{HttpClient, Response};

pub struct ScansApi {
    client: HttpClient,
}

impl ScansApi {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn verify(&self, driver_id: impl Into<String>, verified_by: &str) -> Response {
        let body = json!({
            "driverId": driver_id.into(),
            "verifiedBy": verified_by,
        });

        self.client.post("/api/scan/v1", body).await
    }
}
