use serde_json::json;

use super::{HttpClient, Response};

pub struct TasksApi {
    client: HttpClient,
}

impl TasksApi {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn run(&self, name: &str) -> Response {
        self.client
            .post("/api/task/v1/run", json!({ "name": name }))
            .await
    }
}
