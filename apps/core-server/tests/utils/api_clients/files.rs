use super::{HttpClient, Response};

pub struct FilesApi {
    client: HttpClient,
}

impl FilesApi {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn get(&self, key: &str) -> Response {
        let url = format!("/files/{key}");
        self.client.get_unauthenticated(&url).await
    }

    /// Fetches an absolute url handed out by the service, e.g. `passportPhotoUrl`
    pub async fn get_by_url(&self, url: &str) -> Response {
        let resp = super::http_client().get(url).send().await.unwrap();
        Response { resp }
    }
}
