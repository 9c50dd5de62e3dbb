use std::sync::OnceLock;

use serde::de::DeserializeOwned;
use serde_json::Value;

use self::drivers::DriversApi;
use self::files::FilesApi;
use self::other::OtherApi;
use self::scan_logs::ScanLogsApi;
use self::scans::ScansApi;
use self::tasks::TasksApi;

pub mod drivers;
pub mod files;
pub mod scan_logs;
pub mod scans;
pub mod tasks;

pub fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(|| reqwest::ClientBuilder::new().build().unwrap())
}

#[derive(Clone)]
pub struct HttpClient {
    base_url: String,
    token: String,
}

impl HttpClient {
    pub async fn get(&self, url: &str) -> Response {
        let url = format!("{}{url}", self.base_url);

        let resp = http_client()
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await
            .unwrap();

        Response { resp }
    }

    pub async fn post(&self, url: &str, body: impl Into<Option<Value>>) -> Response {
        let url = format!("{}{url}", self.base_url);

        let resp = http_client()
            .post(url)
            .bearer_auth(&self.token)
            .json(&body.into())
            .send()
            .await
            .unwrap();

        Response { resp }
    }

    pub async fn post_multipart(&self, url: &str, form: reqwest::multipart::Form) -> Response {
        let url = format!("{}{url}", self.base_url);

        let resp = http_client()
            .post(url)
            .bearer_auth(&self.token)
            .multipart(form)
            .send()
            .await
            .unwrap();

        Response { resp }
    }

    pub async fn get_unauthenticated(&self, url: &str) -> Response {
        let url = format!("{}{url}", self.base_url);

        let resp = http_client().get(url).send().await.unwrap();

        Response { resp }
    }

    pub fn with_token(&self, token: impl Into<String>) -> Self {
        Self {
            base_url: self.base_url.to_owned(),
            token: token.into(),
        }
    }
}

pub struct Response {
    resp: reqwest::Response,
}

impl Response {
    pub fn status(&self) -> u16 {
        self.resp.status().into()
    }

    pub fn header(&self, name: &str) -> Option<String> {
        self.resp
            .headers()
            .get(name)
            .map(|value| value.to_str().unwrap().to_owned())
    }

    pub async fn bytes(self) -> Vec<u8> {
        self.resp.bytes().await.unwrap().to_vec()
    }

    pub async fn text(self) -> String {
        self.resp.text().await.unwrap()
    }

    pub async fn json<T: DeserializeOwned>(self) -> T {
        let full = self.resp.bytes().await.unwrap();
        serde_json::from_slice(&full).unwrap()
    }

    pub async fn json_value(self) -> Value {
        self.json().await
    }

    /// Asserts the status and returns the error code of an error response
    pub async fn error_code(self, expected_status: u16) -> String {
        assert_eq!(self.status(), expected_status);
        let body = self.json_value().await;
        body["code"].as_str().unwrap().to_owned()
    }
}

pub struct Client {
    pub drivers: DriversApi,
    pub scans: ScansApi,
    pub scan_logs: ScanLogsApi,
    pub tasks: TasksApi,
    pub files: FilesApi,
    pub other: OtherApi,
}

impl Client {
    pub fn new(base_url: String, token: String) -> Self {
        let client = HttpClient { base_url, token };

        Self {
            drivers: DriversApi::new(client.clone()),
            scans: ScansApi::new(client.clone()),
            scan_logs: ScanLogsApi::new(client.clone()),
            tasks: TasksApi::new(client.clone()),
            files: FilesApi::new(client.clone()),
            other: OtherApi::new(client),
        }
    }
}
