#![cfg_attr(feature = "strict", deny(warnings))]

use std::net::IpAddr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_with::{DurationSeconds, serde_as};

pub mod dto;
pub mod endpoint;
pub mod metrics;
pub mod router;
pub mod build_info {
    use shadow_rs::shadow;

    shadow!(build);

    pub use build::*;
}
mod middleware;
mod scheduler;

#[serde_as]
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerConfig {
    pub database_url: String,
    pub server_ip: Option<IpAddr>,
    pub server_port: Option<u16>,
    pub trace_json: Option<bool>,
    pub auth_token: String,
    pub core_base_url: String,
    pub sentry_dsn: Option<String>,
    pub sentry_environment: Option<String>,
    pub trace_level: Option<String>,
    // when set to true hides the `cause` field in the error response
    pub hide_error_response_cause: bool,
    /// maximum accepted request body for driver registration, in bytes
    pub max_upload_size: Option<usize>,
    /// runs the pending-registration reconciliation periodically when set
    #[serde_as(as = "Option<DurationSeconds<u64>>")]
    pub finalize_pending_interval: Option<Duration>,
}
