use axum::Json;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::build_info;
use crate::metrics::encode_metrics;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BuildInfoRestDTO {
    #[schema(example = "0.1.0")]
    pub version: &'static str,
    pub commit: &'static str,
    pub branch: &'static str,
    pub tag: &'static str,
    pub build_time: &'static str,
    pub rust_version: &'static str,
    pub rust_channel: &'static str,
}

#[utoipa::path(
    get,
    path = "/build-info",
    responses(
        (status = 200, description = "OK", body = BuildInfoRestDTO)
    ),
    tag = "other",
    summary = "Build information",
    description = "Version and source revision the running server was built from.",
)]
pub(crate) async fn get_build_info() -> Json<BuildInfoRestDTO> {
    Json(BuildInfoRestDTO {
        version: build_info::PKG_VERSION,
        commit: build_info::COMMIT_HASH,
        branch: build_info::BRANCH,
        tag: build_info::TAG,
        build_time: build_info::BUILD_TIME,
        rust_version: build_info::RUST_VERSION,
        rust_channel: build_info::BUILD_RUST_CHANNEL,
    })
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 204, description = "Server is up")
    ),
    tag = "other",
    summary = "Health check",
)]
pub(crate) async fn health_check() -> StatusCode {
    StatusCode::NO_CONTENT
}

#[utoipa::path(
    get,
    path = "/metrics",
    responses(
        (status = 200, description = "Prometheus text exposition", content_type = "text/plain"),
        (status = 500, description = "Metrics could not be encoded")
    ),
    tag = "other",
    summary = "Prometheus metrics",
)]
pub(crate) async fn get_metrics() -> Response {
    match encode_metrics() {
        Ok(metrics) => {
            ([(header::CONTENT_TYPE, prometheus::TEXT_FORMAT)], metrics).into_response()
        }
        Err(error) => {
            tracing::error!(%error, "Failed to encode metrics");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
