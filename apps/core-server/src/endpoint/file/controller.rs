use axum::extract::{Path, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum_extra::extract::WithRejection;

use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::ErrorResponse;
use crate::router::AppState;

#[utoipa::path(
    get,
    path = "/files/{key}",
    responses(
        (status = 200, description = "Stored file, served with its content type"),
        (status = 404, description = "Not found", body = ErrorResponseRestDTO),
    ),
    params(
        ("key" = String, Path, description = "Object key, e.g. `qrcodes/<driver id>.png`")
    ),
    tag = "other",
    summary = "Retrieve stored file",
    description = "Serves passport photos and QR codes referenced by retrieval URLs.",
)]
pub(crate) async fn get_file(
    state: State<AppState>,
    WithRejection(Path(key), _): WithRejection<Path<String>, ErrorResponseRestDTO>,
) -> Response {
    match state.core.object_storage_service.get_object(&key).await {
        Ok(object) => {
            let content_type = HeaderValue::from_str(&object.content_type)
                .unwrap_or(HeaderValue::from_static("application/octet-stream"));

            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, content_type),
                    (header::CACHE_CONTROL, HeaderValue::from_static("no-cache")),
                ],
                object.content,
            )
                .into_response()
        }
        Err(error) => {
            ErrorResponse::from_service_error_with_trace(error, state, "getting stored file")
                .into_response()
        }
    }
}
