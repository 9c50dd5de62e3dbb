use axum::Json;
use axum::extract::State;
use axum_extra::extract::WithRejection;

use super::dto::{VerifyDriverRequestRestDTO, VerifyDriverResponseRestDTO};
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::OkOrErrorResponse;
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/api/scan/v1",
    request_body = VerifyDriverRequestRestDTO,
    responses(OkOrErrorResponse<VerifyDriverResponseRestDTO>),
    tag = "scan",
    security(
        ("bearer" = [])
    ),
    summary = "Verify scanned driver",
    description = indoc::formatdoc! {"
        Resolves the payload of a scanned QR code to a registered driver and
        records the scan. Every successful call creates a new scan log entry.
    "},
)]
pub(crate) async fn post_scan(
    state: State<AppState>,
    WithRejection(Json(request), _): WithRejection<
        Json<VerifyDriverRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> OkOrErrorResponse<VerifyDriverResponseRestDTO> {
    let result = state
        .core
        .verification_service
        .verify_driver(&request.driver_id, &request.verified_by)
        .await;
    OkOrErrorResponse::from_result(result, state, "verifying scanned driver")
}
