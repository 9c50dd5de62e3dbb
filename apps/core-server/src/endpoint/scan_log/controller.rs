use axum::extract::{Query, State};
use axum_extra::extract::WithRejection;

use super::dto::{GetScanLogListQueryParamsRest, GetScanLogResponseRestDTO};
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::{OkOrErrorResponse, VecResponse};
use crate::router::AppState;

#[utoipa::path(
    get,
    path = "/api/scan-log/v1",
    responses(OkOrErrorResponse<VecResponse<GetScanLogResponseRestDTO>>),
    params(GetScanLogListQueryParamsRest),
    tag = "scan",
    security(
        ("bearer" = [])
    ),
    summary = "List scans",
    description = "Returns the most recent gate scans across all drivers.",
)]
pub(crate) async fn get_scan_log_list(
    state: State<AppState>,
    WithRejection(Query(query), _): WithRejection<
        Query<GetScanLogListQueryParamsRest>,
        ErrorResponseRestDTO,
    >,
) -> OkOrErrorResponse<VecResponse<GetScanLogResponseRestDTO>> {
    let result = state
        .core
        .scan_log_service
        .get_scan_log_list(query.into())
        .await;
    OkOrErrorResponse::from_result(result, state, "listing scans")
}
