use axum::extract::{Multipart, Path, Query, State};
use axum_extra::extract::WithRejection;
use gatepass_core::service::scan_log::dto::GetScanLogListQueryDTO;
use shared_types::DriverId;

use super::dto::{
    GetDriverListQueryParamsRest, GetDriverResponseRestDTO, RegisterDriverRequestRestDTO,
    RegisterDriverResponseRestDTO,
};
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::{CreatedOrErrorResponse, ErrorResponse, OkOrErrorResponse, VecResponse};
use crate::endpoint::scan_log::dto::{GetScanLogListQueryParamsRest, GetScanLogResponseRestDTO};
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/api/driver/v1",
    request_body(content = RegisterDriverRequestRestDTO, content_type = "multipart/form-data"),
    responses(CreatedOrErrorResponse<RegisterDriverResponseRestDTO>),
    tag = "driver_management",
    security(
        ("bearer" = [])
    ),
    summary = "Register driver",
    description = indoc::formatdoc! {"
        Registers a driver together with their vehicle and passport photo, and
        issues a QR code encoding the new driver id.

        A vehicle registration number can only be registered once.
    "},
)]
pub(crate) async fn post_driver(
    state: State<AppState>,
    WithRejection(multipart, _): WithRejection<Multipart, ErrorResponseRestDTO>,
) -> CreatedOrErrorResponse<RegisterDriverResponseRestDTO> {
    let request = match RegisterDriverRequestRestDTO::from_multipart(multipart).await {
        Ok(request) => request,
        Err(error) => {
            tracing::warn!("Invalid registration form");
            return ErrorResponse::BadRequest(
                error.hide_cause(state.config.hide_error_response_cause),
            )
            .into();
        }
    };

    let result = state
        .core
        .registration_service
        .register_driver(request.into())
        .await;

    CreatedOrErrorResponse::from_result(
        result.map(|driver_id| RegisterDriverResponseRestDTO { driver_id }),
        state,
        "registering driver",
    )
}

#[utoipa::path(
    get,
    path = "/api/driver/v1",
    responses(OkOrErrorResponse<VecResponse<GetDriverResponseRestDTO>>),
    params(GetDriverListQueryParamsRest),
    tag = "driver_management",
    security(
        ("bearer" = [])
    ),
    summary = "List drivers",
    description = "Returns the most recently registered drivers, newest first.",
)]
pub(crate) async fn get_driver_list(
    state: State<AppState>,
    WithRejection(Query(query), _): WithRejection<
        Query<GetDriverListQueryParamsRest>,
        ErrorResponseRestDTO,
    >,
) -> OkOrErrorResponse<VecResponse<GetDriverResponseRestDTO>> {
    let result = state
        .core
        .driver_service
        .get_driver_list(query.into())
        .await;
    OkOrErrorResponse::from_result(result, state, "listing drivers")
}

#[utoipa::path(
    get,
    path = "/api/driver/v1/{id}",
    responses(OkOrErrorResponse<GetDriverResponseRestDTO>),
    params(
        ("id" = DriverId, Path, description = "Driver id")
    ),
    tag = "driver_management",
    security(
        ("bearer" = [])
    ),
    summary = "Retrieve driver",
    description = "Returns the details of a registered driver.",
)]
pub(crate) async fn get_driver(
    state: State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<DriverId>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<GetDriverResponseRestDTO> {
    let result = state.core.driver_service.get_driver(&id).await;
    OkOrErrorResponse::from_result(result, state, "getting driver")
}

#[utoipa::path(
    get,
    path = "/api/driver/v1/{id}/scan-log",
    responses(OkOrErrorResponse<VecResponse<GetScanLogResponseRestDTO>>),
    params(
        ("id" = DriverId, Path, description = "Driver id"),
        GetScanLogListQueryParamsRest,
    ),
    tag = "driver_management",
    security(
        ("bearer" = [])
    ),
    summary = "List driver scans",
    description = "Returns the scans of one driver, most recent first.",
)]
pub(crate) async fn get_driver_scan_log_list(
    state: State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<DriverId>, ErrorResponseRestDTO>,
    WithRejection(Query(query), _): WithRejection<
        Query<GetScanLogListQueryParamsRest>,
        ErrorResponseRestDTO,
    >,
) -> OkOrErrorResponse<VecResponse<GetScanLogResponseRestDTO>> {
    let result = state
        .core
        .scan_log_service
        .get_driver_scan_log_list(&id, GetScanLogListQueryDTO::from(query))
        .await;
    OkOrErrorResponse::from_result(result, state, "listing driver scans")
}
