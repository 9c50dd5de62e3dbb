use std::collections::BTreeMap;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gatepass_core::service::error::{ErrorCode, ServiceError};
use one_dto_mapper::convert_inner;
use serde::Serialize;
use utoipa::ToSchema;
use utoipa::openapi::RefOr;

use super::error::{Cause, ErrorResponseRestDTO};
use crate::router::AppState;

type ResponsesMap = BTreeMap<String, RefOr<utoipa::openapi::Response>>;

#[derive(utoipa::IntoResponses)]
pub(crate) enum ErrorResponse {
    #[response(status = 401, description = "Missing or invalid bearer token")]
    #[allow(dead_code)]
    Unauthorized,
    #[response(status = 400, description = "Invalid input")]
    BadRequest(#[to_schema] ErrorResponseRestDTO),
    #[response(status = 404, description = "Driver or stored object not found")]
    NotFound(#[to_schema] ErrorResponseRestDTO),
    #[response(status = 409, description = "Vehicle already registered")]
    Conflict(#[to_schema] ErrorResponseRestDTO),
    #[response(status = 500, description = "Storage or QR code failure")]
    ServerError(#[to_schema] ErrorResponseRestDTO),
}

impl ErrorResponse {
    pub(crate) fn for_panic(message: String) -> Self {
        Self::ServerError(ErrorResponseRestDTO {
            code: ErrorCode::BR_0000.into(),
            message,
            cause: Some(Cause {
                message: "Panic".to_string(),
            }),
        })
    }

    /// Logs the failed action together with the calling handler's location
    #[track_caller]
    pub(crate) fn from_service_error_with_trace(
        error: ServiceError,
        state: State<AppState>,
        action_description: &str,
    ) -> Self {
        let location = std::panic::Location::caller();
        tracing::error!(%error, %location, "Error while {action_description}");

        let body = ErrorResponseRestDTO::from(&error)
            .hide_cause(state.config.hide_error_response_cause);

        match error {
            ServiceError::EntityNotFound(_) => Self::NotFound(body),
            ServiceError::BusinessLogic(_) => Self::Conflict(body),
            ServiceError::Validation(_)
            | ServiceError::MissingProvider(_)
            | ServiceError::ConfigValidationError(_) => Self::BadRequest(body),
            ServiceError::Storage(_) | ServiceError::QrGeneration(_) => Self::ServerError(body),
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::Unauthorized => return StatusCode::UNAUTHORIZED.into_response(),
            Self::BadRequest(body) => (StatusCode::BAD_REQUEST, body),
            Self::NotFound(body) => (StatusCode::NOT_FOUND, body),
            Self::Conflict(body) => (StatusCode::CONFLICT, body),
            Self::ServerError(body) => (StatusCode::INTERNAL_SERVER_ERROR, body),
        };

        (status, Json(body)).into_response()
    }
}

/// List body, documented as an array of `T`
pub(crate) struct VecResponse<T>(Vec<T>);

impl<T, F: Into<T>> From<Vec<F>> for VecResponse<T> {
    fn from(value: Vec<F>) -> Self {
        Self(convert_inner(value))
    }
}

impl<T: Serialize> Serialize for VecResponse<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

fn with_error_responses<Success: utoipa::IntoResponses>() -> ResponsesMap {
    let mut responses = Success::responses();
    responses.append(&mut <ErrorResponse as utoipa::IntoResponses>::responses());
    responses
}

/// Declares a handler result that is either a JSON body with a fixed success
/// status or an [`ErrorResponse`].
macro_rules! success_or_error_response {
    ($name:ident, $variant:ident, $status:expr, $status_code:tt, $description:tt) => {
        pub(crate) enum $name<T> {
            $variant(T),
            Error(ErrorResponse),
        }

        impl<T> $name<T> {
            #[track_caller]
            pub(crate) fn from_result(
                result: Result<impl Into<T>, ServiceError>,
                state: State<AppState>,
                action_description: &str,
            ) -> Self {
                match result {
                    Ok(value) => Self::$variant(value.into()),
                    Err(error) => Self::Error(ErrorResponse::from_service_error_with_trace(
                        error,
                        state,
                        action_description,
                    )),
                }
            }
        }

        impl<T> From<ErrorResponse> for $name<T> {
            fn from(value: ErrorResponse) -> Self {
                Self::Error(value)
            }
        }

        impl<T: Serialize> IntoResponse for $name<T> {
            fn into_response(self) -> Response {
                match self {
                    Self::$variant(body) => ($status, Json(body)).into_response(),
                    Self::Error(error) => error.into_response(),
                }
            }
        }

        impl<T: ToSchema> utoipa::IntoResponses for $name<T> {
            fn responses() -> ResponsesMap {
                #[derive(utoipa::IntoResponses)]
                #[response(status = $status_code, description = $description)]
                struct Success<T: ToSchema>(
                    #[to_schema]
                    #[allow(dead_code)]
                    T,
                );

                with_error_responses::<Success<T>>()
            }
        }

        impl<T: ToSchema> utoipa::IntoResponses for $name<VecResponse<T>> {
            fn responses() -> ResponsesMap {
                #[derive(utoipa::IntoResponses)]
                #[response(status = $status_code, description = $description)]
                struct Success<T: ToSchema>(
                    #[to_schema]
                    #[allow(dead_code)]
                    Vec<T>,
                );

                with_error_responses::<Success<T>>()
            }
        }
    };
}

success_or_error_response!(OkOrErrorResponse, Ok, StatusCode::OK, 200, "OK");
success_or_error_response!(
    CreatedOrErrorResponse,
    Created,
    StatusCode::CREATED,
    201,
    "Created"
);
