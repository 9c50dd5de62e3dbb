use axum::Json;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use one_dto_mapper::From;
use serde::Serialize;
use utoipa::ToSchema;

/// Stable error code, see the `message` of a response for its meaning
#[derive(Clone, Copy, Debug, Serialize, From, ToSchema)]
#[schema(example = "BR_0002")]
#[from("gatepass_core::service::error::ErrorCode")]
#[allow(non_camel_case_types)]
pub enum ErrorCode {
    BR_0000,
    BR_0001,
    BR_0002,
    BR_0003,
    BR_0004,
    BR_0005,
    BR_0006,
    BR_0007,
    BR_0008,
    BR_0009,
    BR_0010,
    BR_0011,
    BR_0012,
    BR_0013,
    BR_0014,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponseRestDTO {
    pub code: ErrorCode,
    #[schema(example = "Vehicle already registered")]
    pub message: String,
    /// Underlying error, omitted when `hideErrorResponseCause` is set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<Cause>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Cause {
    pub message: String,
}

impl Cause {
    pub fn with_message_from_error(error: &impl std::error::Error) -> Self {
        Self {
            message: error.to_string(),
        }
    }
}

impl ErrorResponseRestDTO {
    pub fn hide_cause(self, hide: bool) -> Self {
        Self {
            cause: self.cause.filter(|_| !hide),
            ..self
        }
    }

    /// Request that could not be read into the expected shape
    pub(crate) fn input_validation(detail: impl Into<String>) -> Self {
        let code = gatepass_core::service::error::ErrorCode::BR_0014;
        Self {
            code: code.into(),
            message: code.msg().to_owned(),
            cause: Some(Cause {
                message: detail.into(),
            }),
        }
    }
}

// used as the rejection of `WithRejection` extractors
impl IntoResponse for ErrorResponseRestDTO {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

macro_rules! input_validation_from {
    ($($rejection:ty),+ $(,)?) => {
        $(
            impl From<$rejection> for ErrorResponseRestDTO {
                fn from(rejection: $rejection) -> Self {
                    Self::input_validation(rejection.body_text())
                }
            }
        )+
    };
}

input_validation_from!(
    JsonRejection,
    QueryRejection,
    PathRejection,
    MultipartRejection,
    MultipartError,
);
