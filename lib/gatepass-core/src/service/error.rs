use shared_types::DriverId;
use thiserror::Error;

use crate::config::ConfigValidationError;
use crate::provider::object_storage::error::ObjectStorageError;
use crate::provider::qr_code::error::QrCodeError;
use crate::repository::error::DataLayerError;
use crate::util::timeout::StepTimeout;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Config validation error `{0}`")]
    ConfigValidationError(#[from] ConfigValidationError),

    #[error(transparent)]
    EntityNotFound(#[from] EntityNotFoundError),

    #[error(transparent)]
    BusinessLogic(#[from] BusinessLogicError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    MissingProvider(#[from] MissingProviderError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    QrGeneration(#[from] QrGenerationError),
}

#[derive(Debug, Error)]
pub enum EntityNotFoundError {
    #[error("Driver `{0}` not found")]
    Driver(String),

    #[error("Stored object `{0}` not found")]
    StoredObject(String),
}

#[derive(Debug, Error)]
pub enum BusinessLogicError {
    #[error("Vehicle `{0}` is already registered")]
    VehicleAlreadyRegistered(String),
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Field `{field}` must be at least {min} characters long")]
    FieldTooShort { field: &'static str, min: u64 },

    #[error("Field `{0}` must not be empty")]
    EmptyField(&'static str),

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Passport photo is missing")]
    MissingPassportPhoto,

    #[error("Invalid passport photo type `{0}`")]
    InvalidPassportPhotoType(String),

    #[error("Limit must be between 1 and {max}")]
    InvalidLimit { max: u64 },
}

#[derive(Debug, Error)]
pub enum MissingProviderError {
    #[error("Cannot find task `{0}`")]
    Task(String),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Object storage error: `{0}`")]
    ObjectStorage(#[from] ObjectStorageError),

    #[error("Data layer error: `{0}`")]
    DataLayer(#[from] DataLayerError),

    #[error(transparent)]
    Timeout(#[from] StepTimeout),
}

#[derive(Debug, Error)]
pub enum QrGenerationError {
    #[error("QR code rendering error: `{0}`")]
    Render(#[from] QrCodeError),

    #[error(transparent)]
    Timeout(StepTimeout),
}

impl From<DataLayerError> for ServiceError {
    fn from(value: DataLayerError) -> Self {
        Self::Storage(StorageError::DataLayer(value))
    }
}

impl From<ObjectStorageError> for ServiceError {
    fn from(value: ObjectStorageError) -> Self {
        Self::Storage(StorageError::ObjectStorage(value))
    }
}

impl From<QrCodeError> for ServiceError {
    fn from(value: QrCodeError) -> Self {
        Self::QrGeneration(QrGenerationError::Render(value))
    }
}

impl From<DriverId> for EntityNotFoundError {
    fn from(value: DriverId) -> Self {
        Self::Driver(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
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

impl ErrorCode {
    pub const fn msg(&self) -> &'static str {
        match self {
            ErrorCode::BR_0000 => "Unmapped error code",
            ErrorCode::BR_0001 => "Driver not found",
            ErrorCode::BR_0002 => "Vehicle already registered",
            ErrorCode::BR_0003 => "Invalid field value",
            ErrorCode::BR_0004 => "Invalid email address",
            ErrorCode::BR_0005 => "Missing passport photo",
            ErrorCode::BR_0006 => "Invalid passport photo type",
            ErrorCode::BR_0007 => "Object storage error",
            ErrorCode::BR_0008 => "Database error",
            ErrorCode::BR_0009 => "QR code generation error",
            ErrorCode::BR_0010 => "Operation timed out",
            ErrorCode::BR_0011 => "Task not found",
            ErrorCode::BR_0012 => "Configuration error",
            ErrorCode::BR_0013 => "Stored object not found",
            ErrorCode::BR_0014 => "General input validation error",
        }
    }
}

impl ServiceError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ServiceError::EntityNotFound(error) => error.error_code(),
            ServiceError::BusinessLogic(error) => error.error_code(),
            ServiceError::Validation(error) => error.error_code(),
            ServiceError::MissingProvider(error) => error.error_code(),
            ServiceError::Storage(error) => error.error_code(),
            ServiceError::QrGeneration(error) => error.error_code(),
            ServiceError::ConfigValidationError(_) => ErrorCode::BR_0012,
        }
    }
}

impl EntityNotFoundError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::Driver(_) => ErrorCode::BR_0001,
            Self::StoredObject(_) => ErrorCode::BR_0013,
        }
    }
}

impl BusinessLogicError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::VehicleAlreadyRegistered(_) => ErrorCode::BR_0002,
        }
    }
}

impl ValidationError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::FieldTooShort { .. } | Self::EmptyField(_) | Self::InvalidLimit { .. } => {
                ErrorCode::BR_0003
            }
            Self::InvalidEmail => ErrorCode::BR_0004,
            Self::MissingPassportPhoto => ErrorCode::BR_0005,
            Self::InvalidPassportPhotoType(_) => ErrorCode::BR_0006,
        }
    }
}

impl MissingProviderError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::Task(_) => ErrorCode::BR_0011,
        }
    }
}

impl StorageError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::ObjectStorage(_) => ErrorCode::BR_0007,
            Self::DataLayer(_) => ErrorCode::BR_0008,
            Self::Timeout(_) => ErrorCode::BR_0010,
        }
    }
}

impl QrGenerationError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::Render(_) => ErrorCode::BR_0009,
            Self::Timeout(_) => ErrorCode::BR_0010,
        }
    }
}
