use thiserror::Error;

pub mod core_config;


#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config parsing error: `{0}`")]
    Parsing(#[from] ConfigParsingError),
    #[error("Config validation error: `{0}`")]
    Validation(#[from] ConfigValidationError),
}

#[derive(Debug, Error)]
pub enum ConfigParsingError {
    #[error("General parsing error: `{0}`")]
    GeneralParsingError(String),
}

#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("Missing public base URL for object storage")]
    MissingPublicBaseUrl,
    #[error("Invalid public base URL `{value}`: {source}")]
    InvalidPublicBaseUrl {
        value: String,
        source: url::ParseError,
    },
    #[error("Missing root directory for filesystem object storage")]
    MissingRootDirectory,
    #[error("QR code size `{0}` out of range 1..={max}", max = core_config::MAX_QR_CODE_SIZE)]
    InvalidQrCodeSize(u32),
    #[error("QR code margin `{0}` exceeds {max}", max = core_config::MAX_QR_CODE_MARGIN)]
    InvalidQrCodeMargin(u32),
    #[error("Task batch size must be positive")]
    InvalidBatchSize,
    #[error("Step timeout must be positive")]
    InvalidStepTimeout,
}
