use thiserror::Error;

use crate::repository::error::DataLayerError;

#[derive(Debug, Error)]
pub enum ObjectStorageError {
    #[error("Invalid object key `{0}`")]
    InvalidKey(String),

    #[error("Object storage data layer error: `{0}`")]
    DataLayerError(#[from] DataLayerError),

    #[error("Object storage IO error: `{0}`")]
    Io(#[from] std::io::Error),

    #[error("Invalid retrieval URL: `{0}`")]
    Url(#[from] url::ParseError),
}
