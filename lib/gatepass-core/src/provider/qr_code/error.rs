use thiserror::Error;

#[derive(Debug, Error)]
pub enum QrCodeError {
    #[error("Payload cannot be encoded: `{0}`")]
    Encoding(#[from] qrcode::types::QrError),

    #[error("Image error: `{0}`")]
    Image(#[from] image::ImageError),

    #[error("Image dimensions overflow for size `{size}` and margin `{margin}`")]
    Dimensions { size: u32, margin: u32 },

    #[error("Rendering task failed: `{0}`")]
    Task(String),
}
