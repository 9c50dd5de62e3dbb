use async_trait::async_trait;

use self::error::QrCodeError;

pub mod error;
pub mod png;


#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait QrCodeGenerator: Send + Sync {
    /// Renders `payload` into a PNG image.
    ///
    /// `size` is the requested edge length in pixels and `margin` the quiet zone in modules.
    /// The image is never smaller than one pixel per module.
    async fn render(&self, payload: &str, size: u32, margin: u32) -> Result<Vec<u8>, QrCodeError>;
}
