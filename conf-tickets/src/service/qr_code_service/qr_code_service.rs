use super::Error;

#[cfg_attr(test, mockall::automock)]
pub trait QrCodeService: Send + Sync {
    ///
    /// Renders content as square PNG image with high error correction.
    /// Equal content always produces equal bytes
    ///
    fn render_png(&self, content: &str) -> Result<Vec<u8>, Error>;
}
