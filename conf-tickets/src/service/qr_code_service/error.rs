#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("qr code encoding error: {0}")]
    Encode(#[from] qrcode::types::QrError),

    #[error("qr code needs {modules} pixels, configured size is {size}")]
    SizeTooSmall { modules: u32, size: u32 },

    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),
}
