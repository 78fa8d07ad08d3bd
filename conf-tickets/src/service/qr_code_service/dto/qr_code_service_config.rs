pub struct QrCodeServiceConfig {
    /// Width and height of the rendered image in pixels
    pub size: u32,
}
