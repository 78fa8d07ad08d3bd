use super::{Error, QrCodeService, QrCodeServiceConfig};
use image::{imageops::FilterType, DynamicImage, ImageFormat, Luma};
use qrcode::{EcLevel, QrCode};
use std::io::Cursor;

const QUIET_ZONE_MODULES: u32 = 8;

pub struct QrCodeServiceImpl {
    config: QrCodeServiceConfig,
}

impl QrCodeServiceImpl {
    pub fn new(config: QrCodeServiceConfig) -> Self {
        Self { config }
    }
}

impl QrCodeService for QrCodeServiceImpl {
    fn render_png(&self, content: &str) -> Result<Vec<u8>, Error> {
        let code = QrCode::with_error_correction_level(content, EcLevel::H)?;

        let size = self.config.size;
        let modules = code.width() as u32 + QUIET_ZONE_MODULES;
        if size < modules {
            return Err(Error::SizeTooSmall { modules, size });
        }

        let image = code
            .render::<Luma<u8>>()
            .quiet_zone(true)
            .min_dimensions(size, size)
            .build();

        // renderer rounds up to whole modules
        let image = match image.width() == size && image.height() == size {
            true => image,
            false => image::imageops::resize(&image, size, size, FilterType::Nearest),
        };

        let mut png = Cursor::new(Vec::new());
        DynamicImage::ImageLuma8(image).write_to(&mut png, ImageFormat::Png)?;

        tracing::trace!(size, bytes = png.get_ref().len(), "rendered qr code");

        Ok(png.into_inner())
    }
}
