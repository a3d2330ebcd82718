use super::core::Im;
use image::ImageResult;
use std::path::Path;

fn dim_mismatch_err() -> image::ImageError {
    image::ImageError::Parameter(image::error::ParameterError::from_kind(
        image::error::ParameterErrorKind::DimensionMismatch,
    ))
}

// PNG I/O
// -----------------------------------------------------------------------------
impl Im<u8, 4> {
    /// Packs rows tightly (drops any stride padding) into an `image` buffer.
    pub fn to_rgba_image(&self) -> ImageResult<image::RgbaImage> {
        let row_len = self.w * 4;
        let mut raw: Vec<u8> = Vec::with_capacity(row_len * self.h);
        for y in 0..self.h {
            raw.extend_from_slice(&self.arr[y * self.s..y * self.s + row_len]);
        }
        image::RgbaImage::from_raw(self.w as u32, self.h as u32, raw).ok_or_else(dim_mismatch_err)
    }

    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> ImageResult<()> {
        self.to_rgba_image()?
            .save_with_format(path, image::ImageFormat::Png)
    }
}

// Tests
// -----------------------------------------------------------------------------
