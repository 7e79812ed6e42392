//! A 2D debug image represented as a flat array of RGBA pixels.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Errors from encoding or writing a [`DebugImage`].
#[derive(Debug, thiserror::Error)]
pub enum ImageExportError {
    /// Failed to create or write the output file.
    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),

    /// The PNG encoder rejected the image.
    #[error("failed to encode png: {0}")]
    Encoding(#[from] png::EncodingError),
}

/// A 2D debug image, stored as row-major RGBA pixels.
#[derive(Clone, Debug)]
pub struct DebugImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Pixel data in row-major RGBA format. Length = `width * height * 4`.
    pub pixels: Vec<u8>,
}

impl DebugImage {
    /// Create a new black (all-zero) image with the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    /// Set a single pixel's RGBA value.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn set_pixel(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8, a: u8) {
        let idx = self.pixel_offset(x, y);
        self.pixels[idx..idx + 4].copy_from_slice(&[r, g, b, a]);
    }

    /// Get a pixel's RGBA value.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn get_pixel(&self, x: u32, y: u32) -> (u8, u8, u8, u8) {
        let idx = self.pixel_offset(x, y);
        (
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        )
    }

    #[inline]
    fn pixel_offset(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} image",
            self.width,
            self.height
        );
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Returns `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Encode as an 8-bit RGBA PNG into `writer`.
    pub fn encode_png<W: Write>(&self, writer: W) -> Result<(), ImageExportError> {
        let mut encoder = png::Encoder::new(writer, self.width, self.height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.pixels)?;
        Ok(())
    }

    /// Write the image to `path` as PNG.
    pub fn write_png(&self, path: &Path) -> Result<(), ImageExportError> {
        let mut out = BufWriter::new(File::create(path)?);
        self.encode_png(&mut out)?;
        out.flush()?;
        tracing::debug!(
            "Wrote {}x{} debug image to {}",
            self.width,
            self.height,
            path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_image_correct_dimensions() {
        let image = DebugImage::new(256, 128);
        assert_eq!(image.dimensions(), (256, 128));
        assert_eq!(image.pixels.len(), 256 * 128 * 4);
    }

    #[test]
    fn test_debug_image_set_pixel() {
        let mut image = DebugImage::new(10, 10);
        image.set_pixel(3, 5, 255, 128, 64, 255);

        let idx = ((5 * 10 + 3) * 4) as usize;
        assert_eq!(&image.pixels[idx..idx + 4], &[255, 128, 64, 255]);
        assert_eq!(image.get_pixel(3, 5), (255, 128, 64, 255));
    }

    #[test]
    fn test_pixel_offset_beyond_u32_range() {
        // No pixel buffer needed to check the addressing of a 40000x40000 preview.
        let image = DebugImage {
            width: 40_000,
            height: 40_000,
            pixels: Vec::new(),
        };
        assert_eq!(image.pixel_offset(39_999, 39_999), 6_399_999_996);
        assert_eq!(image.pixel_offset(1, 0), 4);
    }

    #[test]
    #[should_panic(expected = "outside 4x4 image")]
    fn test_set_pixel_past_row_end_panics() {
        DebugImage::new(4, 4).set_pixel(4, 0, 0, 0, 0, 255);
    }

    #[test]
    fn test_encode_png_decodes_back() {
        let mut image = DebugImage::new(4, 3);
        image.set_pixel(2, 1, 10, 20, 30, 255);

        let mut bytes = Vec::new();
        image.encode_png(&mut bytes).unwrap();

        let decoder = png::Decoder::new(std::io::Cursor::new(bytes));
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();
        assert_eq!((info.width, info.height), (4, 3));
        assert_eq!(&buf[..info.buffer_size()], image.pixels.as_slice());
    }

    #[test]
    fn test_write_png_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("heightmap.png");
        DebugImage::new(2, 2).write_png(&path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_write_png_to_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("heightmap.png");
        let result = DebugImage::new(2, 2).write_png(&path);
        assert!(matches!(result, Err(ImageExportError::Io(_))));
    }
}
