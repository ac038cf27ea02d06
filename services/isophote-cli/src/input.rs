//! Image loading: a scalar field for analysis plus an RGBA base for compositing.

use std::path::Path;

use anyhow::{Context, Result};
use field_common::{GridField, ScalarField};
use image::DynamicImage;

/// A decoded input frame.
pub struct Frame {
    pub field: GridField,
    /// Straight RGBA, 8 bits per channel, same size as `field`.
    pub base: Vec<u8>,
}

impl Frame {
    pub fn open(path: &Path) -> Result<Self> {
        let image =
            image::open(path).with_context(|| format!("Failed to read image {}", path.display()))?;
        Self::from_image(&image)
    }

    pub fn from_image(image: &DynamicImage) -> Result<Self> {
        let field = field_from_image(image)?;
        let base = image.to_rgba8().into_raw();
        Ok(Self { field, base })
    }

    pub fn width(&self) -> usize {
        self.field.width()
    }

    pub fn height(&self) -> usize {
        self.field.height()
    }
}

/// Pixel values in their native range.
///
/// Gray images keep their sample value (8, 16 bit or float). Color images use
/// the plain mean of R, G and B. Alpha is ignored.
pub fn field_from_image(image: &DynamicImage) -> Result<GridField> {
    let width = image.width() as usize;
    let height = image.height() as usize;

    let data: Vec<f32> = match image {
        DynamicImage::ImageLuma8(buf) => buf.pixels().map(|p| p.0[0] as f32).collect(),
        DynamicImage::ImageLumaA8(buf) => buf.pixels().map(|p| p.0[0] as f32).collect(),
        DynamicImage::ImageLuma16(buf) => buf.pixels().map(|p| p.0[0] as f32).collect(),
        DynamicImage::ImageLumaA16(buf) => buf.pixels().map(|p| p.0[0] as f32).collect(),
        DynamicImage::ImageRgb8(buf) => buf.pixels().map(|p| rgb_mean(p.0.map(f32::from))).collect(),
        DynamicImage::ImageRgba8(buf) => buf
            .pixels()
            .map(|p| rgb_mean([p.0[0], p.0[1], p.0[2]].map(f32::from)))
            .collect(),
        DynamicImage::ImageRgb16(buf) => buf.pixels().map(|p| rgb_mean(p.0.map(f32::from))).collect(),
        DynamicImage::ImageRgba16(buf) => buf
            .pixels()
            .map(|p| rgb_mean([p.0[0], p.0[1], p.0[2]].map(f32::from)))
            .collect(),
        DynamicImage::ImageRgb32F(buf) => buf.pixels().map(|p| rgb_mean(p.0)).collect(),
        DynamicImage::ImageRgba32F(buf) => buf
            .pixels()
            .map(|p| rgb_mean([p.0[0], p.0[1], p.0[2]]))
            .collect(),
        other => other
            .to_rgb32f()
            .pixels()
            .map(|p| rgb_mean(p.0))
            .collect(),
    };

    GridField::new(data, width, height).context("Decoded image has an inconsistent size")
}

fn rgb_mean([r, g, b]: [f32; 3]) -> f32 {
    (r + g + b) / 3.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Luma, Rgb};

    #[test]
    fn test_gray16_keeps_native_values() {
        let buf: ImageBuffer<Luma<u16>, Vec<u16>> =
            ImageBuffer::from_fn(3, 2, |x, y| Luma([(x * 1000 + y * 10) as u16]));
        let frame = Frame::from_image(&DynamicImage::ImageLuma16(buf)).unwrap();

        assert_eq!(frame.width(), 3);
        assert_eq!(frame.height(), 2);
        assert_eq!(frame.field.value_at(2, 1), 2010.0);
        assert_eq!(frame.base.len(), 3 * 2 * 4);
    }

    #[test]
    fn test_rgb_uses_plain_mean() {
        let buf: ImageBuffer<Rgb<u8>, Vec<u8>> =
            ImageBuffer::from_fn(2, 1, |x, _| if x == 0 { Rgb([30, 60, 90]) } else { Rgb([255, 0, 0]) });
        let field = field_from_image(&DynamicImage::ImageRgb8(buf)).unwrap();
        assert_eq!(field.value_at(0, 0), 60.0);
        assert_eq!(field.value_at(1, 0), 85.0);
    }

    #[test]
    fn test_field_is_row_major() {
        let buf: ImageBuffer<Luma<u8>, Vec<u8>> =
            ImageBuffer::from_fn(4, 3, |x, y| Luma([(y * 4 + x) as u8]));
        let field = field_from_image(&DynamicImage::ImageLuma8(buf)).unwrap();
        assert_eq!(field.as_slice(), (0..12).map(|v| v as f32).collect::<Vec<_>>().as_slice());
    }
}
