//! Compositing band colors and contour lines over the source image.
//!
//! The base image is copied, every band member pixel is overwritten with its
//! band color (bands in index order, so a later band wins), and the contour
//! path is stroked on top with tiny-skia.

use crate::{RenderError, RenderResult};
use contour_analysis::{Analysis, ContourPath, MembershipSet};
use field_common::Color;
use tiny_skia::{ColorU8, LineCap, Paint, PathBuilder, Pixmap, Stroke, Transform};

/// Stroke settings for the contour overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayStyle {
    pub line_color: Color,
    pub line_width: f32,
    pub anti_alias: bool,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            line_color: Color::RED,
            line_width: 0.2,
            anti_alias: true,
        }
    }
}

/// Render `analysis` over `base` (straight RGBA, `width * height * 4` bytes).
///
/// Returns straight RGBA of the same size.
pub fn composite(
    base: &[u8],
    width: usize,
    height: usize,
    analysis: &Analysis,
    style: &OverlayStyle,
) -> RenderResult<Vec<u8>> {
    let mut pixmap = pixmap_from_rgba(base, width, height)?;

    let painted = paint_bands(&mut pixmap, &analysis.bands, &analysis.palette)?;
    stroke_contours(&mut pixmap, &analysis.contours, style);

    tracing::debug!(
        width = width,
        height = height,
        painted = painted,
        segments = analysis.contours.len(),
        "Composited band overlay"
    );

    Ok(pixmap_to_rgba(&pixmap))
}

/// Copy straight RGBA pixels into a premultiplied pixmap.
pub fn pixmap_from_rgba(pixels: &[u8], width: usize, height: usize) -> RenderResult<Pixmap> {
    let expected = width * height * 4;
    if pixels.len() != expected {
        return Err(RenderError::InvalidBuffer {
            width,
            height,
            expected,
            actual: pixels.len(),
        });
    }

    let mut pixmap =
        Pixmap::new(width as u32, height as u32).ok_or(RenderError::Canvas { width, height })?;

    for (dst, src) in pixmap.pixels_mut().iter_mut().zip(pixels.chunks_exact(4)) {
        *dst = ColorU8::from_rgba(src[0], src[1], src[2], src[3]).premultiply();
    }

    Ok(pixmap)
}

/// Straight RGBA bytes of a pixmap.
pub fn pixmap_to_rgba(pixmap: &Pixmap) -> Vec<u8> {
    let mut out = Vec::with_capacity(pixmap.pixels().len() * 4);
    for pixel in pixmap.pixels() {
        let c = pixel.demultiply();
        out.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    out
}

/// Overwrite every member pixel with its band's color.
///
/// Members outside the canvas are skipped. Returns the number of pixels written.
pub fn paint_bands(
    pixmap: &mut Pixmap,
    bands: &[MembershipSet],
    palette: &[Color],
) -> RenderResult<usize> {
    if palette.len() < bands.len() {
        return Err(RenderError::PaletteMismatch {
            bands: bands.len(),
            colors: palette.len(),
        });
    }

    let width = pixmap.width() as usize;
    let height = pixmap.height() as usize;
    let pixels = pixmap.pixels_mut();
    let mut painted = 0;

    for (band, color) in bands.iter().zip(palette) {
        let fill = ColorU8::from_rgba(color.r, color.g, color.b, color.a).premultiply();
        for point in &band.points {
            if point.x < width && point.y < height {
                pixels[point.y * width + point.x] = fill;
                painted += 1;
            }
        }
    }

    Ok(painted)
}

/// Build one tiny-skia path from every segment; `None` when there are none.
pub fn contour_skia_path(path: &ContourPath) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    for segment in path.segments() {
        pb.move_to(segment.start.x, segment.start.y);
        pb.line_to(segment.end.x, segment.end.y);
    }
    pb.finish()
}

/// Stroke the contour path over the pixmap.
///
/// A width of zero or less draws nothing.
pub fn stroke_contours(pixmap: &mut Pixmap, path: &ContourPath, style: &OverlayStyle) {
    if style.line_width.is_nan() || style.line_width <= 0.0 {
        return;
    }
    let Some(skia_path) = contour_skia_path(path) else {
        return;
    };

    let mut paint = Paint::default();
    let c = style.line_color;
    paint.set_color_rgba8(c.r, c.g, c.b, c.a);
    paint.anti_alias = style.anti_alias;

    let stroke = Stroke {
        width: style.line_width,
        line_cap: LineCap::Butt,
        ..Stroke::default()
    };

    pixmap.stroke_path(&skia_path, &paint, &stroke, Transform::identity(), None);
}
