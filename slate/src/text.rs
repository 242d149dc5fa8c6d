//! Text rasterization.
//!
//! `TextRenderer` is the seam between widgets and the glyph engine: widgets
//! hold a shared renderer and ask it to turn strings into surfaces. The
//! production implementation, `FontRenderer`, shapes with fontdue's layout
//! and blends glyph coverage into a transparent surface, so rendered text
//! composites correctly over any background.

use std::path::Path;
use std::rc::Rc;

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle as SpanStyle};
use fontdue::{Font, FontSettings};
use image::{Rgba, RgbaImage};

use crate::primitives::{Color, Size};
use crate::surface::Surface;
use crate::SlateError;

/// Horizontal shear applied per pixel row when obliquing a regular face.
const OBLIQUE_SHEAR: f32 = 0.25;

/// Glyph slant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Slant {
    #[default]
    Upright,
    Oblique,
}

/// Style for one run of text: pixel size, fill color, slant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub color: Color,
    pub slant: Slant,
}

impl TextStyle {
    pub const fn new(size: f32, color: Color) -> Self {
        Self {
            size,
            color,
            slant: Slant::Upright,
        }
    }

    pub const fn oblique(size: f32, color: Color) -> Self {
        Self {
            size,
            color,
            slant: Slant::Oblique,
        }
    }
}

/// Turns strings into surfaces.
///
/// Widgets depend on this trait rather than on a concrete glyph engine, so a
/// view can share one immutable renderer across all its widgets and tests can
/// substitute a deterministic one.
pub trait TextRenderer {
    /// Size of the surface `render` would produce.
    fn measure(&self, text: &str, style: &TextStyle) -> Size;

    /// Rasterize `text` into a transparent surface.
    fn render(&self, text: &str, style: &TextStyle) -> Surface;
}

/// A text renderer shared by the widgets of one view.
pub type SharedTextRenderer = Rc<dyn TextRenderer>;

/// fontdue-backed `TextRenderer`.
///
/// Holds a regular face and, optionally, a true italic face. When an oblique
/// style is requested without an italic face, the regular glyphs are sheared.
pub struct FontRenderer {
    regular: Font,
    italic: Option<Font>,
}

impl FontRenderer {
    /// Parse a regular face from raw font bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SlateError> {
        let regular = Font::from_bytes(bytes, FontSettings::default()).map_err(SlateError::Font)?;
        Ok(Self {
            regular,
            italic: None,
        })
    }

    /// Load a regular face from a font file.
    pub fn from_file(path: &Path) -> Result<Self, SlateError> {
        let bytes = std::fs::read(path)?;
        let renderer = Self::from_bytes(&bytes)?;
        tracing::debug!(path = %path.display(), "loaded font face");
        Ok(renderer)
    }

    /// Attach a true italic face; oblique styles use it instead of shearing.
    pub fn with_italic_bytes(mut self, bytes: &[u8]) -> Result<Self, SlateError> {
        self.italic = Some(Font::from_bytes(bytes, FontSettings::default()).map_err(SlateError::Font)?);
        Ok(self)
    }

    /// Face for a slant, plus whether oblique must be synthesized.
    fn face(&self, slant: Slant) -> (&Font, bool) {
        match (slant, &self.italic) {
            (Slant::Oblique, Some(italic)) => (italic, false),
            (Slant::Oblique, None) => (&self.regular, true),
            (Slant::Upright, _) => (&self.regular, false),
        }
    }

    fn line_height(font: &Font, px: f32) -> f32 {
        font.horizontal_line_metrics(px)
            .map(|m| m.new_line_size)
            .unwrap_or(px * 1.2)
    }

    fn shape(font: &Font, text: &str, px: f32) -> Layout {
        let mut layout = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[font], &SpanStyle::new(text, px, 0));
        layout
    }

    /// Pixel extent of a shaped single line, before any shear.
    fn shaped_width(layout: &Layout) -> f32 {
        layout
            .glyphs()
            .iter()
            .map(|g| g.x + g.width as f32)
            .fold(0.0, f32::max)
    }
}

impl TextRenderer for FontRenderer {
    fn measure(&self, text: &str, style: &TextStyle) -> Size {
        let (font, synthesize) = self.face(style.slant);
        let layout = Self::shape(font, text, style.size);
        let line_h = Self::line_height(font, style.size);
        let skew = if synthesize { line_h * OBLIQUE_SHEAR } else { 0.0 };
        let width = if layout.glyphs().is_empty() {
            0.0
        } else {
            (Self::shaped_width(&layout) + skew).ceil()
        };
        Size::new(width, line_h.max(layout.height()).ceil())
    }

    fn render(&self, text: &str, style: &TextStyle) -> Surface {
        let (font, synthesize) = self.face(style.slant);
        let layout = Self::shape(font, text, style.size);
        let line_h = Self::line_height(font, style.size);
        let height = line_h.max(layout.height()).ceil() as u32;

        if layout.glyphs().is_empty() {
            return Surface::new(0, height, Color::TRANSPARENT);
        }

        let skew = if synthesize { line_h * OBLIQUE_SHEAR } else { 0.0 };
        let width = (Self::shaped_width(&layout) + skew).ceil() as u32;

        let [r, g, b, _] = style.color.to_rgba8();
        let mut image = RgbaImage::from_pixel(width, height, Rgba([r, g, b, 0]));

        for glyph in layout.glyphs() {
            let (metrics, bitmap) = font.rasterize_config(glyph.key);
            if metrics.width == 0 {
                continue;
            }
            for (i, &coverage) in bitmap.iter().enumerate() {
                if coverage == 0 {
                    continue;
                }
                let gy = glyph.y.round() as i32 + (i / metrics.width) as i32;
                if gy < 0 || gy >= height as i32 {
                    continue;
                }
                let shear_dx = if synthesize {
                    ((height as i32 - 1 - gy) as f32 * OBLIQUE_SHEAR).round() as i32
                } else {
                    0
                };
                let gx = glyph.x.round() as i32 + (i % metrics.width) as i32 + shear_dx;
                if gx < 0 || gx >= width as i32 {
                    continue;
                }
                let alpha = ((coverage as f32 / 255.0) * style.color.a * 255.0).round() as u8;
                let pixel = image.get_pixel_mut(gx as u32, gy as u32);
                // Keep the strongest coverage where adjacent glyphs overlap.
                if alpha > pixel.0[3] {
                    *pixel = Rgba([r, g, b, alpha]);
                }
            }
        }

        Surface::from_image(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_are_a_font_error() {
        let result = FontRenderer::from_bytes(&[0u8, 1, 2, 3]);
        assert!(matches!(result, Err(SlateError::Font(_))));
    }

    #[test]
    fn missing_font_file_is_an_io_error() {
        let result = FontRenderer::from_file(Path::new("/nonexistent/face.ttf"));
        assert!(matches!(result, Err(SlateError::Io(_))));
    }

    #[test]
    fn style_constructors_set_slant() {
        let upright = TextStyle::new(20.0, Color::WHITE);
        assert_eq!(upright.slant, Slant::Upright);

        let oblique = TextStyle::oblique(20.0, Color::WHITE);
        assert_eq!(oblique.slant, Slant::Oblique);
        assert_eq!(oblique.size, 20.0);
    }
}
