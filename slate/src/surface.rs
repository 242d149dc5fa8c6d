//! Owned RGBA pixel buffer with fill, blit, and scale operations.
//!
//! `Surface` is the unit of composition: every widget owns one or more
//! surfaces and draws by blitting them onto a destination surface. Blits are
//! alpha-aware and clipped, so partially off-screen sources are safe.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::primitives::{Color, Point, Size};
use crate::SlateError;

/// An owned 2D RGBA8 pixel buffer.
#[derive(Debug, Clone)]
pub struct Surface {
    image: RgbaImage,
}

impl Surface {
    /// Create a surface of the given size, filled with `color`.
    pub fn new(width: u32, height: u32, color: Color) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, Rgba(color.to_rgba8())),
        }
    }

    /// Wrap an existing pixel buffer.
    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    /// Decode an image file into a surface.
    ///
    /// Decode failures propagate; there is no fallback at this level.
    pub fn open(path: &Path) -> Result<Self, SlateError> {
        let image = image::open(path)?.to_rgba8();
        tracing::debug!(
            path = %path.display(),
            width = image.width(),
            height = image.height(),
            "decoded image surface"
        );
        Ok(Self { image })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn size(&self) -> Size {
        Size::new(self.image.width() as f32, self.image.height() as f32)
    }

    /// Overwrite every pixel with `color`.
    pub fn fill(&mut self, color: Color) {
        let pixel = Rgba(color.to_rgba8());
        for p in self.image.pixels_mut() {
            *p = pixel;
        }
    }

    /// Composite `src` onto this surface with its top-left corner at `at`.
    ///
    /// Alpha-blended and clipped to this surface's bounds.
    pub fn blit(&mut self, src: &Surface, at: Point) {
        imageops::overlay(
            &mut self.image,
            &src.image,
            at.x.round() as i64,
            at.y.round() as i64,
        );
    }

    /// Produce a copy resampled to the given dimensions.
    pub fn scale_to(&self, width: u32, height: u32) -> Surface {
        Self {
            image: imageops::resize(&self.image, width, height, FilterType::Triangle),
        }
    }

    /// Read back one pixel, if it is in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x < self.image.width() && y < self.image.height() {
            Some(self.image.get_pixel(x, y).0)
        } else {
            None
        }
    }

    /// Borrow the underlying pixel buffer (e.g. for saving or presenting).
    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }
}
