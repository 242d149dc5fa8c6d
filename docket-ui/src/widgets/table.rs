//! Table - a static image panel scaled to a fixed rectangle.

use std::path::Path;

use slate::{Rect, SlateError, Surface};

use crate::theme::DocketTheme;
use crate::widgets::Widget;

/// An immutable image panel.
///
/// With a source image, the image is decoded and scaled to the target
/// rectangle once at construction; without one, a flat panel-gray rectangle
/// stands in. Decode failures propagate - only the *absent* image has a
/// fallback.
pub struct Table {
    rect: Rect,
    image: Surface,
}

impl Table {
    pub fn new(rect: Rect, source: Option<&Path>) -> Result<Self, SlateError> {
        let width = rect.width as u32;
        let height = rect.height as u32;
        let image = match source {
            Some(path) => {
                let raw = Surface::open(path)?;
                tracing::debug!(path = %path.display(), width, height, "scaled table panel image");
                raw.scale_to(width, height)
            }
            None => {
                tracing::debug!(width, height, "table panel without image, using flat fallback");
                Surface::new(width, height, DocketTheme::BG_PANEL)
            }
        };
        Ok(Self { rect, image })
    }
}

impl Widget for Table {
    fn bounds(&self) -> Rect {
        self.rect
    }

    fn draw(&self, target: &mut Surface) {
        target.blit(&self.image, self.rect.origin());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slate::Color;

    #[test]
    fn fallback_is_a_uniform_panel_of_exact_size() {
        let table = Table::new(Rect::new(0.0, 0.0, 20.0, 10.0), None).unwrap();
        let mut target = Surface::new(20, 10, Color::WHITE);
        table.draw(&mut target);

        let expected = DocketTheme::BG_PANEL.to_rgba8();
        for y in 0..10 {
            for x in 0..20 {
                assert_eq!(target.pixel(x, y), Some(expected));
            }
        }
    }

    #[test]
    fn image_is_scaled_to_the_target_rect() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("panel.png");
        Surface::new(8, 8, Color::rgb(0.0, 0.0, 1.0))
            .as_image()
            .save(&path)
            .unwrap();

        let table = Table::new(Rect::new(5.0, 5.0, 30.0, 12.0), Some(&path)).unwrap();
        let mut target = Surface::new(40, 20, Color::BLACK);
        table.draw(&mut target);

        // Uniform blue source stays blue after scaling, placed at the rect.
        assert_eq!(target.pixel(5, 5), Some([0, 0, 255, 255]));
        assert_eq!(target.pixel(34, 16), Some([0, 0, 255, 255]));
        // Outside the rect is untouched.
        assert_eq!(target.pixel(0, 0), Some([0, 0, 0, 255]));
        assert_eq!(target.pixel(35, 17), Some([0, 0, 0, 255]));
    }

    #[test]
    fn missing_image_file_propagates_the_error() {
        let result = Table::new(
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Some(Path::new("/nonexistent/panel.png")),
        );
        assert!(result.is_err());
    }
}
