//! Button - a filled rectangle with a centered label.

use slate::{Color, Point, Rect, SharedTextRenderer, Surface, TextStyle};

use crate::widgets::Widget;

/// A clickable, recolorable, relabelable button.
///
/// The label surface is regenerated and re-centered on every text or text
/// color change, so no stale label ever persists. Setters short-circuit on
/// value equality and trigger no re-render.
pub struct Button {
    rect: Rect,
    color: Color,
    text: String,
    text_color: Color,
    font_size: f32,
    renderer: SharedTextRenderer,
    background: Surface,
    label: Surface,
    label_at: Point,
}

impl Button {
    pub fn new(
        rect: Rect,
        text: impl Into<String>,
        color: Color,
        text_color: Color,
        font_size: f32,
        renderer: SharedTextRenderer,
    ) -> Self {
        let text = text.into();
        let background = Surface::new(rect.width as u32, rect.height as u32, color);
        let label = renderer.render(&text, &TextStyle::new(font_size, text_color));
        let label_at = centered(rect, &label);
        Self {
            rect,
            color,
            text,
            text_color,
            font_size,
            renderer,
            background,
            label,
            label_at,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Whether the pointer position lies on the button.
    pub fn contains(&self, pos: Point) -> bool {
        self.rect.contains(pos)
    }

    /// Replace the label text, re-render and re-center it.
    ///
    /// No-op when called with the current text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.text {
            return;
        }
        self.text = text;
        self.render_label();
        self.background.fill(self.color);
    }

    /// Change the fill color. No-op when unchanged.
    pub fn set_color(&mut self, color: Color) {
        if color == self.color {
            return;
        }
        self.color = color;
        self.background.fill(color);
    }

    /// Change the label color. No-op when unchanged.
    pub fn set_text_color(&mut self, text_color: Color) {
        if text_color == self.text_color {
            return;
        }
        self.text_color = text_color;
        self.render_label();
    }

    fn render_label(&mut self) {
        self.label = self
            .renderer
            .render(&self.text, &TextStyle::new(self.font_size, self.text_color));
        self.label_at = centered(self.rect, &self.label);
    }
}

impl Widget for Button {
    fn bounds(&self) -> Rect {
        self.rect
    }

    fn draw(&self, target: &mut Surface) {
        target.blit(&self.background, self.rect.origin());
        target.blit(&self.label, self.label_at);
    }
}

fn centered(rect: Rect, label: &Surface) -> Point {
    Point::new(
        rect.x + (rect.width - label.width() as f32) / 2.0,
        rect.y + (rect.height - label.height() as f32) / 2.0,
    )
}
