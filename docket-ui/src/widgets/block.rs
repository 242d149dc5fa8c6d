//! Block - one record rendered as a fixed-layout row.

use slate::{Color, Point, Rect, SharedTextRenderer, Surface, TextStyle};

use crate::theme::DocketTheme;
use crate::widgets::Widget;

/// Pixel offsets of the seven fields relative to the row's top-left corner,
/// in draw order: name, id, gender, birth, kind, location, time.
const FIELD_OFFSETS: [(f32, f32); 7] = [
    (10.0, 10.0),
    (110.0, 10.0),
    (210.0, 10.0),
    (360.0, 10.0),
    (110.0, 35.0),
    (210.0, 35.0),
    (360.0, 35.0),
];

/// The seven displayed fields of one record row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowFields {
    pub name: String,
    pub id: String,
    pub gender: String,
    pub birth: String,
    pub kind: String,
    pub location: String,
    pub time: String,
}

impl From<&docket_store::RecordSummary> for RowFields {
    fn from(summary: &docket_store::RecordSummary) -> Self {
        Self {
            name: summary.name.clone(),
            id: summary.id.clone(),
            gender: summary.gender.clone(),
            birth: summary.birth.clone(),
            kind: summary.kind.clone(),
            location: summary.location.clone(),
            time: summary.time.clone(),
        }
    }
}

impl RowFields {
    fn in_draw_order(&self) -> [&str; 7] {
        [
            &self.name,
            &self.id,
            &self.gender,
            &self.birth,
            &self.kind,
            &self.location,
            &self.time,
        ]
    }
}

/// A render-only snapshot of one record.
///
/// The seven field surfaces are rasterized once at construction; the row
/// keeps no identity beyond them. Hovering swaps the background fill between
/// the base and hover colors with a full refill on every call.
pub struct Block {
    rect: Rect,
    base_color: Color,
    hover_color: Color,
    background: Surface,
    labels: Vec<(Surface, Point)>,
}

impl Block {
    pub fn new(
        rect: Rect,
        base_color: Color,
        hover_color: Color,
        fields: &RowFields,
        font_size: f32,
        renderer: SharedTextRenderer,
    ) -> Self {
        let background = Surface::new(rect.width as u32, rect.height as u32, base_color);
        let style = TextStyle::new(font_size, DocketTheme::FG_PRIMARY);
        let labels = fields
            .in_draw_order()
            .iter()
            .zip(FIELD_OFFSETS)
            .map(|(text, (dx, dy))| {
                (
                    renderer.render(text, &style),
                    Point::new(rect.x + dx, rect.y + dy),
                )
            })
            .collect();
        Self {
            rect,
            base_color,
            hover_color,
            background,
            labels,
        }
    }

    /// Repaint the background for the pointer position and report containment.
    ///
    /// Fills the full rectangle every call, hover color inside the row and
    /// base color outside; there is no dirty tracking.
    pub fn handle_mouse_hover(&mut self, pos: Point) -> bool {
        if self.rect.contains(pos) {
            self.background.fill(self.hover_color);
            true
        } else {
            self.background.fill(self.base_color);
            false
        }
    }
}

impl Widget for Block {
    fn bounds(&self) -> Rect {
        self.rect
    }

    fn draw(&self, target: &mut Surface) {
        target.blit(&self.background, self.rect.origin());
        for (label, at) in &self.labels {
            target.blit(label, *at);
        }
    }
}
