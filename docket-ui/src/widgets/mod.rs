//! Widget system.
//!
//! Every widget is created once with fixed geometry, owns its surfaces, and
//! is mutated in place by the host view. `draw` composites the widget onto a
//! destination surface; input handling is widget-specific (`Button` is
//! hit-tested by the host, `InputBox` and `Block` expose handlers).

mod block;
mod button;
mod input_box;
mod table;

pub use block::{Block, RowFields};
pub use button::Button;
pub use input_box::InputBox;
pub use table::Table;

use slate::{Rect, Surface};

/// A drawable fixed-geometry widget.
pub trait Widget {
    /// The widget's on-screen rectangle.
    fn bounds(&self) -> Rect;

    /// Composite this widget onto `target`.
    fn draw(&self, target: &mut Surface);
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Deterministic text renderer for widget tests.

    use std::cell::Cell;
    use std::rc::Rc;

    use slate::{Color, Size, Surface, TextRenderer, TextStyle};

    /// Renders every string as a solid block (8px per char) and counts calls.
    ///
    /// The call counter backs the setter-idempotence tests; the solid block
    /// makes rendered text detectable in pixel readbacks without a real font.
    pub struct CountingRenderer {
        pub render_calls: Cell<usize>,
    }

    impl CountingRenderer {
        pub fn shared() -> Rc<Self> {
            Rc::new(Self {
                render_calls: Cell::new(0),
            })
        }
    }

    impl TextRenderer for CountingRenderer {
        fn measure(&self, text: &str, style: &TextStyle) -> Size {
            Size::new(8.0 * text.chars().count() as f32, style.size)
        }

        fn render(&self, text: &str, style: &TextStyle) -> Surface {
            self.render_calls.set(self.render_calls.get() + 1);
            let size = self.measure(text, style);
            Surface::new(size.width as u32, size.height as u32, style.color)
        }
    }

    /// Solid red opaque color distinct from every theme color.
    pub const TEST_TEXT_COLOR: Color = Color::rgb(1.0, 0.0, 0.0);
}
