//! InputBox - an editable text field with placeholder semantics.
//!
//! Two logical states: Placeholder (italic gray hint text, `is_write` false)
//! and Active-Editing (live user text, `is_write` true). The first hover
//! clears the hint and switches to active styling; leaving the box with no
//! text typed restores the hint, while typed text survives blur.

use slate::{
    Color, EditAction, KeyEvent, LineEditor, MouseEvent, Point, Rect, SharedTextRenderer, Slant,
    Surface, TextStyle,
};

use crate::theme::DocketTheme;
use crate::widgets::Widget;

/// Horizontal inset of the text from the box's left edge.
const TEXT_INSET: f32 = 10.0;

pub struct InputBox {
    rect: Rect,
    color: Color,
    placeholder: String,
    editor: LineEditor,
    font_size: f32,
    text_color: Color,
    active_color: Color,
    active: bool,
    is_write: bool,
    renderer: SharedTextRenderer,
    background: Surface,
    text_surface: Surface,
}

impl InputBox {
    pub fn new(
        rect: Rect,
        color: Color,
        font_size: f32,
        text_color: Color,
        placeholder: impl Into<String>,
        renderer: SharedTextRenderer,
    ) -> Self {
        let placeholder = placeholder.into();
        let background = Surface::new(rect.width as u32, rect.height as u32, color);
        let text_surface = renderer.render(
            &placeholder,
            &TextStyle::oblique(font_size, DocketTheme::FG_PLACEHOLDER),
        );
        Self {
            rect,
            color,
            editor: LineEditor::with_text(placeholder.clone()),
            placeholder,
            font_size,
            text_color: DocketTheme::FG_PLACEHOLDER,
            active_color: text_color,
            active: false,
            is_write: false,
            renderer,
            background,
            text_surface,
        }
    }

    /// The displayed text: the placeholder until typing starts, live user
    /// input afterwards.
    pub fn text(&self) -> &str {
        self.editor.text()
    }

    /// Whether the pointer was inside the box on the last mouse event.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the user has started typing (placeholder cleared).
    pub fn is_write(&self) -> bool {
        self.is_write
    }

    /// Replace the displayed text (e.g. the host pre-filling a field).
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.editor.set_text(text);
        self.render_text();
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Change the fill color. No-op when unchanged.
    pub fn set_color(&mut self, color: Color) {
        if color == self.color {
            return;
        }
        self.color = color;
        self.background.fill(color);
    }

    /// Sole pointer entry point. Returns whether the pointer lies inside the
    /// box.
    ///
    /// Entering the box while showing the placeholder clears it and switches
    /// to active styling; leaving the box with nothing typed restores it.
    /// Leaving with user text keeps the text untouched.
    pub fn handle_mouse_event(&mut self, event: &MouseEvent) -> bool {
        if self.rect.contains(event.position()) {
            self.active = true;
            if !self.is_write {
                self.editor.clear();
                self.is_write = true;
                self.text_color = self.active_color;
                self.render_text();
            }
            true
        } else {
            self.active = false;
            if self.is_write && self.editor.is_empty() {
                self.editor.set_text(self.placeholder.clone());
                self.is_write = false;
                self.text_color = DocketTheme::FG_PLACEHOLDER;
                self.render_text();
            }
            false
        }
    }

    /// Forward a key event to the editor while the box is being written in.
    ///
    /// Returns the editor's action so the host can react to `Submit`.
    pub fn handle_key(&mut self, event: &KeyEvent) -> EditAction {
        if !self.active || !self.is_write {
            return EditAction::Noop;
        }
        let action = self.editor.handle_key(event);
        match action {
            EditAction::Changed | EditAction::Submit(_) => self.render_text(),
            EditAction::Blur | EditAction::Noop => {}
        }
        action
    }

    fn style(&self) -> TextStyle {
        let slant = if self.is_write {
            Slant::Upright
        } else {
            Slant::Oblique
        };
        TextStyle {
            size: self.font_size,
            color: self.text_color,
            slant,
        }
    }

    fn render_text(&mut self) {
        self.text_surface = self.renderer.render(self.editor.text(), &self.style());
    }
}

impl Widget for InputBox {
    fn bounds(&self) -> Rect {
        self.rect
    }

    fn draw(&self, target: &mut Surface) {
        target.blit(&self.background, self.rect.origin());
        let text_at = Point::new(
            self.rect.x + TEXT_INSET,
            self.rect.center().y - self.text_surface.height() as f32 / 2.0,
        );
        target.blit(&self.text_surface, text_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::test_support::{CountingRenderer, TEST_TEXT_COLOR};
    use slate::{Key, Modifiers, MouseButton, NamedKey};

    fn search_box(renderer: std::rc::Rc<CountingRenderer>) -> InputBox {
        InputBox::new(
            Rect::new(0.0, 0.0, 200.0, 30.0),
            DocketTheme::WHITE,
            20.0,
            TEST_TEXT_COLOR,
            "Search...",
            renderer,
        )
    }

    fn press_at(x: f32, y: f32) -> MouseEvent {
        MouseEvent::ButtonPressed {
            button: MouseButton::Left,
            position: Point::new(x, y),
        }
    }

    fn type_char(c: &str) -> KeyEvent {
        KeyEvent::Pressed {
            key: Key::character(c),
            modifiers: Modifiers::NONE,
            text: Some(c.to_string()),
        }
    }

    #[test]
    fn starts_in_placeholder_state() {
        let renderer = CountingRenderer::shared();
        let input = search_box(renderer);
        assert_eq!(input.text(), "Search...");
        assert!(!input.is_write());
        assert!(!input.is_active());
    }

    #[test]
    fn hover_clears_placeholder_and_activates() {
        let renderer = CountingRenderer::shared();
        let mut input = search_box(renderer);
        assert!(input.handle_mouse_event(&press_at(50.0, 15.0)));
        assert!(input.is_active());
        assert!(input.is_write());
        assert_eq!(input.text(), "");
    }

    #[test]
    fn exit_with_empty_text_restores_placeholder() {
        let renderer = CountingRenderer::shared();
        let mut input = search_box(renderer);
        input.handle_mouse_event(&press_at(50.0, 15.0));
        assert!(!input.handle_mouse_event(&press_at(500.0, 500.0)));

        assert_eq!(input.text(), "Search...");
        assert!(!input.is_write());
        assert!(!input.is_active());
    }

    #[test]
    fn exit_with_user_text_retains_it() {
        let renderer = CountingRenderer::shared();
        let mut input = search_box(renderer);
        input.handle_mouse_event(&press_at(50.0, 15.0));
        for c in ["a", "b", "c"] {
            assert_eq!(input.handle_key(&type_char(c)), EditAction::Changed);
        }
        input.handle_mouse_event(&press_at(500.0, 500.0));

        assert_eq!(input.text(), "abc");
        assert!(input.is_write());
        assert!(!input.is_active());
    }

    #[test]
    fn second_hover_does_not_clear_user_text() {
        let renderer = CountingRenderer::shared();
        let mut input = search_box(renderer);
        input.handle_mouse_event(&press_at(50.0, 15.0));
        input.handle_key(&type_char("x"));
        input.handle_mouse_event(&press_at(500.0, 500.0));
        input.handle_mouse_event(&press_at(50.0, 15.0));
        assert_eq!(input.text(), "x");
    }

    #[test]
    fn keys_are_ignored_until_hovered() {
        let renderer = CountingRenderer::shared();
        let mut input = search_box(renderer);
        assert_eq!(input.handle_key(&type_char("a")), EditAction::Noop);
        assert_eq!(input.text(), "Search...");
    }

    #[test]
    fn enter_submits_typed_text() {
        let renderer = CountingRenderer::shared();
        let mut input = search_box(renderer);
        input.handle_mouse_event(&press_at(50.0, 15.0));
        input.handle_key(&type_char("h"));
        input.handle_key(&type_char("i"));

        let enter = KeyEvent::Pressed {
            key: Key::named(NamedKey::Enter),
            modifiers: Modifiers::NONE,
            text: None,
        };
        assert_eq!(input.handle_key(&enter), EditAction::Submit("hi".to_string()));
        assert_eq!(input.text(), "");
    }

    #[test]
    fn draw_fills_background() {
        let renderer = CountingRenderer::shared();
        let input = search_box(renderer);
        let mut target = Surface::new(200, 30, DocketTheme::BLACK);
        input.draw(&mut target);
        // White box over the black target.
        assert_eq!(target.pixel(199, 0), Some([255, 255, 255, 255]));
    }
}
