//! Input event types.
//!
//! The host application owns the window and its event queue; it polls the
//! windowing library, translates events into these types, and forwards them
//! to widget handlers. Nothing here blocks or dispatches.

use crate::primitives::Point;

/// Mouse button types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Mouse event types.
#[derive(Debug, Clone)]
pub enum MouseEvent {
    /// Mouse button pressed.
    ButtonPressed {
        button: MouseButton,
        position: Point,
    },

    /// Mouse button released.
    ButtonReleased {
        button: MouseButton,
        position: Point,
    },

    /// Mouse cursor moved.
    CursorMoved { position: Point },
}

impl MouseEvent {
    /// The pointer position the event carries.
    pub fn position(&self) -> Point {
        match self {
            MouseEvent::ButtonPressed { position, .. }
            | MouseEvent::ButtonReleased { position, .. }
            | MouseEvent::CursorMoved { position } => *position,
        }
    }
}

/// Keyboard modifier keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub const CTRL: Self = Self {
        shift: false,
        ctrl: true,
        alt: false,
        meta: false,
    };

    pub const ALT: Self = Self {
        shift: false,
        ctrl: false,
        alt: true,
        meta: false,
    };

    /// Check if any modifier is pressed.
    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }

    /// Check if no modifiers are pressed.
    pub fn none(&self) -> bool {
        !self.any()
    }
}

/// Named (non-character) keys a text box cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedKey {
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    Backspace,
    Delete,
    Enter,
    Escape,
    Tab,
    Space,
}

/// A keyboard key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// A named (special) key.
    Named(NamedKey),

    /// A character key.
    Character(String),
}

impl Key {
    pub fn named(key: NamedKey) -> Self {
        Self::Named(key)
    }

    pub fn character(c: impl Into<String>) -> Self {
        Self::Character(c.into())
    }
}

/// A key event (pressed or released).
#[derive(Debug, Clone)]
pub enum KeyEvent {
    /// A key was pressed.
    Pressed {
        key: Key,
        modifiers: Modifiers,
        /// The text produced by the key press (OS-level, handles shift and
        /// compose sequences).
        text: Option<String>,
    },

    /// A key was released.
    Released { key: Key, modifiers: Modifiers },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mouse_event_position() {
        let pos = Point::new(3.0, 4.0);
        let pressed = MouseEvent::ButtonPressed {
            button: MouseButton::Left,
            position: pos,
        };
        let moved = MouseEvent::CursorMoved { position: pos };
        assert_eq!(pressed.position(), pos);
        assert_eq!(moved.position(), pos);
    }

    #[test]
    fn modifiers_any_none() {
        assert!(Modifiers::CTRL.any());
        assert!(!Modifiers::CTRL.none());
        assert!(Modifiers::NONE.none());
    }

    #[test]
    fn key_constructors() {
        assert!(matches!(Key::named(NamedKey::Enter), Key::Named(NamedKey::Enter)));
        assert!(matches!(Key::character("a"), Key::Character(s) if s == "a"));
    }
}
