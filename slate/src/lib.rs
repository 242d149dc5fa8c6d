//! Slate: software-rendered UI toolkit.
//!
//! Slate provides the small set of primitives a fixed-layout desktop view
//! needs when it composites everything on the CPU:
//!
//! - Geometry and color types (`Point`, `Size`, `Rect`, `Color`)
//! - An owned RGBA pixel buffer (`Surface`) with fill, alpha blit, and scale
//! - Text rasterization behind the `TextRenderer` trait, with a
//!   fontdue-backed `FontRenderer` implementation
//! - Input event types for a polled, single-window host loop
//! - `LineEditor`, a reusable single-line text editing state
//!
//! Widgets built on Slate own their surfaces exclusively and share one
//! immutable text renderer; there is no hidden global state and no event
//! loop - the host polls its windowing library and forwards events.

// Core primitives
pub mod primitives;
pub mod surface;

// Text engine (fontdue integration)
pub mod text;

// Input events
pub mod event;

// State helpers
pub mod line_editor;

mod error;

// Re-export core types
pub use error::SlateError;
pub use event::{Key, KeyEvent, Modifiers, MouseButton, MouseEvent, NamedKey};
pub use line_editor::{EditAction, LineEditor};
pub use primitives::{Color, Point, Rect, Size};
pub use surface::Surface;
pub use text::{FontRenderer, SharedTextRenderer, Slant, TextRenderer, TextStyle};
