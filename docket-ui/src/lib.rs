//! Docket UI - the Crime Manager widget layer.
//!
//! Four fixed-geometry widgets composed from `slate` surfaces: `Button`,
//! `InputBox`, `Table`, and `Block`. The host view constructs them once with
//! a shared text renderer, forwards polled input events to their handlers,
//! and blits them onto the window surface each frame.

pub mod theme;
pub mod widgets;

pub use theme::DocketTheme;
pub use widgets::{Block, Button, InputBox, RowFields, Table, Widget};
