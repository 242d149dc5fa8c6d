//! Docket theme - palette and semantic colors.

use slate::Color;

/// Docket color palette.
pub struct DocketTheme;

impl DocketTheme {
    // Base palette
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const GRAY: Color = Color::rgb(0.5, 0.5, 0.5);
    pub const LIGHT_GRAY: Color = Color::rgb(0.78, 0.78, 0.78);
    pub const BLUE: Color = Color::rgb(0.31, 0.41, 0.61);
    pub const LIGHT_BLUE: Color = Color::rgb(0.68, 0.85, 0.9);
    pub const PURPLE: Color = Color::rgb(0.5, 0.0, 0.5);
    pub const LIGHT_PURPLE: Color = Color::rgb(0.9, 0.47, 0.9);
    pub const RED: Color = Color::rgb(0.8, 0.0, 0.0);
    pub const LIGHT_RED: Color = Color::rgb(1.0, 0.2, 0.2);

    // Semantic colors
    pub const FG_PRIMARY: Color = Self::WHITE;
    pub const FG_PLACEHOLDER: Color = Self::GRAY;
    pub const BG_PANEL: Color = Self::GRAY;
    pub const BG_ROW: Color = Self::BLACK;
    pub const BG_ROW_HOVER: Color = Self::GRAY;
}
