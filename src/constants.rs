//! Centralized constants used across the crate.
//!
//! Layout values and default glyphs that are used in multiple places or
//! would benefit from being named constants.

/// Width of the tab-handle strip in logical pixels.
pub const STRIP_WIDTH: f32 = 40.0;

/// Width of the pane area when the sidebar is expanded.
pub const PANE_WIDTH: f32 = 280.0;

/// Minimum height of a tab handle button.
pub const HANDLE_HEIGHT: f32 = 28.0;

/// Default close glyph when the sidebar is docked on the left.
pub const CLOSE_GLYPH_LEFT: &str = "◀";

/// Default close glyph when the sidebar is docked on the right (mirrored).
pub const CLOSE_GLYPH_RIGHT: &str = "▶";
