//! Color palette for the widget preview.

use ratatui::style::Color;

/// Pane borders.
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Border of the focused pane.
pub const COLOR_FOCUS: Color = Color::White;

/// Header and pane titles.
pub const COLOR_HEADER: Color = Color::White;

/// Current breadcrumb.
pub const COLOR_ACTIVE: Color = Color::LightGreen;

/// Secondary text: hints, past breadcrumbs, timestamps.
pub const COLOR_DIM: Color = Color::DarkGray;

/// Bot messages.
pub const COLOR_BOT: Color = Color::Rgb(0, 122, 204);

/// User messages.
pub const COLOR_USER: Color = Color::Gray;

/// Placeholder content.
pub const COLOR_PLACEHOLDER: Color = Color::Yellow;

/// Background behind the overlaid right pane.
pub const COLOR_OVERLAY_BG: Color = Color::Rgb(10, 15, 35);
