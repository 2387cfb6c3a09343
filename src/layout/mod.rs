//! Responsive layout system.
//!
//! - [`breakpoints`]: pure width → (tier, mode) resolution
//! - [`config`]: per-tier pane dimensions and visibility defaults
//! - [`state`]: the layout store, which also owns navigation state

pub mod breakpoints;
pub mod config;
pub mod state;

pub use breakpoints::{resolve, Breakpoint, Breakpoints, LayoutMode, ModeThresholds, Resolution, Resolver};
pub use config::{LayoutConfig, LayoutTable, PaneDimensions, PaneWidth, PaneWidths};
pub use state::{LayoutState, LayoutStore, Pane, PanePreferences, VisiblePanes};
