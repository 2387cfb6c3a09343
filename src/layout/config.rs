//! Layout configuration table.
//!
//! Each breakpoint tier has a [`LayoutConfig`] describing the pane mode,
//! both panes' dimensions and the gap between them. The built-in table is
//! complete by construction; tables loaded from disk are validated on load
//! and rejected if any tier is missing.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::breakpoints::{Breakpoint, LayoutMode, Resolver};
use crate::error::ConfigError;

/// Preferred width of a pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum PaneWidth {
    /// Percentage (0-100) of the space left after the gap.
    Percent(u8),
    /// Fixed width in pixels.
    Fixed(u32),
    /// Whatever the other pane leaves.
    Fill,
}

/// Dimensions and visibility defaults of one pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaneDimensions {
    pub width: PaneWidth,
    #[serde(default)]
    pub min_width: Option<u32>,
    #[serde(default)]
    pub max_width: Option<u32>,
    pub visible_by_default: bool,
}

impl PaneDimensions {
    const fn new(width: PaneWidth, min_width: Option<u32>, max_width: Option<u32>, visible: bool) -> Self {
        Self {
            width,
            min_width,
            max_width,
            visible_by_default: visible,
        }
    }

    /// Preferred width within `available` pixels, or `None` for [`PaneWidth::Fill`].
    fn preferred(&self, available: u32) -> Option<u32> {
        let raw = match self.width {
            PaneWidth::Percent(pct) => available * u32::from(pct.min(100)) / 100,
            PaneWidth::Fixed(px) => px,
            PaneWidth::Fill => return None,
        };
        Some(self.clamp(raw).min(available))
    }

    fn clamp(&self, width: u32) -> u32 {
        let width = self.min_width.map_or(width, |min| width.max(min));
        self.max_width.map_or(width, |max| width.min(max))
    }
}

/// Concrete pixel widths of both panes for a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PaneWidths {
    pub left: u32,
    pub right: u32,
}

/// Layout of one breakpoint tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub mode: LayoutMode,
    pub left_pane: PaneDimensions,
    pub right_pane: PaneDimensions,
    /// Horizontal gap between panes when both are shown side by side.
    pub gap: u32,
}

impl LayoutConfig {
    /// Split `container` pixels between the visible panes.
    ///
    /// Hidden panes get zero width. The gap is only reserved when both panes
    /// are visible.
    pub fn pane_widths(&self, container: u32, left_visible: bool, right_visible: bool) -> PaneWidths {
        match (left_visible, right_visible) {
            (false, false) => PaneWidths::default(),
            (true, false) => PaneWidths {
                left: container,
                right: 0,
            },
            (false, true) => PaneWidths {
                left: 0,
                right: container,
            },
            (true, true) => {
                let available = container.saturating_sub(self.gap);
                let left = match (self.left_pane.preferred(available), self.right_pane.preferred(available)) {
                    (Some(left), _) => left,
                    (None, Some(right)) => available - right,
                    (None, None) => available / 2,
                };
                PaneWidths {
                    left,
                    right: available - left,
                }
            }
        }
    }
}

const HIDDEN_PREVIEW: PaneDimensions = PaneDimensions::new(PaneWidth::Fill, None, None, false);
const FULL_WIDTH_CHAT: PaneDimensions = PaneDimensions::new(PaneWidth::Percent(100), None, None, true);

/// Layout configuration for every breakpoint tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutTable {
    entries: [LayoutConfig; 5],
}

impl LayoutTable {
    /// Configuration for `breakpoint`.
    ///
    /// The table always holds all tiers, so the smallest-tier fallback the
    /// lookup contract promises can only apply to tables that never pass
    /// [`LayoutTable::from_entries`]; those are rejected at load time.
    pub fn config_for(&self, breakpoint: Breakpoint) -> &LayoutConfig {
        &self.entries[breakpoint.index()]
    }

    /// Build a table from a map, failing on the first missing tier.
    pub fn from_entries(mut entries: HashMap<Breakpoint, LayoutConfig>) -> Result<Self, ConfigError> {
        let mut take = |breakpoint: Breakpoint| {
            entries
                .remove(&breakpoint)
                .ok_or(ConfigError::MissingBreakpoint { breakpoint })
        };
        Ok(Self {
            entries: [
                take(Breakpoint::Sm)?,
                take(Breakpoint::Md)?,
                take(Breakpoint::Lg)?,
                take(Breakpoint::Xl)?,
                take(Breakpoint::Xxl)?,
            ],
        })
    }

    /// Parse a JSON object keyed by tier label.
    pub fn from_json(json: &str, origin: &Path) -> Result<Self, ConfigError> {
        let entries: HashMap<Breakpoint, LayoutConfig> =
            serde_json::from_str(json).map_err(|source| ConfigError::MalformedTable {
                path: origin.to_path_buf(),
                source,
            })?;
        Self::from_entries(entries)
    }

    /// Load a table from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::UnreadableTable {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_json(&json, path)?;
        tracing::info!("Loaded layout table from {}", path.display());
        Ok(table)
    }

    /// Check every tier's declared mode against what `resolver` reports for
    /// the widths in that tier.
    ///
    /// A tier whose width range straddles a mode cutoff can never agree with
    /// a single declared mode and is rejected too.
    pub fn check_modes(&self, resolver: &Resolver) -> Result<(), ConfigError> {
        for breakpoint in Breakpoint::ALL {
            let declared = self.config_for(breakpoint).mode;
            let (lower, upper) = resolver.tier_range(breakpoint);
            for width in [lower, upper] {
                let resolved = resolver.modes.mode_for(width);
                if resolved != declared {
                    return Err(ConfigError::TableModeMismatch {
                        breakpoint,
                        declared,
                        resolved,
                    });
                }
            }
        }
        Ok(())
    }

    /// Entries as a map, in the shape [`LayoutTable::from_json`] accepts.
    pub fn to_entries(&self) -> HashMap<Breakpoint, LayoutConfig> {
        Breakpoint::ALL
            .into_iter()
            .map(|bp| (bp, *self.config_for(bp)))
            .collect()
    }
}

impl Default for LayoutTable {
    fn default() -> Self {
        Self {
            entries: [
                // sm
                LayoutConfig {
                    mode: LayoutMode::MobileStack,
                    left_pane: FULL_WIDTH_CHAT,
                    right_pane: HIDDEN_PREVIEW,
                    gap: 0,
                },
                // md
                LayoutConfig {
                    mode: LayoutMode::SinglePane,
                    left_pane: FULL_WIDTH_CHAT,
                    right_pane: HIDDEN_PREVIEW,
                    gap: 0,
                },
                // lg
                LayoutConfig {
                    mode: LayoutMode::DualPane,
                    left_pane: PaneDimensions::new(PaneWidth::Percent(40), Some(380), Some(480), true),
                    right_pane: PaneDimensions::new(PaneWidth::Fill, Some(480), None, true),
                    gap: 16,
                },
                // xl
                LayoutConfig {
                    mode: LayoutMode::DualPane,
                    left_pane: PaneDimensions::new(PaneWidth::Percent(35), Some(420), Some(520), true),
                    right_pane: PaneDimensions::new(PaneWidth::Fill, Some(640), None, true),
                    gap: 24,
                },
                // 2xl
                LayoutConfig {
                    mode: LayoutMode::DualPane,
                    left_pane: PaneDimensions::new(PaneWidth::Percent(30), Some(440), Some(560), true),
                    right_pane: PaneDimensions::new(PaneWidth::Fill, Some(800), None, true),
                    gap: 32,
                },
            ],
        }
    }
}
