//! Breakpoint resolution.
//!
//! A viewport width maps to a named tier through a descending-threshold
//! lookup, and to a [`LayoutMode`] through a separate pair of cutoffs. Both
//! lookups are pure and total: any `i32` width resolves, including zero and
//! negative values, which fall into the smallest tier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Named viewport-width tier, ordered from narrowest to widest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Breakpoint {
    #[serde(rename = "sm")]
    Sm,
    #[serde(rename = "md")]
    Md,
    #[serde(rename = "lg")]
    Lg,
    #[serde(rename = "xl")]
    Xl,
    #[serde(rename = "2xl")]
    Xxl,
}

impl Breakpoint {
    /// All breakpoints in ascending order.
    pub const ALL: [Breakpoint; 5] = [
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
        Breakpoint::Xxl,
    ];

    /// Ordinal index (0-4).
    pub const fn index(self) -> usize {
        match self {
            Breakpoint::Sm => 0,
            Breakpoint::Md => 1,
            Breakpoint::Lg => 2,
            Breakpoint::Xl => 3,
            Breakpoint::Xxl => 4,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
            Breakpoint::Xxl => "2xl",
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Breakpoint {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Breakpoint::ALL
            .into_iter()
            .find(|bp| bp.label() == s)
            .ok_or_else(|| ConfigError::invalid_value("breakpoint", s, "expected sm, md, lg, xl or 2xl"))
    }
}

/// How the two panes are composed on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutMode {
    /// One pane at a time; the preview pane is an overlay.
    SinglePane,
    /// Chat and preview side by side.
    DualPane,
    /// Narrow viewports: panes stacked vertically.
    MobileStack,
}

impl LayoutMode {
    pub const fn label(self) -> &'static str {
        match self {
            LayoutMode::SinglePane => "single-pane",
            LayoutMode::DualPane => "dual-pane",
            LayoutMode::MobileStack => "mobile-stack",
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Minimum width, in pixels, of each tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoints {
    pub sm: i32,
    pub md: i32,
    pub lg: i32,
    pub xl: i32,
    #[serde(rename = "2xl")]
    pub xxl: i32,
}

impl Breakpoints {
    /// Default thresholds: 640 / 768 / 1200 / 1600 / 1920 px.
    pub const DEFAULT: Self = Self {
        sm: 640,
        md: 768,
        lg: 1200,
        xl: 1600,
        xxl: 1920,
    };

    /// Minimum width of the given tier.
    pub const fn threshold(self, bp: Breakpoint) -> i32 {
        match bp {
            Breakpoint::Sm => self.sm,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
            Breakpoint::Xl => self.xl,
            Breakpoint::Xxl => self.xxl,
        }
    }

    /// `(tier, min_width)` pairs sorted descending by `min_width`.
    pub const fn descending(self) -> [(Breakpoint, i32); 5] {
        [
            (Breakpoint::Xxl, self.xxl),
            (Breakpoint::Xl, self.xl),
            (Breakpoint::Lg, self.lg),
            (Breakpoint::Md, self.md),
            (Breakpoint::Sm, self.sm),
        ]
    }

    /// First tier whose minimum width is at or below `width`, else the
    /// smallest tier.
    pub fn classify(self, width: i32) -> Breakpoint {
        self.descending()
            .into_iter()
            .find(|(_, min)| *min <= width)
            .map(|(bp, _)| bp)
            .unwrap_or(Breakpoint::Sm)
    }

    /// Check that thresholds strictly ascend with the tier order.
    ///
    /// The descending lookup silently shadows tiers otherwise.
    pub fn validate(self) -> Result<(), ConfigError> {
        for pair in Breakpoint::ALL.windows(2) {
            let (lower, upper) = (pair[0], pair[1]);
            let (lower_min, upper_min) = (self.threshold(lower), self.threshold(upper));
            if lower_min >= upper_min {
                return Err(ConfigError::NonAscendingThresholds {
                    lower,
                    lower_min,
                    upper,
                    upper_min,
                });
            }
        }
        Ok(())
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Width cutoffs for [`LayoutMode`], independent of the tier table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeThresholds {
    /// Widths at or above this use single-pane (the md threshold).
    pub single_pane_min: i32,
    /// Widths at or above this use dual-pane (the lg threshold).
    pub dual_pane_min: i32,
}

impl ModeThresholds {
    pub const DEFAULT: Self = Self {
        single_pane_min: 768,
        dual_pane_min: 1200,
    };

    pub fn mode_for(self, width: i32) -> LayoutMode {
        if width >= self.dual_pane_min {
            LayoutMode::DualPane
        } else if width >= self.single_pane_min {
            LayoutMode::SinglePane
        } else {
            LayoutMode::MobileStack
        }
    }

    pub fn validate(self) -> Result<(), ConfigError> {
        if self.single_pane_min >= self.dual_pane_min {
            return Err(ConfigError::InvalidModeCutoffs {
                single_pane_min: self.single_pane_min,
                dual_pane_min: self.dual_pane_min,
            });
        }
        Ok(())
    }
}

impl Default for ModeThresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Result of resolving a width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub breakpoint: Breakpoint,
    pub mode: LayoutMode,
}

/// Breakpoint resolver holding both threshold sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Resolver {
    pub breakpoints: Breakpoints,
    pub modes: ModeThresholds,
}

impl Resolver {
    /// Build a resolver, rejecting thresholds that would shadow tiers.
    pub fn new(breakpoints: Breakpoints, modes: ModeThresholds) -> Result<Self, ConfigError> {
        breakpoints.validate()?;
        modes.validate()?;
        Ok(Self { breakpoints, modes })
    }

    pub fn resolve(&self, width: i32) -> Resolution {
        Resolution {
            breakpoint: self.breakpoints.classify(width),
            mode: self.modes.mode_for(width),
        }
    }

    /// Widest width range classified as `bp`, inclusive on both ends.
    pub fn tier_range(&self, bp: Breakpoint) -> (i32, i32) {
        let lower = match bp {
            Breakpoint::Sm => i32::MIN,
            _ => self.breakpoints.threshold(bp),
        };
        let upper = Breakpoint::ALL
            .get(bp.index() + 1)
            .map_or(i32::MAX, |next| self.breakpoints.threshold(*next).saturating_sub(1));
        (lower, upper)
    }
}

/// Resolve a width against the default thresholds.
pub fn resolve(width: i32) -> Resolution {
    Resolver::default().resolve(width)
}
