//! Configuration for tree building and radial layout
//!
//! Controls how angular budget is split between branches and how far from
//! the center each node lands.

use crate::error::LayoutError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the layout deriver
///
/// # Examples
///
/// ```
/// use rivalry_layout::{LayoutConfig, LayoutScale};
///
/// // Default configuration
/// let config = LayoutConfig::default();
/// assert_eq!(config.branch_exponent, 0.66);
/// assert_eq!(config.scale(LayoutScale::Detail), 35.0);
///
/// // Flatter branch shares
/// let config = LayoutConfig::legacy();
/// assert_eq!(config.branch_exponent, 0.3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Exponent applied to `(descendants + 1)` before normalizing sibling shares
    /// Default: 0.66
    pub branch_exponent: f64,

    /// Distance multiplier for the detailed single-tree view
    /// Default: 35.0
    pub detail_scale: f64,

    /// Distance multiplier for the overview
    /// Default: 25.0
    pub overview_scale: f64,

    /// Horizontal gap between disconnected components
    /// Default: 50.0
    pub component_gap: f64,
}

/// Which caller a layout is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutScale {
    /// Detailed single-tree view
    #[default]
    Detail,
    /// Coarser overview
    Overview,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            branch_exponent: 0.66,
            detail_scale: 35.0,
            overview_scale: 25.0,
            component_gap: 50.0,
        }
    }
}

impl LayoutConfig {
    /// Earlier tuning with a much flatter branch exponent
    ///
    /// Large subtrees get barely more room than leaves.
    pub fn legacy() -> Self {
        Self {
            branch_exponent: 0.3,
            ..Self::default()
        }
    }

    /// Parse a configuration from TOML; missing keys take their defaults
    pub fn from_toml_str(content: &str) -> Result<Self, LayoutError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LayoutError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Distance multiplier K for a scale
    pub fn scale(&self, scale: LayoutScale) -> f64 {
        match scale {
            LayoutScale::Detail => self.detail_scale,
            LayoutScale::Overview => self.overview_scale,
        }
    }

    /// Check that every value is usable
    pub fn validate(&self) -> Result<(), LayoutError> {
        if !self.branch_exponent.is_finite() || self.branch_exponent <= 0.0 {
            return Err(LayoutError::Config(format!(
                "branch_exponent must be a positive number, got {}",
                self.branch_exponent
            )));
        }
        for (name, value) in [
            ("detail_scale", self.detail_scale),
            ("overview_scale", self.overview_scale),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(LayoutError::Config(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        if !self.component_gap.is_finite() || self.component_gap < 0.0 {
            return Err(LayoutError::Config(format!(
                "component_gap must not be negative, got {}",
                self.component_gap
            )));
        }
        Ok(())
    }
}
