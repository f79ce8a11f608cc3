//! Configuration types for Odograph layout.
//!
//! This module provides the configuration structures that control the
//! connection layout engine. All types implement [`serde::Deserialize`] for
//! flexible loading from external sources (the hosting explorer keeps its
//! settings in a single config file and hands the `layout` section down).
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration root.
//! - [`LayoutConfig`] - Default node size and the dominant-axis tie-break.

use serde::Deserialize;

use odograph_core::geometry::{Axis, Size};

/// Width substituted for nodes that have not reported a size.
pub const DEFAULT_NODE_WIDTH: f32 = 250.0;

/// Height substituted for nodes that have not reported a size.
pub const DEFAULT_NODE_HEIGHT: f32 = 200.0;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section
    #[serde(default)]
    pub layout: LayoutConfig,
}

/// Layout configuration section.
///
/// # Example
///
/// ```
/// # use odograph::config::LayoutConfig;
/// # use odograph_core::geometry::Axis;
/// let config = LayoutConfig::default();
/// assert_eq!(config.default_node_size().width(), 250.0);
/// assert_eq!(config.tie_break, Axis::Vertical);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    /// Width used for nodes whose size is unknown
    #[serde(default = "default_node_width")]
    pub default_node_width: f32,

    /// Height used for nodes whose size is unknown
    #[serde(default = "default_node_height")]
    pub default_node_height: f32,

    /// Winning axis when a relation's endpoints are exactly as far apart
    /// horizontally as vertically. The vertical default is what routes a
    /// self-loop through a node's top and bottom borders.
    #[serde(default = "default_tie_break")]
    pub tie_break: Axis,

    /// Minimum number of points on one side before they are spread apart.
    /// Sides with fewer points keep the provisional mid-side offset.
    #[serde(default = "default_min_spread_count")]
    pub min_spread_count: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            default_node_width: default_node_width(),
            default_node_height: default_node_height(),
            tie_break: default_tie_break(),
            min_spread_count: default_min_spread_count(),
        }
    }
}

impl LayoutConfig {
    /// Returns the size substituted for nodes whose size is unknown.
    pub fn default_node_size(&self) -> Size {
        Size::new(self.default_node_width, self.default_node_height)
    }
}

fn default_node_width() -> f32 {
    DEFAULT_NODE_WIDTH
}

fn default_node_height() -> f32 {
    DEFAULT_NODE_HEIGHT
}

fn default_tie_break() -> Axis {
    Axis::Vertical
}

fn default_min_spread_count() -> usize {
    1
}
