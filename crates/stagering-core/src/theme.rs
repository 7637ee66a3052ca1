//! # Theme
//!
//! Presentation values attached to layout elements.
//!
//! The layout contract only requires that highlighted and non-highlighted
//! nodes are visually distinct; the concrete colors and sizes here are the
//! defaults of the lifecycle dashboard and may be overridden freely.

use crate::RingError;
use serde::{Deserialize, Serialize};

// =============================================================================
// DEFAULT PALETTE
// =============================================================================

/// Fill color of the active stage marker.
pub const ACTIVE_FILL: &str = "#1976d2";

/// Border color of the active stage marker.
pub const ACTIVE_BORDER: &str = "#1565c0";

/// Fill color of inactive stage markers.
pub const INACTIVE_FILL: &str = "#e0e0e0";

/// Border color of inactive stage markers.
pub const INACTIVE_BORDER: &str = "#bdbdbd";

/// Label and title text color.
pub const TEXT_COLOR: &str = "#222";

/// Plot background color.
pub const BACKGROUND: &str = "#f8f8fa";

// =============================================================================
// NODE STYLE
// =============================================================================

/// Marker and label appearance for one highlight state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeStyle {
    pub fill: String,
    pub border: String,
    pub border_width: u32,
    /// Marker diameter in points.
    pub marker_size: u32,
    pub font_size: u32,
    pub font_color: String,
    /// Render the label in bold.
    pub bold: bool,
}

impl NodeStyle {
    /// Style of the highlighted (active) stage.
    #[must_use]
    pub fn active() -> Self {
        Self {
            fill: ACTIVE_FILL.to_string(),
            border: ACTIVE_BORDER.to_string(),
            border_width: 4,
            marker_size: 60,
            font_size: 16,
            font_color: TEXT_COLOR.to_string(),
            bold: true,
        }
    }

    /// Style of every other stage.
    #[must_use]
    pub fn inactive() -> Self {
        Self {
            fill: INACTIVE_FILL.to_string(),
            border: INACTIVE_BORDER.to_string(),
            border_width: 4,
            marker_size: 38,
            font_size: 13,
            font_color: TEXT_COLOR.to_string(),
            bold: false,
        }
    }
}

// =============================================================================
// ARROW STYLE
// =============================================================================

/// Appearance of the flow arrows between consecutive stages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrowStyle {
    pub color: String,
    pub width: f64,
    /// Arrow head scale relative to the line width.
    pub head_size: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

impl Default for ArrowStyle {
    fn default() -> Self {
        Self {
            color: "#888".to_string(),
            width: 2.0,
            head_size: 1.2,
            opacity: 0.6,
        }
    }
}

// =============================================================================
// CALLOUT STYLE
// =============================================================================

/// Appearance of the active-stage callout box below the ring.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalloutStyle {
    pub background: String,
    pub border: String,
    pub border_width: u32,
    pub padding: u32,
    pub title_font_size: u32,
    pub body_font_size: u32,
}

impl Default for CalloutStyle {
    fn default() -> Self {
        Self {
            background: "#f7fbff".to_string(),
            border: ACTIVE_FILL.to_string(),
            border_width: 2,
            padding: 8,
            title_font_size: 16,
            body_font_size: 13,
        }
    }
}

// =============================================================================
// LABEL ANCHOR
// =============================================================================

/// Where a stage label sits relative to its marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LabelAnchor {
    /// Below the marker, horizontally centered.
    #[default]
    BottomCenter,
    /// Above the marker, horizontally centered.
    TopCenter,
    /// On top of the marker.
    MiddleCenter,
}

// =============================================================================
// TITLE STYLE
// =============================================================================

/// Appearance of the layout title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TitleStyle {
    pub font_size: u32,
    pub color: String,
    pub bold: bool,
}

impl Default for TitleStyle {
    fn default() -> Self {
        Self {
            font_size: 22,
            color: TEXT_COLOR.to_string(),
            bold: true,
        }
    }
}

// =============================================================================
// THEME
// =============================================================================

/// Complete set of presentation values for a ring layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub active: NodeStyle,
    pub inactive: NodeStyle,
    pub label_anchor: LabelAnchor,
    pub arrow: ArrowStyle,
    pub callout: CalloutStyle,
    pub title: TitleStyle,
    pub background: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            active: NodeStyle::active(),
            inactive: NodeStyle::inactive(),
            label_anchor: LabelAnchor::default(),
            arrow: ArrowStyle::default(),
            callout: CalloutStyle::default(),
            title: TitleStyle::default(),
            background: BACKGROUND.to_string(),
        }
    }
}

impl Theme {
    /// Style for a node in the given highlight state.
    #[must_use]
    pub fn node_style(&self, highlight: bool) -> &NodeStyle {
        if highlight {
            &self.active
        } else {
            &self.inactive
        }
    }

    /// Check that the theme can be used for a layout.
    ///
    /// The active and inactive node styles must differ, the arrow opacity
    /// must lie in `[0, 1]`, and arrow width and head size must be finite
    /// and non-negative.
    pub fn validate(&self) -> Result<(), RingError> {
        if self.active == self.inactive {
            return Err(RingError::InvalidInput(
                "active and inactive node styles must be visually distinct".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.arrow.opacity) {
            return Err(RingError::InvalidInput(format!(
                "arrow opacity {} outside [0, 1]",
                self.arrow.opacity
            )));
        }
        for (field, value) in [
            ("width", self.arrow.width),
            ("head_size", self.arrow.head_size),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(RingError::InvalidInput(format!(
                    "arrow {} must be finite and non-negative, got {}",
                    field, value
                )));
            }
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
