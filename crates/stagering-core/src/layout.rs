//! # Ring Layout
//!
//! The render-agnostic description of a stage ring: one node per stage on the
//! unit circle, one arrow per consecutive pair (closing back to stage 0), and a
//! callout for the active stage below the ring.
//!
//! ## Geometry
//!
//! | Element | Placement |
//! |---------|-----------|
//! | Node `i` of `N` | angle `2π·i/N` from the positive x axis, counter-clockwise, radius 1 |
//! | Arrow `i` | from node `i` to node `(i + 1) mod N` |
//! | Callout | `(0, -ANNOTATION_OFFSET)` |
//!
//! The payload serializes with serde so any plotting layer can draw it.

use crate::theme::{ArrowStyle, CalloutStyle, LabelAnchor, NodeStyle, Theme, TitleStyle};
use crate::{Point, Stage};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

// =============================================================================
// GEOMETRY CONSTANTS
// =============================================================================

/// Radius of the ring every node sits on.
pub const RING_RADIUS: f64 = 1.0;

/// Distance below the ring center at which the active-stage callout sits.
pub const ANNOTATION_OFFSET: f64 = 1.35;

// =============================================================================
// VIEWPORT
// =============================================================================

/// Visible region of layout space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for Viewport {
    /// Leaves room below the ring for the callout.
    fn default() -> Self {
        Self {
            x_min: -1.5,
            x_max: 1.5,
            y_min: -1.6,
            y_max: 1.2,
        }
    }
}

impl Viewport {
    /// Check whether a point falls inside the viewport (edges inclusive).
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        (self.x_min..=self.x_max).contains(&point.x) && (self.y_min..=self.y_max).contains(&point.y)
    }
}

// =============================================================================
// LAYOUT ELEMENTS
// =============================================================================

/// Placement and appearance of one stage marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeLayout {
    /// Position of the stage in the ring order.
    pub index: usize,
    /// Stage name shown next to the marker.
    pub label: String,
    /// Placement of the label relative to the marker.
    pub label_anchor: LabelAnchor,
    /// Angle in radians.
    pub angle: f64,
    pub position: Point,
    /// True for the active stage only.
    pub highlight: bool,
    pub style: NodeStyle,
}

/// Directed flow arrow between two consecutive stages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arrow {
    pub source: usize,
    pub target: usize,
    pub from: Point,
    pub to: Point,
    pub style: ArrowStyle,
}

/// Callout describing the active stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Name of the active stage.
    pub stage: String,
    /// Description of the active stage.
    pub description: String,
    pub position: Point,
    pub style: CalloutStyle,
}

/// Complete layout of a ring, ready to hand to a renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub title: String,
    pub title_style: TitleStyle,
    /// One entry per stage, ordered by index.
    pub nodes: Vec<NodeLayout>,
    /// One entry per stage, arrow `i` leaves node `i`.
    pub arrows: Vec<Arrow>,
    pub annotation: Annotation,
    pub viewport: Viewport,
    pub background: String,
}

impl Layout {
    /// Build the layout for `stages` with `active` highlighted.
    ///
    /// Callers guarantee `stages` is non-empty and `active < stages.len()`;
    /// `StageRing` upholds both.
    pub(crate) fn build(stages: &[Stage], active: usize, title: &str, theme: &Theme) -> Self {
        let n = stages.len();
        let positions: Vec<(f64, Point)> = (0..n)
            .map(|i| {
                let angle = TAU * i as f64 / n as f64;
                (angle, Point::on_circle(RING_RADIUS, angle))
            })
            .collect();

        let nodes = stages
            .iter()
            .zip(&positions)
            .enumerate()
            .map(|(index, (stage, &(angle, position)))| {
                let highlight = index == active;
                NodeLayout {
                    index,
                    label: stage.name.clone(),
                    label_anchor: theme.label_anchor,
                    angle,
                    position,
                    highlight,
                    style: theme.node_style(highlight).clone(),
                }
            })
            .collect();

        let arrows = (0..n)
            .map(|source| {
                let target = (source + 1) % n;
                Arrow {
                    source,
                    target,
                    from: positions[source].1,
                    to: positions[target].1,
                    style: theme.arrow.clone(),
                }
            })
            .collect();

        let active_stage = &stages[active];
        let annotation = Annotation {
            stage: active_stage.name.clone(),
            description: active_stage.description.clone(),
            position: Point::new(0.0, -ANNOTATION_OFFSET),
            style: theme.callout.clone(),
        };

        Self {
            title: title.to_string(),
            title_style: theme.title.clone(),
            nodes,
            arrows,
            annotation,
            viewport: Viewport::default(),
            background: theme.background.clone(),
        }
    }

    /// Get the node record for a stage index.
    #[must_use]
    pub fn node(&self, index: usize) -> Option<&NodeLayout> {
        self.nodes.get(index)
    }

    /// Get the highlighted node.
    #[must_use]
    pub fn highlighted(&self) -> Option<&NodeLayout> {
        self.nodes.iter().find(|node| node.highlight)
    }

    /// Target of the arrow leaving `index`, if such an arrow exists.
    #[must_use]
    pub fn successor(&self, index: usize) -> Option<usize> {
        self.arrows
            .iter()
            .find(|arrow| arrow.source == index)
            .map(|arrow| arrow.target)
    }
}

// =============================================================================
// TESTS
// =============================================================================
