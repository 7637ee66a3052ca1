//! # Core Type Definitions
//!
//! This module contains the shared types for the stage ring:
//! - Stage representation (`Stage`)
//! - Plane geometry (`Point`)
//! - Error types (`RingError`)

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// STAGE
// =============================================================================

/// One named step of a cyclic pipeline, with its human-readable description.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stage {
    /// Short display name (e.g. "Train").
    pub name: String,
    /// Longer text shown in the callout when the stage is active.
    pub description: String,
}

impl Stage {
    /// Create a new stage.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.description)
    }
}

// =============================================================================
// POINT
// =============================================================================

/// A point in layout space. The ring is centered on the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point on a circle of `radius` around the origin at `angle` radians.
    #[must_use]
    pub fn on_circle(radius: f64, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(radius * cos, radius * sin)
    }

    /// Distance from the origin.
    #[must_use]
    pub fn norm(self) -> f64 {
        self.x.hypot(self.y)
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building or driving a stage ring.
///
/// Layout computation itself never fails; every error surfaces at
/// construction or from the strict setter.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RingError {
    /// Stages and descriptions are inconsistent, or a theme is unusable.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A stage index outside `[0, len)` was requested.
    #[error("Stage index {index} out of range for ring of {len} stages")]
    IndexOutOfRange { index: usize, len: usize },
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_display() {
        let stage = Stage::new("Train", "Fit the model");
        assert_eq!(format!("{}", stage), "Train: Fit the model");
    }

    #[test]
    fn on_circle_quarter_turn() {
        let p = Point::on_circle(1.0, std::f64::consts::FRAC_PI_2);
        assert!(p.x.abs() < 1e-12);
        assert!((p.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn on_circle_respects_radius() {
        let p = Point::on_circle(2.5, 1.234);
        assert!((p.norm() - 2.5).abs() < 1e-12);
    }

    #[test]
    fn error_messages() {
        let err = RingError::IndexOutOfRange { index: 7, len: 4 };
        assert_eq!(
            err.to_string(),
            "Stage index 7 out of range for ring of 4 stages"
        );
        let err = RingError::InvalidInput("stages must not be empty".into());
        assert_eq!(err.to_string(), "Invalid input: stages must not be empty");
    }
}
