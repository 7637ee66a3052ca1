//! # stagering-core
//!
//! The render-agnostic stage ring for stagering - THE RING.
//!
//! A [`StageRing`] owns an ordered list of pipeline stages (for example
//! Train → Deploy → Monitor → Retrain), remembers which one is active, and
//! computes a [`Layout`]: stage markers evenly spaced on the unit circle,
//! arrows closing the cycle, and a callout for the active stage.
//!
//! ## Architectural Constraints
//!
//! - Holds no global state; callers own their rings
//! - Performs no I/O; the layout is handed to an external renderer
//! - Layout computation is pure and never fails

// =============================================================================
// MODULES
// =============================================================================

pub mod layout;
pub mod ring;
pub mod theme;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{Point, RingError, Stage};

// =============================================================================
// RE-EXPORTS: Ring and Layout
// =============================================================================

pub use layout::{ANNOTATION_OFFSET, Annotation, Arrow, Layout, NodeLayout, RING_RADIUS, Viewport};
pub use ring::{DEFAULT_TITLE, StageRing};
pub use theme::{ArrowStyle, CalloutStyle, LabelAnchor, NodeStyle, Theme, TitleStyle};
