//! # Stage Ring
//!
//! An ordered, cyclic list of pipeline stages with one active stage.
//!
//! The stage list is fixed at construction. The only mutable state is the
//! active index, which moves through [`StageRing::set_active`],
//! [`StageRing::try_set_active`], [`StageRing::advance`] and
//! [`StageRing::retreat`]. There is no terminal stage: the last stage flows
//! back into the first.
//!
//! ```
//! use stagering_core::StageRing;
//!
//! let mut ring = StageRing::new(
//!     ["Train", "Deploy", "Monitor", "Retrain"],
//!     ["fit", "ship", "watch", "refresh"],
//! )?;
//! ring.set_active(2);
//! let layout = ring.compute_layout();
//! assert_eq!(layout.annotation.stage, "Monitor");
//! # Ok::<(), stagering_core::RingError>(())
//! ```

use crate::layout::Layout;
use crate::theme::Theme;
use crate::{RingError, Stage};

/// Title used when none is supplied.
pub const DEFAULT_TITLE: &str = "ML System: Production Feedback Loop";

// =============================================================================
// STAGE RING
// =============================================================================

/// Holder of ring state; produces a [`Layout`] on demand.
///
/// Not internally synchronized. Share it behind a lock if several threads
/// need to change the active stage.
#[derive(Debug, Clone, PartialEq)]
pub struct StageRing {
    stages: Vec<Stage>,
    active: usize,
    title: String,
    theme: Theme,
}

impl StageRing {
    /// Create a ring from parallel name and description sequences.
    ///
    /// Fails with [`RingError::InvalidInput`] when the sequences differ in
    /// length or when there are no stages. The first stage starts active.
    pub fn new<N, D>(
        stages: impl IntoIterator<Item = N>,
        descriptions: impl IntoIterator<Item = D>,
    ) -> Result<Self, RingError>
    where
        N: Into<String>,
        D: Into<String>,
    {
        let names: Vec<String> = stages.into_iter().map(Into::into).collect();
        let descriptions: Vec<String> = descriptions.into_iter().map(Into::into).collect();

        if names.len() != descriptions.len() {
            return Err(RingError::InvalidInput(format!(
                "{} stages but {} descriptions",
                names.len(),
                descriptions.len()
            )));
        }

        Self::from_stages(
            names
                .into_iter()
                .zip(descriptions)
                .map(|(name, description)| Stage::new(name, description))
                .collect(),
        )
    }

    /// Create a ring from `(name, description)` stages.
    pub fn from_stages(stages: Vec<Stage>) -> Result<Self, RingError> {
        if stages.is_empty() {
            return Err(RingError::InvalidInput(
                "stages must not be empty".to_string(),
            ));
        }

        tracing::debug!(stages = stages.len(), "stage ring created");

        Ok(Self {
            stages,
            active: 0,
            title: DEFAULT_TITLE.to_string(),
            theme: Theme::default(),
        })
    }

    /// Replace the display title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Replace the theme after validating it.
    pub fn with_theme(mut self, theme: Theme) -> Result<Self, RingError> {
        theme.validate()?;
        self.theme = theme;
        Ok(self)
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// Number of stages (always at least 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Always false; a ring holds at least one stage.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Index of the active stage.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// The active stage.
    #[must_use]
    pub fn active_stage(&self) -> &Stage {
        &self.stages[self.active]
    }

    /// Stage at `index`, if in range.
    #[must_use]
    pub fn stage(&self, index: usize) -> Option<&Stage> {
        self.stages.get(index)
    }

    /// Stage names in ring order.
    pub fn stages(&self) -> impl Iterator<Item = &str> {
        self.stages.iter().map(|s| s.name.as_str())
    }

    /// Stage descriptions in ring order.
    pub fn descriptions(&self) -> impl Iterator<Item = &str> {
        self.stages.iter().map(|s| s.description.as_str())
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    // =========================================================================
    // ACTIVE STAGE
    // =========================================================================

    /// Make `index` the active stage.
    ///
    /// Out-of-range indices are ignored and leave the ring unchanged. Use
    /// [`StageRing::try_set_active`] to detect them.
    pub fn set_active(&mut self, index: usize) {
        if let Err(err) = self.try_set_active(index) {
            tracing::debug!(%err, "ignoring active stage change");
        }
    }

    /// Make `index` the active stage, or report why it cannot be.
    pub fn try_set_active(&mut self, index: usize) -> Result<(), RingError> {
        if index >= self.stages.len() {
            return Err(RingError::IndexOutOfRange {
                index,
                len: self.stages.len(),
            });
        }
        self.active = index;
        Ok(())
    }

    /// Move to the next stage, wrapping from the last back to the first.
    pub fn advance(&mut self) -> usize {
        self.active = (self.active + 1) % self.stages.len();
        self.active
    }

    /// Move to the previous stage, wrapping from the first to the last.
    pub fn retreat(&mut self) -> usize {
        let len = self.stages.len();
        self.active = (self.active + len - 1) % len;
        self.active
    }

    // =========================================================================
    // LAYOUT
    // =========================================================================

    /// Compute the layout for the current state.
    ///
    /// Pure: repeated calls without an intervening change return equal layouts.
    #[must_use]
    pub fn compute_layout(&self) -> Layout {
        Layout::build(&self.stages, self.active, &self.title, &self.theme)
    }
}

// =============================================================================
// TESTS
// =============================================================================
