//! # Ring Configuration
//!
//! TOML description of a stage ring: title, stages, initial active stage and
//! optional theme overrides. Every theme field may be omitted; omitted fields
//! keep the default palette.
//!
//! ```toml
//! title = "ML System: Production Feedback Loop"
//! active = 0
//!
//! [[stages]]
//! name = "Train"
//! description = "Fit the model on the curated dataset"
//!
//! [theme.active]
//! fill = "#1976d2"
//! ```

use crate::error::CliError;
use serde::Deserialize;
use stagering_core::{
    ArrowStyle, CalloutStyle, LabelAnchor, NodeStyle, Stage, StageRing, Theme, TitleStyle,
};
use std::ffi::OsString;
use std::path::Path;

// =============================================================================
// LIMITS
// =============================================================================

/// Maximum configuration file size (1 MiB).
pub const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;

/// Environment variable consulted when no `--config` flag is given.
pub const CONFIG_ENV_VAR: &str = "STAGERING_CONFIG";

/// Starter configuration written by `stagering init`.
pub const STARTER_CONFIG: &str = r##"# stagering ring configuration
title = "ML System: Production Feedback Loop"

# Index of the stage highlighted on start (0-based).
active = 0

[[stages]]
name = "Train"
description = "Fit the model on the curated dataset"

[[stages]]
name = "Deploy"
description = "Promote the trained model to production"

[[stages]]
name = "Monitor"
description = "Track live metrics, drift and failures"

[[stages]]
name = "Retrain"
description = "Refresh the model with newly collected data"

# Uncomment to override the default palette.
# [theme.active]
# fill = "#1976d2"
# border = "#1565c0"
# marker_size = 60
#
# [theme.inactive]
# fill = "#e0e0e0"
# marker_size = 38
"##;

// =============================================================================
// THEME OVERRIDES
// =============================================================================

/// Partial [`NodeStyle`]; unset fields keep the base value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NodeStyleOverrides {
    pub fill: Option<String>,
    pub border: Option<String>,
    pub border_width: Option<u32>,
    pub marker_size: Option<u32>,
    pub font_size: Option<u32>,
    pub font_color: Option<String>,
    pub bold: Option<bool>,
}

impl NodeStyleOverrides {
    fn apply(self, base: NodeStyle) -> NodeStyle {
        NodeStyle {
            fill: self.fill.unwrap_or(base.fill),
            border: self.border.unwrap_or(base.border),
            border_width: self.border_width.unwrap_or(base.border_width),
            marker_size: self.marker_size.unwrap_or(base.marker_size),
            font_size: self.font_size.unwrap_or(base.font_size),
            font_color: self.font_color.unwrap_or(base.font_color),
            bold: self.bold.unwrap_or(base.bold),
        }
    }
}

/// Partial [`ArrowStyle`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArrowStyleOverrides {
    pub color: Option<String>,
    pub width: Option<f64>,
    pub head_size: Option<f64>,
    pub opacity: Option<f64>,
}

impl ArrowStyleOverrides {
    fn apply(self, base: ArrowStyle) -> ArrowStyle {
        ArrowStyle {
            color: self.color.unwrap_or(base.color),
            width: self.width.unwrap_or(base.width),
            head_size: self.head_size.unwrap_or(base.head_size),
            opacity: self.opacity.unwrap_or(base.opacity),
        }
    }
}

/// Partial [`CalloutStyle`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalloutStyleOverrides {
    pub background: Option<String>,
    pub border: Option<String>,
    pub border_width: Option<u32>,
    pub padding: Option<u32>,
    pub title_font_size: Option<u32>,
    pub body_font_size: Option<u32>,
}

impl CalloutStyleOverrides {
    fn apply(self, base: CalloutStyle) -> CalloutStyle {
        CalloutStyle {
            background: self.background.unwrap_or(base.background),
            border: self.border.unwrap_or(base.border),
            border_width: self.border_width.unwrap_or(base.border_width),
            padding: self.padding.unwrap_or(base.padding),
            title_font_size: self.title_font_size.unwrap_or(base.title_font_size),
            body_font_size: self.body_font_size.unwrap_or(base.body_font_size),
        }
    }
}

/// Partial [`TitleStyle`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TitleStyleOverrides {
    pub font_size: Option<u32>,
    pub color: Option<String>,
    pub bold: Option<bool>,
}

impl TitleStyleOverrides {
    fn apply(self, base: TitleStyle) -> TitleStyle {
        TitleStyle {
            font_size: self.font_size.unwrap_or(base.font_size),
            color: self.color.unwrap_or(base.color),
            bold: self.bold.unwrap_or(base.bold),
        }
    }
}

/// Partial [`Theme`] as found under `[theme]`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeOverrides {
    pub active: NodeStyleOverrides,
    pub inactive: NodeStyleOverrides,
    pub label_anchor: Option<LabelAnchor>,
    pub arrow: ArrowStyleOverrides,
    pub callout: CalloutStyleOverrides,
    pub title: TitleStyleOverrides,
    pub background: Option<String>,
}

impl ThemeOverrides {
    /// Layer these overrides on top of `base`.
    #[must_use]
    pub fn apply(self, base: Theme) -> Theme {
        Theme {
            active: self.active.apply(base.active),
            inactive: self.inactive.apply(base.inactive),
            label_anchor: self.label_anchor.unwrap_or(base.label_anchor),
            arrow: self.arrow.apply(base.arrow),
            callout: self.callout.apply(base.callout),
            title: self.title.apply(base.title),
            background: self.background.unwrap_or(base.background),
        }
    }
}

// =============================================================================
// RING CONFIG
// =============================================================================

/// Parsed ring configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RingConfig {
    #[serde(default)]
    pub title: Option<String>,
    /// Initially active stage.
    #[serde(default)]
    pub active: usize,
    pub stages: Vec<Stage>,
    #[serde(default)]
    pub theme: ThemeOverrides,
}

impl Default for RingConfig {
    /// The four-stage model lifecycle from [`STARTER_CONFIG`].
    fn default() -> Self {
        Self {
            title: None,
            active: 0,
            stages: vec![
                Stage::new("Train", "Fit the model on the curated dataset"),
                Stage::new("Deploy", "Promote the trained model to production"),
                Stage::new("Monitor", "Track live metrics, drift and failures"),
                Stage::new("Retrain", "Refresh the model with newly collected data"),
            ],
            theme: ThemeOverrides::default(),
        }
    }
}

impl RingConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, CliError> {
        toml::from_str(text).map_err(|e| CliError::Config(e.to_string()))
    }

    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let metadata = std::fs::metadata(path).map_err(|e| {
            CliError::Io(format!("Cannot read '{}': {}", path.display(), e))
        })?;

        if !metadata.is_file() {
            return Err(CliError::Io(format!(
                "Path '{}' is not a regular file",
                path.display()
            )));
        }

        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(CliError::Config(format!(
                "File size {} bytes exceeds maximum allowed {} bytes",
                metadata.len(),
                MAX_CONFIG_FILE_SIZE
            )));
        }

        let text = std::fs::read_to_string(path).map_err(|e| {
            CliError::Io(format!("Cannot read '{}': {}", path.display(), e))
        })?;

        let config = Self::from_toml_str(&text)?;
        tracing::info!("Loaded ring configuration from {}", path.display());
        Ok(config)
    }

    /// Resolve the configuration: explicit path, then `STAGERING_CONFIG`,
    /// then the built-in default ring.
    pub fn resolve(path: Option<&Path>) -> Result<Self, CliError> {
        Self::resolve_with(path, std::env::var_os(CONFIG_ENV_VAR))
    }

    /// [`RingConfig::resolve`] with the environment value supplied by the caller.
    pub fn resolve_with(path: Option<&Path>, env_path: Option<OsString>) -> Result<Self, CliError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match env_path {
            Some(env_path) => Self::load(Path::new(&env_path)),
            None => {
                tracing::debug!("No configuration given, using built-in ring");
                Ok(Self::default())
            }
        }
    }

    /// Build the ring described by this configuration.
    ///
    /// An `active` index outside the stage list is a configuration error.
    pub fn into_ring(self) -> Result<StageRing, CliError> {
        let theme = self.theme.apply(Theme::default());
        let mut ring = StageRing::from_stages(self.stages)?.with_theme(theme)?;

        if let Some(title) = self.title {
            ring = ring.with_title(title);
        }

        ring.try_set_active(self.active)
            .map_err(|e| CliError::Config(format!("active: {}", e)))?;

        Ok(ring)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_config_matches_default() {
        let parsed = RingConfig::from_toml_str(STARTER_CONFIG).expect("parse");
        let default = RingConfig::default();

        assert_eq!(parsed.stages, default.stages);
        assert_eq!(parsed.active, 0);
        assert_eq!(
            parsed.title.as_deref(),
            Some(stagering_core::DEFAULT_TITLE)
        );
    }

    #[test]
    fn empty_overrides_keep_base() {
        let theme = ThemeOverrides::default().apply(Theme::default());
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn partial_override_keeps_other_fields() {
        let overrides = ThemeOverrides {
            active: NodeStyleOverrides {
                fill: Some("#ff5722".to_string()),
                ..NodeStyleOverrides::default()
            },
            ..ThemeOverrides::default()
        };
        let theme = overrides.apply(Theme::default());

        assert_eq!(theme.active.fill, "#ff5722");
        assert_eq!(theme.active.marker_size, NodeStyle::active().marker_size);
        assert_eq!(theme.inactive, NodeStyle::inactive());
    }

    #[test]
    fn unknown_field_rejected() {
        let text = r#"
            colour = "red"
            [[stages]]
            name = "a"
            description = "b"
        "#;
        assert!(matches!(
            RingConfig::from_toml_str(text),
            Err(CliError::Config(_))
        ));
    }
}
