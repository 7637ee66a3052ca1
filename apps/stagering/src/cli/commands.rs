//! # CLI Command Implementations
//!
//! Each command builds its ring explicitly from the resolved configuration
//! and renders to a `String` before printing, so the rendering can be tested
//! without capturing stdout.

use crate::config::{RingConfig, STARTER_CONFIG};
use crate::error::CliError;
use stagering_core::StageRing;
use std::path::{Path, PathBuf};

// =============================================================================
// RING LOADING
// =============================================================================

/// Build the ring from configuration, optionally overriding the active stage.
///
/// The override goes through the strict setter: a command-line index that
/// does not name a stage is reported, not ignored.
pub fn load_ring(config: Option<&Path>, active: Option<usize>) -> Result<StageRing, CliError> {
    let mut ring = RingConfig::resolve(config)?.into_ring()?;

    if let Some(index) = active {
        ring.try_set_active(index)?;
    }

    tracing::debug!(
        stages = ring.len(),
        active = ring.active_index(),
        "ring ready"
    );
    Ok(ring)
}

/// Validate the output path: the parent directory must exist.
fn validate_output_path(path: &Path) -> Result<PathBuf, CliError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let canonical_parent = parent.canonicalize().map_err(|e| {
        CliError::Io(format!(
            "Invalid output directory '{}': {}",
            parent.display(),
            e
        ))
    })?;

    let filename = path
        .file_name()
        .ok_or_else(|| CliError::Io("Output path has no filename".to_string()))?;

    Ok(canonical_parent.join(filename))
}

fn to_pretty_json(value: &impl serde::Serialize) -> Result<String, CliError> {
    serde_json::to_string_pretty(value).map_err(|e| CliError::Serialization(e.to_string()))
}

// =============================================================================
// LAYOUT COMMAND
// =============================================================================

/// Render the ring layout as pretty JSON.
pub fn render_layout(ring: &StageRing) -> Result<String, CliError> {
    to_pretty_json(&ring.compute_layout())
}

/// Print the ring layout.
pub fn cmd_layout(config: Option<&Path>, active: Option<usize>) -> Result<(), CliError> {
    let ring = load_ring(config, active)?;
    println!("{}", render_layout(&ring)?);
    Ok(())
}

// =============================================================================
// SHOW COMMAND
// =============================================================================

/// Render a ring summary, as text or JSON.
pub fn render_summary(ring: &StageRing, json_mode: bool, quiet: bool) -> Result<String, CliError> {
    let layout = ring.compute_layout();

    if json_mode {
        let flow: Vec<[&str; 2]> = layout
            .arrows
            .iter()
            .map(|a| {
                [
                    layout.nodes[a.source].label.as_str(),
                    layout.nodes[a.target].label.as_str(),
                ]
            })
            .collect();
        let output = serde_json::json!({
            "title": layout.title,
            "stage_count": layout.nodes.len(),
            "active_index": ring.active_index(),
            "active_stage": layout.annotation.stage,
            "description": layout.annotation.description,
            "flow": flow
        });
        return to_pretty_json(&output);
    }

    let mut out = String::new();
    if !quiet {
        out.push_str(&format!("{}\n", layout.title));
        out.push_str(&format!("{}\n\n", "=".repeat(layout.title.chars().count())));
    }

    let width = layout
        .nodes
        .iter()
        .map(|n| n.label.chars().count())
        .max()
        .unwrap_or(0);

    for arrow in &layout.arrows {
        let node = &layout.nodes[arrow.source];
        let marker = if node.highlight { '*' } else { ' ' };
        out.push_str(&format!(
            "{} [{}] {:<width$} -> {}\n",
            marker,
            node.index,
            node.label,
            layout.nodes[arrow.target].label,
            width = width
        ));
    }

    out.push('\n');
    out.push_str(&format!("Active: {}\n", layout.annotation.stage));
    out.push_str(&format!("  {}\n", layout.annotation.description));

    Ok(out)
}

/// Show a ring summary.
pub fn cmd_show(
    config: Option<&Path>,
    active: Option<usize>,
    json_mode: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let ring = load_ring(config, active)?;
    print!("{}", render_summary(&ring, json_mode, quiet)?);
    if json_mode {
        println!();
    }
    Ok(())
}

// =============================================================================
// CHECK COMMAND
// =============================================================================

/// Render the result of a successful configuration check.
pub fn render_check(ring: &StageRing, json_mode: bool) -> Result<String, CliError> {
    if json_mode {
        let output = serde_json::json!({
            "valid": true,
            "stage_count": ring.len(),
            "active_index": ring.active_index(),
            "active_stage": ring.active_stage().name
        });
        return to_pretty_json(&output);
    }

    Ok(format!(
        "Configuration OK: {} stages, active stage {} ({})",
        ring.len(),
        ring.active_index(),
        ring.active_stage().name
    ))
}

/// Validate the ring configuration.
pub fn cmd_check(config: Option<&Path>, json_mode: bool) -> Result<(), CliError> {
    let ring = load_ring(config, None)?;
    println!("{}", render_check(&ring, json_mode)?);
    Ok(())
}

// =============================================================================
// INIT COMMAND
// =============================================================================

/// Write the starter configuration to `output`.
pub fn cmd_init(output: &Path, force: bool, quiet: bool) -> Result<(), CliError> {
    let target = validate_output_path(output)?;

    if target.exists() && !force {
        return Err(CliError::Io(format!(
            "'{}' already exists. Use --force to overwrite.",
            target.display()
        )));
    }

    std::fs::write(&target, STARTER_CONFIG)
        .map_err(|e| CliError::Io(format!("Cannot write '{}': {}", target.display(), e)))?;

    tracing::info!("Wrote starter configuration to {}", target.display());
    if !quiet {
        println!("Created {}", target.display());
    }
    Ok(())
}
