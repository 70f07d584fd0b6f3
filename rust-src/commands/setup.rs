//! Setup subcommands.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use super::common::GlobalOptions;
use crate::config::InsightThresholds;


/// Write the default thresholds file so it can be edited.
pub fn thresholds(opts: &GlobalOptions, force: bool) -> Result<PathBuf> {
    let path = opts.thresholds_path();

    if path.exists() && !force {
        println!(
            "\x1b[33m! {} already exists, skipping (use --force to overwrite)\x1b[0m",
            path.display()
        );
        return Ok(path);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(&InsightThresholds::default())?;
    fs::write(&path, json)
        .with_context(|| format!("Failed to write thresholds: {}", path.display()))?;

    info!(path = %path.display(), "thresholds written");
    println!("\x1b[32m+ Created {}\x1b[0m", path.display());
    println!("\x1b[2mEdit the values to tune when insights fire.\x1b[0m");

    Ok(path)
}
