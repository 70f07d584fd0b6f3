//! Restore subcommands.

use std::fs;

use anyhow::{Context, Result};

use super::common::GlobalOptions;
use crate::config::load_thresholds;


/// Restore the thresholds file from its backup.
pub fn thresholds(opts: &GlobalOptions) -> Result<()> {
    let path = opts.thresholds_path();
    let backup_path = path.with_extension("json.bak");

    println!("\x1b[1m\x1b[36mRestoring insight thresholds\x1b[0m\n");

    if !backup_path.exists() {
        println!("\x1b[31mNo backup found at {}\x1b[0m", backup_path.display());
        println!("\x1b[2mBackups are created when you run 'pulse remove thresholds'.\x1b[0m");
        return Ok(());
    }

    // Refuse to restore something that wouldn't load
    load_thresholds(&backup_path)?;

    if path.exists() {
        println!("\x1b[33mWarning: Current thresholds will be overwritten.\x1b[0m");
    }

    fs::copy(&backup_path, &path).with_context(|| {
        format!("Failed to restore {} from {}", path.display(), backup_path.display())
    })?;

    println!("\x1b[32m+ Thresholds restored from backup\x1b[0m");
    println!("File: {}", path.display());

    Ok(())
}
