//! Remove subcommands.

use std::fs;
use std::io::{self, Write};

use anyhow::{Context, Result};

use super::common::GlobalOptions;


/// Remove the thresholds file, keeping a backup.
pub fn thresholds(opts: &GlobalOptions, force: bool) -> Result<()> {
    let path = opts.thresholds_path();

    if !path.exists() {
        println!("\x1b[33mNo thresholds file found at {}\x1b[0m", path.display());
        return Ok(());
    }

    println!("\x1b[1m\x1b[36mRemoving insight thresholds\x1b[0m\n");
    println!("File: {}", path.display());

    if !force {
        println!("\n\x1b[33mInsights will fall back to the built-in thresholds.\x1b[0m\n");

        print!("Type 'delete' to confirm: ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if input.trim().to_lowercase() != "delete" {
            println!("\x1b[33mCancelled\x1b[0m");
            return Ok(());
        }
    }

    // Create backup before deletion
    let backup_path = path.with_extension("json.bak");
    fs::copy(&path, &backup_path).with_context(|| {
        format!("Failed to back up {} to {}", path.display(), backup_path.display())
    })?;
    println!("\n\x1b[2mBackup created: {}\x1b[0m", backup_path.display());

    fs::remove_file(&path)
        .with_context(|| format!("Failed to remove {}", path.display()))?;

    println!("\x1b[32m+ Thresholds removed\x1b[0m");
    println!("\x1b[2mTo restore: pulse restore thresholds\x1b[0m");

    Ok(())
}
