//! Export command - write the dashboard report as JSON.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use super::common::GlobalOptions;
use super::dashboard::build_report;
use crate::aggregation::ReportOptions;
use crate::config::get_default_export_path;


/// Run the export command. Returns the path written.
pub fn run(
    opts: &GlobalOptions,
    tasks: Option<&Path>,
    finance: Option<&Path>,
    report_options: &ReportOptions,
    output: Option<&str>,
) -> Result<PathBuf> {
    let output_path = match output {
        Some(path) => PathBuf::from(path),
        None => get_default_export_path(opts.data_dir.as_deref()),
    };

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let report = build_report(opts, tasks, finance, report_options)?;
    let json = serde_json::to_string_pretty(&report)?;

    std::fs::write(&output_path, json)
        .with_context(|| format!("Failed to write report: {}", output_path.display()))?;

    info!(path = %output_path.display(), "report exported");
    println!("Report exported to {}", output_path.display());
    Ok(output_path)
}
