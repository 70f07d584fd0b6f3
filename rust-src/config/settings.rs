//! Application settings and path constants.

use std::path::PathBuf;


/// Weeks shown in the planned-vs-completed chart.
pub const DEFAULT_WEEKS_TO_KEEP: usize = 4;

/// Months shown in the revenue-vs-expenses chart.
pub const DEFAULT_MONTHS_TO_KEEP: usize = 6;

/// Currency label used when formatting amounts.
pub const DEFAULT_CURRENCY: &str = "SAR";

/// Dashboard refresh interval in live mode (seconds).
pub const DEFAULT_REFRESH_INTERVAL: u64 = 5;


/// Get the data directory, honouring an explicit override.
pub fn get_data_dir(override_dir: Option<&str>) -> PathBuf {
    match override_dir {
        Some(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
        _ => dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".startup-pulse"),
    }
}


/// Get the thresholds file path.
pub fn get_thresholds_path(override_dir: Option<&str>) -> PathBuf {
    get_data_dir(override_dir).join("thresholds.json")
}


/// Default path for exported reports.
pub fn get_default_export_path(override_dir: Option<&str>) -> PathBuf {
    get_data_dir(override_dir).join("report.json")
}
