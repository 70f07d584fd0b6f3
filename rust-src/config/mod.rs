//! Configuration and settings for startup-pulse.

mod settings;
mod thresholds;

#[allow(unused_imports)]
pub use settings::{
    get_data_dir,
    get_thresholds_path,
    get_default_export_path,
    DEFAULT_WEEKS_TO_KEEP,
    DEFAULT_MONTHS_TO_KEEP,
    DEFAULT_CURRENCY,
    DEFAULT_REFRESH_INTERVAL,
};
#[allow(unused_imports)]
pub use thresholds::{load_thresholds, ConfigError, InsightThresholds};
