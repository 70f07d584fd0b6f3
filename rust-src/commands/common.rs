//! Shared plumbing for commands: options, loading with fallback.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::config::{get_thresholds_path, load_thresholds};
use crate::data::{parse_finance_file, parse_task_file};
use crate::insights::InsightEngine;
use crate::models::{FinancialRecord, TaskRecord};
use crate::period::parse_timestamp;


/// Options every command receives from the top-level CLI.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    pub data_dir: Option<String>,
    pub currency: String,
    pub as_of: Option<String>,
}


impl GlobalOptions {
    /// The reference "now" for this run: `--as-of` or the wall clock.
    pub fn now(&self) -> Result<DateTime<Utc>> {
        match &self.as_of {
            Some(raw) => parse_timestamp(raw)
                .with_context(|| format!("Invalid --as-of date: {raw}")),
            None => Ok(Utc::now()),
        }
    }

    pub fn thresholds_path(&self) -> PathBuf {
        get_thresholds_path(self.data_dir.as_deref())
    }

    /// Build the insight engine from the thresholds file (or defaults).
    pub fn insight_engine(&self) -> Result<InsightEngine> {
        let path = self.thresholds_path();
        let engine = InsightEngine::new(load_thresholds(&path)?);
        info!(path = %path.display(), thresholds = ?engine.thresholds(), "loaded insight thresholds");
        Ok(engine)
    }
}


/// Load tasks, logging and returning `None` if the source is unusable.
pub fn load_tasks_or_fallback(path: Option<&Path>) -> Option<Vec<TaskRecord>> {
    let path = path?;
    match parse_task_file(path) {
        Ok(records) => Some(records),
        Err(e) => {
            warn!("Falling back to empty task metrics: {e:#}");
            None
        }
    }
}


/// Load financial records, logging and returning `None` on failure.
pub fn load_finance_or_fallback(path: Option<&Path>) -> Option<Vec<FinancialRecord>> {
    let path = path?;
    match parse_finance_file(path) {
        Ok(records) => Some(records),
        Err(e) => {
            warn!("Falling back to empty financial metrics: {e:#}");
            None
        }
    }
}
