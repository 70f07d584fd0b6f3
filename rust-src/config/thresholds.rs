//! Insight rule thresholds.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;


/// Errors loading or validating the thresholds file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read thresholds file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed thresholds file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Threshold `{0}` must be a finite number")]
    NotFinite(&'static str),

    #[error("Threshold `{name}` must be above zero, got {value}")]
    NotPositive { name: &'static str, value: f64 },

    #[error("healthy_margin ({healthy}) must not be below fair_margin ({fair})")]
    MarginOrder { healthy: f64, fair: f64 },
}


/// Cut-off values used by the insight rules, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightThresholds {
    /// Growth at or above this is a positive trend.
    pub strong_growth: f64,
    /// Completion rate at or above this is good.
    pub good_completion: f64,
    pub healthy_margin: f64,
    pub fair_margin: f64,
}


impl Default for InsightThresholds {
    fn default() -> Self {
        Self {
            strong_growth: 15.0,
            good_completion: 75.0,
            healthy_margin: 40.0,
            fair_margin: 20.0,
        }
    }
}


impl InsightThresholds {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("strong_growth", self.strong_growth),
            ("good_completion", self.good_completion),
            ("healthy_margin", self.healthy_margin),
            ("fair_margin", self.fair_margin),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite(name));
            }
        }

        // Zero growth is always a decline and zero completion never
        // produces an insight, whatever the file says.
        for (name, value) in [("strong_growth", self.strong_growth), ("good_completion", self.good_completion)] {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { name, value });
            }
        }

        if self.healthy_margin < self.fair_margin {
            return Err(ConfigError::MarginOrder {
                healthy: self.healthy_margin,
                fair: self.fair_margin,
            });
        }

        Ok(())
    }
}


/// Load thresholds from a JSON file, falling back to defaults when the
/// file does not exist. Fields missing from the file keep their defaults.
pub fn load_thresholds(path: &Path) -> Result<InsightThresholds, ConfigError> {
    if !path.exists() {
        return Ok(InsightThresholds::default());
    }

    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let thresholds: InsightThresholds =
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;

    thresholds.validate()?;
    Ok(thresholds)
}


#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let t = InsightThresholds::default();
        assert_eq!(t.strong_growth, 15.0);
        assert_eq!(t.good_completion, 75.0);
        assert_eq!(t.healthy_margin, 40.0);
        assert_eq!(t.fair_margin, 20.0);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let tmp_dir = TempDir::new().unwrap();
        let t = load_thresholds(&tmp_dir.path().join("nope.json")).unwrap();
        assert_eq!(t, InsightThresholds::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let tmp_dir = TempDir::new().unwrap();
        let path = tmp_dir.path().join("thresholds.json");
        std::fs::write(&path, r#"{"strong_growth": 25}"#).unwrap();

        let t = load_thresholds(&path).unwrap();
        assert_eq!(t.strong_growth, 25.0);
        assert_eq!(t.good_completion, 75.0);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let tmp_dir = TempDir::new().unwrap();
        let path = tmp_dir.path().join("thresholds.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(load_thresholds(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_non_positive_cutoffs_are_rejected() {
        let tmp_dir = TempDir::new().unwrap();
        let path = tmp_dir.path().join("thresholds.json");
        std::fs::write(&path, r#"{"strong_growth": 0, "good_completion": 0}"#).unwrap();

        assert!(matches!(
            load_thresholds(&path),
            Err(ConfigError::NotPositive { name: "strong_growth", .. })
        ));

        let t = InsightThresholds {
            good_completion: -5.0,
            ..Default::default()
        };
        assert!(matches!(
            t.validate(),
            Err(ConfigError::NotPositive { name: "good_completion", .. })
        ));
    }

    #[test]
    fn test_margin_order_is_validated() {
        let t = InsightThresholds {
            healthy_margin: 10.0,
            ..Default::default()
        };
        assert!(matches!(t.validate(), Err(ConfigError::MarginOrder { .. })));
    }
}
