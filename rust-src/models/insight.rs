//! Derived outputs: advisory insights and KPI cards.

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Warning,
    Danger,
}


impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        }
    }
}


/// A rule-generated advisory message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub title: String,
    pub description: String,
    /// Fixed per rule branch, 0-100.
    pub confidence: u8,
    pub severity: Severity,
}


impl Insight {
    pub fn new(title: &str, description: String, confidence: u8, severity: Severity) -> Self {
        Self {
            title: title.to_string(),
            description,
            confidence: confidence.min(100),
            severity,
        }
    }
}


/// A KPI card value as shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedMetric {
    pub label: String,
    pub value: String,
    pub change_percent: f64,
    pub loading: bool,
}


impl AggregatedMetric {
    pub fn new(label: &str, value: String, change_percent: f64) -> Self {
        Self {
            label: label.to_string(),
            value,
            change_percent,
            loading: false,
        }
    }

    /// Zero-valued card shown until data arrives (or when it fails to).
    pub fn placeholder(label: &str, zero_value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: zero_value.to_string(),
            change_percent: 0.0,
            loading: true,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_is_capped() {
        let insight = Insight::new("x", String::new(), 150, Severity::Info);
        assert_eq!(insight.confidence, 100);
    }

    #[test]
    fn test_placeholder_is_loading_and_zero() {
        let card = AggregatedMetric::placeholder("Revenue", "0 SAR");
        assert!(card.loading);
        assert_eq!(card.value, "0 SAR");
        assert_eq!(card.change_percent, 0.0);
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        let json = serde_json::to_string(&Severity::Danger).unwrap();
        assert_eq!(json, "\"danger\"");
    }
}
