//! Threshold rules that turn aggregates into advisory insights.
//!
//! Each rule branch carries a fixed confidence value. The free functions
//! evaluate against the default thresholds; [`InsightEngine`] evaluates the
//! same rules against a loaded [`InsightThresholds`].

use serde::{Deserialize, Serialize};

use crate::config::InsightThresholds;
use crate::models::{Insight, Severity};


/// Aggregates the engine can reason about. `None` means the source
/// behind that figure was not available.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightInputs {
    pub growth_rate: Option<f64>,
    pub profit_margin: Option<f64>,
    pub completion_rate: Option<f64>,
}


#[derive(Debug, Clone, Copy, Default)]
pub struct InsightEngine {
    thresholds: InsightThresholds,
}


impl InsightEngine {
    pub fn new(thresholds: InsightThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &InsightThresholds {
        &self.thresholds
    }

    /// Exactly one insight for every growth value.
    pub fn financial(&self, growth_rate: f64) -> Insight {
        if growth_rate >= self.thresholds.strong_growth {
            Insight::new(
                "Positive revenue trend",
                format!("Revenue grew {growth_rate:.1}% over the previous period. Keep investing in what drives sales."),
                85,
                Severity::Success,
            )
        } else if growth_rate > 0.0 {
            Insight::new(
                "Moderate growth",
                format!("Revenue grew {growth_rate:.1}%. There is room to accelerate with targeted marketing."),
                75,
                Severity::Info,
            )
        } else {
            Insight::new(
                "Revenue decline",
                format!("Revenue changed by {growth_rate:.1}%. Review pricing and customer retention."),
                80,
                Severity::Danger,
            )
        }
    }

    /// No insight at all when nothing has been completed.
    pub fn tasks(&self, completion_rate: f64) -> Option<Insight> {
        if completion_rate >= self.thresholds.good_completion {
            Some(Insight::new(
                "Good completion",
                format!("The team has completed {completion_rate:.1}% of its tasks."),
                80,
                Severity::Info,
            ))
        } else if completion_rate > 0.0 {
            Some(Insight::new(
                "Efficiency opportunity",
                format!("Only {completion_rate:.1}% of tasks are done. Consider re-prioritising the backlog."),
                70,
                Severity::Warning,
            ))
        } else {
            None
        }
    }

    pub fn profitability(&self, profit_margin: f64) -> Insight {
        if profit_margin >= self.thresholds.healthy_margin {
            Insight::new(
                "Strong profitability",
                format!("Profit margin is {profit_margin:.1}%, well above target."),
                85,
                Severity::Success,
            )
        } else if profit_margin >= self.thresholds.fair_margin {
            Insight::new(
                "Healthy margin",
                format!("Profit margin is {profit_margin:.1}%. Trimming costs could lift it further."),
                75,
                Severity::Info,
            )
        } else {
            Insight::new(
                "Thin margin",
                format!("Profit margin is {profit_margin:.1}%. Expenses are eating into revenue."),
                70,
                Severity::Warning,
            )
        }
    }

    /// Financial, profitability, then task insights, skipping any whose
    /// input is missing.
    pub fn generate(&self, inputs: &InsightInputs) -> Vec<Insight> {
        let mut insights = Vec::new();

        if let Some(growth) = inputs.growth_rate {
            insights.push(self.financial(growth));
        }
        if let Some(margin) = inputs.profit_margin {
            insights.push(self.profitability(margin));
        }
        if let Some(insight) = inputs.completion_rate.and_then(|rate| self.tasks(rate)) {
            insights.push(insight);
        }

        insights
    }
}


#[allow(dead_code)]
pub fn financial_insights(growth_rate: f64) -> Insight {
    InsightEngine::default().financial(growth_rate)
}


#[allow(dead_code)]
pub fn task_insights(completion_rate: f64) -> Option<Insight> {
    InsightEngine::default().tasks(completion_rate)
}


#[allow(dead_code)]
pub fn profitability_insight(profit_margin: f64) -> Insight {
    InsightEngine::default().profitability(profit_margin)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_financial_thresholds() {
        assert_eq!(financial_insights(18.0).severity, Severity::Success);
        assert_eq!(financial_insights(15.0).severity, Severity::Success);
        assert_eq!(financial_insights(14.9).severity, Severity::Info);
        assert_eq!(financial_insights(0.1).severity, Severity::Info);
        assert_eq!(financial_insights(0.0).severity, Severity::Danger);
        assert_eq!(financial_insights(-5.0).severity, Severity::Danger);
    }

    #[test]
    fn test_financial_confidence_constants() {
        assert_eq!(financial_insights(20.0).confidence, 85);
        assert_eq!(financial_insights(5.0).confidence, 75);
        assert_eq!(financial_insights(-1.0).confidence, 80);
    }

    #[test]
    fn test_task_insights() {
        let good = task_insights(80.0).unwrap();
        assert_eq!(good.severity, Severity::Info);
        assert_eq!(good.title, "Good completion");

        let weak = task_insights(40.0).unwrap();
        assert_eq!(weak.severity, Severity::Warning);
        assert_eq!(weak.confidence, 70);

        assert!(task_insights(0.0).is_none());
    }

    #[test]
    fn test_profitability() {
        assert_eq!(profitability_insight(61.0).severity, Severity::Success);
        assert_eq!(profitability_insight(40.0).severity, Severity::Success);
        assert_eq!(profitability_insight(25.0).severity, Severity::Info);
        assert_eq!(profitability_insight(5.0).severity, Severity::Warning);
        assert_eq!(profitability_insight(-30.0).severity, Severity::Warning);
    }

    #[test]
    fn test_engine_uses_custom_thresholds() {
        let engine = InsightEngine::new(InsightThresholds {
            strong_growth: 30.0,
            ..Default::default()
        });
        assert_eq!(engine.financial(18.0).severity, Severity::Info);
        assert_eq!(financial_insights(18.0).severity, Severity::Success);
    }

    #[test]
    fn test_generate_order_and_skips() {
        let engine = InsightEngine::default();

        let all = engine.generate(&InsightInputs {
            growth_rate: Some(18.0),
            profit_margin: Some(61.0),
            completion_rate: Some(61.5),
        });
        let titles: Vec<_> = all.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Positive revenue trend", "Strong profitability", "Efficiency opportunity"]);

        let tasks_only = engine.generate(&InsightInputs {
            completion_rate: Some(0.0),
            ..Default::default()
        });
        assert!(tasks_only.is_empty());
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(financial_insights(7.5), financial_insights(7.5));
        assert_eq!(task_insights(50.0), task_insights(50.0));
    }
}
