//! Rule-based advisory insights.

mod rules;

#[allow(unused_imports)]
pub use rules::{
    financial_insights,
    task_insights,
    profitability_insight,
    InsightEngine,
    InsightInputs,
};
