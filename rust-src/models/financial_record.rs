//! Revenue and expense entries from the finance endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FinancialKind {
    Revenue,
    Expense,
}


impl FinancialKind {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "revenue" | "income" => Some(FinancialKind::Revenue),
            "expense" | "expenses" => Some(FinancialKind::Expense),
            _ => None,
        }
    }
}


/// A single financial movement.
///
/// `amount` is a non-negative magnitude; the sign comes from `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: FinancialKind,
    pub amount: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}


impl FinancialRecord {
    /// Amount usable in sums (0 for negative or non-finite values).
    pub fn effective_amount(&self) -> f64 {
        if self.amount.is_finite() && self.amount > 0.0 {
            self.amount
        } else {
            0.0
        }
    }

    pub fn is_revenue(&self) -> bool {
        self.kind == FinancialKind::Revenue
    }

    pub fn is_expense(&self) -> bool {
        self.kind == FinancialKind::Expense
    }
}
