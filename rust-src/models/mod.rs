//! Record and output models for the analytics layer.

mod financial_record;
mod insight;
mod task_record;

pub use financial_record::{FinancialKind, FinancialRecord};
pub use insight::{AggregatedMetric, Insight, Severity};
pub use task_record::{TaskPriority, TaskRecord, TaskStatus};
