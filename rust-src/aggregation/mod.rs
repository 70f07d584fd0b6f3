//! Aggregation layer: totals, chart series and the dashboard view-model.

mod error;
mod metrics;
mod report;
mod series;

#[allow(unused_imports)]
pub use error::AnalyticsError;

#[allow(unused_imports)]
pub use metrics::{
    TaskStats,
    FinancialSummary,
    PriorityBreakdown,
    task_stats,
    financial_summary,
    growth_rate,
    priority_breakdown,
    expenses_by_category,
    round1,
};

#[allow(unused_imports)]
pub use series::{
    WeeklyTaskSeries,
    MonthlyFinanceSeries,
    weekly_task_series,
    monthly_finance_series,
    quarterly_finance_series,
    profit_margin_series,
    growth_from_series,
};

#[allow(unused_imports)]
pub use report::{
    DashboardReport,
    ReportInputs,
    ReportOptions,
    format_amount,
    format_percent,
    CARD_REVENUE,
    CARD_EXPENSES,
    CARD_PROFIT,
    CARD_MARGIN,
    CARD_COMPLETION,
};
