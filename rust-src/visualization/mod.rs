//! Visualization layer for dashboards and charts.

mod dashboard;

#[allow(unused_imports)]
pub use dashboard::{
    render_dashboard,
    render_kpi_cards,
    render_task_summary,
    render_weekly_tasks,
    render_monthly_finance,
    render_categories,
    render_insights,
};
