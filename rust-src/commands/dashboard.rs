//! Dashboard command - KPI cards, charts and insights.

use std::path::Path;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use tracing::info;

use super::common::{load_finance_or_fallback, load_tasks_or_fallback, GlobalOptions};
use crate::aggregation::{DashboardReport, ReportInputs, ReportOptions};
use crate::config::DEFAULT_REFRESH_INTERVAL;
use crate::visualization::render_dashboard;


/// Run the dashboard command.
pub fn run(
    opts: &GlobalOptions,
    tasks: Option<&Path>,
    finance: Option<&Path>,
    report_options: &ReportOptions,
    live: bool,
) -> Result<()> {
    if tasks.is_none() && finance.is_none() {
        eprintln!("Nothing to show: pass --tasks and/or --finance.");
        return Ok(());
    }

    if live {
        run_live_dashboard(opts, tasks, finance, report_options)
    } else {
        display_dashboard(opts, tasks, finance, report_options, false)
    }
}


/// Run dashboard with auto-refresh.
fn run_live_dashboard(
    opts: &GlobalOptions,
    tasks: Option<&Path>,
    finance: Option<&Path>,
    report_options: &ReportOptions,
) -> Result<()> {
    println!(
        "Auto-refreshing every {} seconds. Press Ctrl+C to exit.\n",
        DEFAULT_REFRESH_INTERVAL
    );

    loop {
        display_dashboard(opts, tasks, finance, report_options, true)?;
        thread::sleep(Duration::from_secs(DEFAULT_REFRESH_INTERVAL));
    }
}


/// Display the dashboard once.
fn display_dashboard(
    opts: &GlobalOptions,
    tasks: Option<&Path>,
    finance: Option<&Path>,
    report_options: &ReportOptions,
    clear_screen: bool,
) -> Result<()> {
    let report = build_report(opts, tasks, finance, report_options)?;
    render_dashboard(&report, clear_screen);
    Ok(())
}


/// Load sources and derive the dashboard. Sources that fail to load
/// leave their cards in the zero state.
pub fn build_report(
    opts: &GlobalOptions,
    tasks: Option<&Path>,
    finance: Option<&Path>,
    report_options: &ReportOptions,
) -> Result<DashboardReport> {
    let now = opts.now()?;
    let engine = opts.insight_engine()?;

    let task_records = load_tasks_or_fallback(tasks);
    let finance_records = load_finance_or_fallback(finance);

    let inputs = ReportInputs {
        tasks: task_records.as_deref(),
        finance: finance_records.as_deref(),
    };

    let report = DashboardReport::build(inputs, report_options, &engine, now)?;
    info!(
        cards = report.cards.len(),
        insights = report.insights.len(),
        "dashboard refreshed"
    );
    Ok(report)
}
