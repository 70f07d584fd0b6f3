//! Dashboard rendering using terminal output.

use crate::aggregation::{
    format_amount,
    format_percent,
    DashboardReport,
    MonthlyFinanceSeries,
    PriorityBreakdown,
    TaskStats,
    WeeklyTaskSeries,
};
use crate::models::{AggregatedMetric, Insight, Severity};


// Constants
const GREEN: &str = "\x1b[32m";
const ORANGE: &str = "\x1b[38;5;208m";
const CYAN: &str = "\x1b[36m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";
const BAR_WIDTH: usize = 20;
const CARD_WIDTH: usize = 24;


/// Create a simple text bar for visualization.
fn create_bar(value: f64, max_value: f64, width: usize, color: &str) -> String {
    if max_value <= 0.0 {
        return format!("{}{}{}", DIM, "░".repeat(width), RESET);
    }

    let filled = ((value.max(0.0) / max_value) * width as f64) as usize;
    let filled = filled.min(width);

    format!(
        "{}{}{}{}{}",
        color,
        "█".repeat(filled),
        RESET,
        DIM,
        "░".repeat(width - filled),
    ) + RESET
}


fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => GREEN,
        Severity::Info => CYAN,
        Severity::Warning => YELLOW,
        Severity::Danger => RED,
    }
}


/// Render the complete dashboard.
pub fn render_dashboard(report: &DashboardReport, clear_screen: bool) {
    if clear_screen {
        print!("\x1b[2J\x1b[H"); // Clear screen and move cursor to top
    }

    render_kpi_cards(&report.cards);
    println!();

    render_weekly_tasks(&report.weekly_tasks);
    println!();

    render_monthly_finance(&report.monthly_finance, &report.profit_margins, &report.currency);
    println!();

    render_insights(&report.insights);
    println!();

    println!(
        "{}Generated {}{}{}",
        DIM,
        RESET,
        CYAN,
        report.generated_at.format("%Y-%m-%d %H:%M UTC"),
    );
    println!("{}", RESET);
}


/// Render KPI cards, three per row.
pub fn render_kpi_cards(cards: &[AggregatedMetric]) {
    let border = "─".repeat(CARD_WIDTH - 2);

    for row in cards.chunks(3) {
        let tops: Vec<String> = row.iter().map(|_| format!("┌{border}┐")).collect();
        println!("{}", tops.join("  "));

        let titles: Vec<String> = row
            .iter()
            .map(|c| format!("│{:^w$}│", c.label, w = CARD_WIDTH - 2))
            .collect();
        println!("{}", titles.join("  "));

        let values: Vec<String> = row
            .iter()
            .map(|c| {
                let color = if c.loading { DIM } else { ORANGE };
                format!("│{}{}{:^w$}{}│", BOLD, color, c.value, RESET, w = CARD_WIDTH - 2)
            })
            .collect();
        println!("{}", values.join("  "));

        let changes: Vec<String> = row
            .iter()
            .map(|c| {
                let text = if c.loading {
                    "loading".to_string()
                } else if c.change_percent == 0.0 {
                    String::new()
                } else {
                    format!("{:+.1}%", c.change_percent)
                };
                let color = if c.change_percent < 0.0 { RED } else { GREEN };
                format!("│{}{:^w$}{}│", color, text, RESET, w = CARD_WIDTH - 2)
            })
            .collect();
        println!("{}", changes.join("  "));

        let bottoms: Vec<String> = row.iter().map(|_| format!("└{border}┘")).collect();
        println!("{}", bottoms.join("  "));
    }
}


/// Render task counts and the open-by-priority breakdown.
pub fn render_task_summary(stats: &TaskStats, priorities: &PriorityBreakdown) {
    println!("{}TASKS{}", BOLD, RESET);
    println!("{}", "-".repeat(40));
    println!("  Total:               {:>10}", stats.total);
    println!("  Completed:           {:>10}", stats.completed);
    println!("  In Progress:         {:>10}", stats.in_progress);
    println!("  Pending:             {:>10}", stats.pending);
    println!("  Completion Rate:     {:>10}", format_percent(stats.completion_rate));
    println!();
    println!("{}OPEN BY PRIORITY{}", BOLD, RESET);
    println!("{}", "-".repeat(40));
    println!("  {}Urgent{}               {:>10}", RED, RESET, priorities.urgent);
    println!("  High                 {:>10}", priorities.high);
    println!("  Medium               {:>10}", priorities.medium);
    println!("  Low                  {:>10}", priorities.low);
}


/// Render the planned vs completed chart.
pub fn render_weekly_tasks(series: &WeeklyTaskSeries) {
    if series.weeks.is_empty() {
        println!("{}No task data available{}", DIM, RESET);
        return;
    }

    let max_planned = series.planned.iter().copied().max().unwrap_or(0) as f64;

    println!("┌────────────────────────────────────────────────────────────────────────────┐");
    println!("│ {}Planned vs Completed{}                                                       │", BOLD, RESET);
    println!("├────────────────────────────────────────────────────────────────────────────┤");

    for i in 0..series.weeks.len() {
        let planned = series.planned[i];
        let completed = series.completed[i];
        println!(
            "│ {:8} {:9} {} {}{:>4}{} / {:<4}",
            series.weeks[i],
            series.period_keys[i],
            create_bar(completed as f64, max_planned, BAR_WIDTH, GREEN),
            GREEN,
            completed,
            RESET,
            planned,
        );
    }

    println!("└────────────────────────────────────────────────────────────────────────────┘");
}


/// Render revenue vs expenses with per-month margins.
pub fn render_monthly_finance(series: &MonthlyFinanceSeries, margins: &[f64], currency: &str) {
    if series.is_empty() {
        println!("{}No financial data available{}", DIM, RESET);
        return;
    }

    let max_value = series
        .revenue
        .iter()
        .chain(&series.expenses)
        .copied()
        .fold(0.0, f64::max);

    println!("┌────────────────────────────────────────────────────────────────────────────┐");
    println!("│ {}Revenue vs Expenses{}                                                        │", BOLD, RESET);
    println!("├────────────────────────────────────────────────────────────────────────────┤");

    for i in 0..series.len() {
        let margin = margins.get(i).copied().unwrap_or(0.0);
        println!(
            "│ {:10} {} {}{:>16}{}",
            series.months[i],
            create_bar(series.revenue[i], max_value, BAR_WIDTH, GREEN),
            GREEN,
            format_amount(series.revenue[i], currency),
            RESET,
        );
        println!(
            "│ {:10} {} {}{:>16}{}  {}margin {}{}",
            "",
            create_bar(series.expenses[i], max_value, BAR_WIDTH, RED),
            RED,
            format_amount(series.expenses[i], currency),
            RESET,
            CYAN,
            format_percent(margin),
            RESET,
        );
    }

    println!("└────────────────────────────────────────────────────────────────────────────┘");
}


/// Render expense totals per category.
pub fn render_categories(categories: &[(String, f64)], currency: &str) {
    if categories.is_empty() {
        return;
    }

    let total: f64 = categories.iter().map(|(_, v)| v).sum();
    let max_value = categories.first().map(|(_, v)| *v).unwrap_or(0.0);

    println!("{}EXPENSES BY CATEGORY{}", BOLD, RESET);
    println!("{}", "-".repeat(60));

    for (category, amount) in categories.iter().take(10) {
        let name: String = category.chars().take(20).collect();
        let percentage = if total > 0.0 { amount / total * 100.0 } else { 0.0 };
        println!(
            "  {:20} {} {:>14} {}{:5.1}%{}",
            name,
            create_bar(*amount, max_value, BAR_WIDTH, ORANGE),
            format_amount(*amount, currency),
            CYAN,
            percentage,
            RESET,
        );
    }
}


/// Render insights as a list of tagged messages.
pub fn render_insights(insights: &[Insight]) {
    if insights.is_empty() {
        println!("{}No insights yet{}", DIM, RESET);
        return;
    }

    println!("{}INSIGHTS{}", BOLD, RESET);
    for insight in insights {
        println!(
            "  {}{}[{}]{} {}{}{} {}({}% confidence){}",
            BOLD,
            severity_color(insight.severity),
            insight.severity.as_str().to_uppercase(),
            RESET,
            BOLD,
            insight.title,
            RESET,
            DIM,
            insight.confidence,
            RESET,
        );
        println!("      {}", insight.description);
    }
}
