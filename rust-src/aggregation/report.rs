//! Dashboard view-model: KPI cards, series and insights in one place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::AnalyticsError;
use super::metrics::{financial_summary, growth_rate, task_stats, FinancialSummary, TaskStats};
use super::series::{
    growth_from_series,
    monthly_finance_series,
    profit_margin_series,
    weekly_task_series,
    MonthlyFinanceSeries,
    WeeklyTaskSeries,
};
use crate::insights::{InsightEngine, InsightInputs};
use crate::models::{AggregatedMetric, FinancialRecord, Insight, TaskRecord};


pub const CARD_REVENUE: &str = "Total Revenue";
pub const CARD_EXPENSES: &str = "Total Expenses";
pub const CARD_PROFIT: &str = "Net Profit";
pub const CARD_MARGIN: &str = "Profit Margin";
pub const CARD_COMPLETION: &str = "Task Completion";


/// Whatever the data sources produced. `None` means the source failed
/// or was never asked for.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportInputs<'a> {
    pub tasks: Option<&'a [TaskRecord]>,
    pub finance: Option<&'a [FinancialRecord]>,
}


#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub weeks_to_keep: usize,
    pub months_to_keep: usize,
    pub currency: String,
}


/// Everything the dashboard screen shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    pub generated_at: DateTime<Utc>,
    pub currency: String,
    pub cards: Vec<AggregatedMetric>,
    pub task_stats: TaskStats,
    pub financial_summary: FinancialSummary,
    pub growth_rate: f64,
    pub weekly_tasks: WeeklyTaskSeries,
    pub monthly_finance: MonthlyFinanceSeries,
    pub profit_margins: Vec<f64>,
    pub insights: Vec<Insight>,
}


impl DashboardReport {
    /// The zero state shown before any data has loaded.
    pub fn placeholder(currency: &str, now: DateTime<Utc>) -> Self {
        Self {
            generated_at: now,
            currency: currency.to_string(),
            cards: vec![
                AggregatedMetric::placeholder(CARD_REVENUE, &format_amount(0.0, currency)),
                AggregatedMetric::placeholder(CARD_EXPENSES, &format_amount(0.0, currency)),
                AggregatedMetric::placeholder(CARD_PROFIT, &format_amount(0.0, currency)),
                AggregatedMetric::placeholder(CARD_MARGIN, &format_percent(0.0)),
                AggregatedMetric::placeholder(CARD_COMPLETION, &format_percent(0.0)),
            ],
            task_stats: TaskStats::default(),
            financial_summary: FinancialSummary::default(),
            growth_rate: 0.0,
            weekly_tasks: WeeklyTaskSeries::default(),
            monthly_finance: MonthlyFinanceSeries::default(),
            profit_margins: Vec::new(),
            insights: Vec::new(),
        }
    }

    /// Derive the dashboard from loaded records.
    ///
    /// Cards backed by a missing source keep their placeholder values.
    pub fn build(
        inputs: ReportInputs<'_>,
        options: &ReportOptions,
        engine: &InsightEngine,
        now: DateTime<Utc>,
    ) -> Result<Self, AnalyticsError> {
        let mut report = Self::placeholder(&options.currency, now);
        let mut insight_inputs = InsightInputs::default();

        if let Some(records) = inputs.finance {
            let summary = financial_summary(records);
            let monthly = monthly_finance_series(records).keep_last(options.months_to_keep);
            let margins = profit_margin_series(&monthly.revenue, &monthly.expenses)?;
            let growth = growth_from_series(&monthly);
            let expense_growth = match monthly.expenses.as_slice() {
                [.., previous, current] => growth_rate(*current, *previous),
                _ => 0.0,
            };

            report.set_card(
                CARD_REVENUE,
                format_amount(summary.total_revenue, &options.currency),
                growth,
            );
            report.set_card(
                CARD_EXPENSES,
                format_amount(summary.total_expenses, &options.currency),
                expense_growth,
            );
            report.set_card(CARD_PROFIT, format_amount(summary.profit, &options.currency), 0.0);
            report.set_card(CARD_MARGIN, format_percent(summary.profit_margin), 0.0);

            // A single period has nothing to grow from
            if monthly.len() >= 2 {
                insight_inputs.growth_rate = Some(growth);
            }
            insight_inputs.profit_margin = Some(summary.profit_margin);

            report.growth_rate = growth;
            report.financial_summary = summary;
            report.monthly_finance = monthly;
            report.profit_margins = margins;
        }

        if let Some(tasks) = inputs.tasks {
            let stats = task_stats(tasks);
            report.set_card(CARD_COMPLETION, format_percent(stats.completion_rate), 0.0);
            insight_inputs.completion_rate = Some(stats.completion_rate);
            report.weekly_tasks = weekly_task_series(tasks, options.weeks_to_keep, now);
            report.task_stats = stats;
        }

        report.insights = engine.generate(&insight_inputs);
        Ok(report)
    }

    #[allow(dead_code)]
    pub fn card(&self, label: &str) -> Option<&AggregatedMetric> {
        self.cards.iter().find(|c| c.label == label)
    }

    fn set_card(&mut self, label: &str, value: String, change_percent: f64) {
        if let Some(card) = self.cards.iter_mut().find(|c| c.label == label) {
            *card = AggregatedMetric::new(label, value, change_percent);
        }
    }
}


/// Format a currency amount rounded to whole units, e.g. `45,000 SAR`.
pub fn format_amount(value: f64, currency: &str) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let chars: Vec<char> = digits.chars().collect();

    let mut result = String::new();
    if rounded < 0 {
        result.push('-');
    }
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    format!("{result} {currency}")
}


/// Format a percentage with one decimal, dropping a trailing `.0`.
pub fn format_percent(value: f64) -> String {
    let formatted = format!("{value:.1}");
    let trimmed = formatted.strip_suffix(".0").unwrap_or(&formatted);
    // "-0" can come out of tiny negative values
    if trimmed == "-0" {
        return "0%".to_string();
    }
    format!("{trimmed}%")
}
