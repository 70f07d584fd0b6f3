//! Finance command - financial overview.

use std::path::Path;

use anyhow::Result;

use super::common::GlobalOptions;
use crate::aggregation::{
    expenses_by_category,
    financial_summary,
    format_amount,
    format_percent,
    growth_from_series,
    monthly_finance_series,
    profit_margin_series,
    quarterly_finance_series,
};
use crate::data::parse_finance_file;
use crate::visualization::{render_categories, render_insights, render_monthly_finance};


/// Run the finance command.
pub fn run(opts: &GlobalOptions, file: &Path, months: usize, quarterly: bool) -> Result<()> {
    let engine = opts.insight_engine()?;
    let records = parse_finance_file(file)?;

    if records.is_empty() {
        println!("No financial records found in {}.", file.display());
        return Ok(());
    }

    let summary = financial_summary(&records);
    let series = if quarterly {
        quarterly_finance_series(&records)
    } else {
        monthly_finance_series(&records).keep_last(months)
    };
    // Growth needs a previous period to compare against
    let growth = (series.len() >= 2).then(|| growth_from_series(&series));
    let growth_label = if quarterly { "Growth (QoQ):" } else { "Growth (MoM):" };

    println!("SUMMARY");
    println!("{}", "-".repeat(40));
    println!("  Total Revenue:       {:>18}", format_amount(summary.total_revenue, &opts.currency));
    println!("  Total Expenses:      {:>18}", format_amount(summary.total_expenses, &opts.currency));
    println!("  Net Profit:          {:>18}", format_amount(summary.profit, &opts.currency));
    println!("  Profit Margin:       {:>18}", format_percent(summary.profit_margin));
    println!(
        "  {:<21}{:>18}",
        growth_label,
        growth.map(format_percent).unwrap_or_else(|| "n/a".to_string())
    );
    println!();

    let margins = profit_margin_series(&series.revenue, &series.expenses)?;
    render_monthly_finance(&series, &margins, &opts.currency);
    println!();

    render_categories(&expenses_by_category(&records), &opts.currency);
    println!();

    let mut insights = Vec::new();
    if let Some(growth) = growth {
        insights.push(engine.financial(growth));
    }
    insights.push(engine.profitability(summary.profit_margin));
    render_insights(&insights);

    Ok(())
}
