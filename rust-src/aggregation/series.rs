//! Chart-ready series grouped by week, month and quarter.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use super::error::AnalyticsError;
use super::metrics::growth_rate;
use crate::models::{FinancialRecord, TaskRecord};
use crate::period::{month_key, month_name, quarter_key, week_key};


/// Planned vs completed tasks per ISO week.
///
/// `weeks` holds positional labels ("Week 1".."Week N"), not calendar
/// weeks; `period_keys` keeps the real bucket keys alongside.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyTaskSeries {
    pub period_keys: Vec<String>,
    pub weeks: Vec<String>,
    pub planned: Vec<u32>,
    pub completed: Vec<u32>,
}


/// Revenue vs expenses per calendar period (month or quarter).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyFinanceSeries {
    pub period_keys: Vec<String>,
    pub months: Vec<String>,
    pub revenue: Vec<f64>,
    pub expenses: Vec<f64>,
}


impl MonthlyFinanceSeries {
    /// Keep only the most recent `n` periods.
    pub fn keep_last(mut self, n: usize) -> Self {
        let skip = self.period_keys.len().saturating_sub(n);
        self.period_keys.drain(..skip);
        self.months.drain(..skip);
        self.revenue.drain(..skip);
        self.expenses.drain(..skip);
        self
    }

    pub fn len(&self) -> usize {
        self.period_keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.period_keys.is_empty()
    }
}


/// Bucket tasks by the ISO week of their due date and keep the last
/// `weeks_to_keep` weeks.
///
/// Tasks without a due date fall into the week of `now`.
pub fn weekly_task_series(
    tasks: &[TaskRecord],
    weeks_to_keep: usize,
    now: DateTime<Utc>,
) -> WeeklyTaskSeries {
    // BTreeMap keeps buckets in ascending key order
    let mut buckets: BTreeMap<String, (u32, u32)> = BTreeMap::new();

    for task in tasks {
        let key = week_key(&task.due_date.unwrap_or(now));
        let bucket = buckets.entry(key).or_insert((0, 0));
        bucket.0 += 1;
        if task.is_done() {
            bucket.1 += 1;
        }
    }

    let skip = buckets.len().saturating_sub(weeks_to_keep);
    let mut series = WeeklyTaskSeries::default();

    for (i, (key, (planned, completed))) in buckets.into_iter().skip(skip).enumerate() {
        series.period_keys.push(key);
        series.weeks.push(format!("Week {}", i + 1));
        series.planned.push(planned);
        series.completed.push(completed);
    }

    series
}


/// Sum revenue and expenses per calendar month.
///
/// Records without a date can't be placed and are left out.
pub fn monthly_finance_series(records: &[FinancialRecord]) -> MonthlyFinanceSeries {
    build_finance_series(records, |date| {
        (month_key(date), month_name(date.month()).unwrap_or_default().to_string())
    })
}


/// Sum revenue and expenses per calendar quarter.
pub fn quarterly_finance_series(records: &[FinancialRecord]) -> MonthlyFinanceSeries {
    build_finance_series(records, |date| {
        let key = quarter_key(date);
        let label = format!("Q{} {}", (date.month() - 1) / 3 + 1, date.year());
        (key, label)
    })
}


fn build_finance_series<F>(records: &[FinancialRecord], bucket_of: F) -> MonthlyFinanceSeries
where
    F: Fn(&DateTime<Utc>) -> (String, String),
{
    let mut buckets: BTreeMap<String, (String, f64, f64)> = BTreeMap::new();

    for record in records {
        let Some(date) = &record.date else {
            continue;
        };
        let (key, label) = bucket_of(date);
        let bucket = buckets.entry(key).or_insert((label, 0.0, 0.0));
        if record.is_revenue() {
            bucket.1 += record.effective_amount();
        } else {
            bucket.2 += record.effective_amount();
        }
    }

    let mut series = MonthlyFinanceSeries::default();
    for (key, (label, revenue, expenses)) in buckets {
        series.period_keys.push(key);
        series.months.push(label);
        series.revenue.push(revenue);
        series.expenses.push(expenses);
    }

    series
}


/// Pointwise profit margin in percent (0 where revenue is not positive).
pub fn profit_margin_series(revenue: &[f64], expenses: &[f64]) -> Result<Vec<f64>, AnalyticsError> {
    if revenue.len() != expenses.len() {
        return Err(AnalyticsError::LengthMismatch {
            revenue: revenue.len(),
            expenses: expenses.len(),
        });
    }

    Ok(revenue
        .iter()
        .zip(expenses)
        .map(|(r, e)| if *r > 0.0 { (r - e) / r * 100.0 } else { 0.0 })
        .collect())
}


/// Revenue growth of the latest period over the one before it.
pub fn growth_from_series(series: &MonthlyFinanceSeries) -> f64 {
    match series.revenue.as_slice() {
        [.., previous, current] => growth_rate(*current, *previous),
        _ => 0.0,
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FinancialKind, TaskPriority, TaskStatus};
    use chrono::{Duration, TimeZone};
    use proptest::prelude::*;

    fn now() -> DateTime<Utc> {
        // Wednesday of 2024-W11
        Utc.with_ymd_and_hms(2024, 3, 13, 9, 0, 0).unwrap()
    }

    fn task(status: TaskStatus, due: Option<DateTime<Utc>>) -> TaskRecord {
        TaskRecord {
            id: "t".to_string(),
            title: "task".to_string(),
            status,
            priority: TaskPriority::Medium,
            due_date: due,
            created_at: None,
        }
    }

    fn money(kind: FinancialKind, amount: f64, y: i32, m: u32) -> FinancialRecord {
        FinancialRecord {
            id: "f".to_string(),
            kind,
            amount,
            category: "ops".to_string(),
            date: Some(Utc.with_ymd_and_hms(y, m, 10, 0, 0, 0).unwrap()),
        }
    }

    #[test]
    fn test_weekly_series_groups_and_relabels() {
        let tasks = vec![
            task(TaskStatus::Done, Some(now() - Duration::weeks(1))),
            task(TaskStatus::Todo, Some(now() - Duration::weeks(1))),
            task(TaskStatus::Done, Some(now())),
            task(TaskStatus::InProgress, None),
        ];
        let series = weekly_task_series(&tasks, 4, now());

        assert_eq!(series.period_keys, vec!["2024-W10", "2024-W11"]);
        assert_eq!(series.weeks, vec!["Week 1", "Week 2"]);
        assert_eq!(series.planned, vec![2, 2]);
        assert_eq!(series.completed, vec![1, 1]);
    }

    #[test]
    fn test_weekly_series_keeps_most_recent_weeks() {
        let tasks: Vec<_> = (0..6)
            .map(|w| task(TaskStatus::Done, Some(now() - Duration::weeks(w))))
            .collect();
        let series = weekly_task_series(&tasks, 4, now());

        assert_eq!(series.weeks.len(), 4);
        assert_eq!(series.period_keys.first().map(String::as_str), Some("2024-W08"));
        assert_eq!(series.period_keys.last().map(String::as_str), Some("2024-W11"));
        assert_eq!(series.weeks.last().map(String::as_str), Some("Week 4"));
    }

    #[test]
    fn test_weekly_series_empty() {
        let series = weekly_task_series(&[], 4, now());
        assert!(series.weeks.is_empty());
        assert!(series.planned.is_empty());
    }

    #[test]
    fn test_monthly_series_sorted_with_names() {
        let records = vec![
            money(FinancialKind::Revenue, 500.0, 2024, 3),
            money(FinancialKind::Expense, 200.0, 2024, 1),
            money(FinancialKind::Revenue, 1000.0, 2024, 1),
            money(FinancialKind::Expense, 100.0, 2024, 3),
        ];
        let series = monthly_finance_series(&records);

        assert_eq!(series.period_keys, vec!["2024-01", "2024-03"]);
        assert_eq!(series.months, vec!["January", "March"]);
        assert_eq!(series.revenue, vec![1000.0, 500.0]);
        assert_eq!(series.expenses, vec![200.0, 100.0]);
    }

    #[test]
    fn test_monthly_series_skips_undated() {
        let mut undated = money(FinancialKind::Revenue, 10.0, 2024, 1);
        undated.date = None;
        assert!(monthly_finance_series(&[undated]).is_empty());
    }

    #[test]
    fn test_keep_last() {
        let records: Vec<_> = (1..=9)
            .map(|m| money(FinancialKind::Revenue, m as f64, 2024, m))
            .collect();
        let series = monthly_finance_series(&records).keep_last(6);

        assert_eq!(series.len(), 6);
        assert_eq!(series.months.first().map(String::as_str), Some("April"));
        assert_eq!(series.revenue.last(), Some(&9.0));
    }

    #[test]
    fn test_quarterly_series() {
        let records = vec![
            money(FinancialKind::Revenue, 100.0, 2024, 1),
            money(FinancialKind::Revenue, 100.0, 2024, 2),
            money(FinancialKind::Expense, 40.0, 2024, 5),
        ];
        let series = quarterly_finance_series(&records);

        assert_eq!(series.period_keys, vec!["2024-Q1", "2024-Q2"]);
        assert_eq!(series.months, vec!["Q1 2024", "Q2 2024"]);
        assert_eq!(series.revenue, vec![200.0, 0.0]);
        assert_eq!(series.expenses, vec![0.0, 40.0]);
    }

    #[test]
    fn test_profit_margin_series() {
        let margins = profit_margin_series(&[100.0, 0.0, 200.0], &[40.0, 10.0, 250.0]).unwrap();
        assert_eq!(margins, vec![60.0, 0.0, -25.0]);
    }

    #[test]
    fn test_profit_margin_series_length_mismatch() {
        let err = profit_margin_series(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert_eq!(err, AnalyticsError::LengthMismatch { revenue: 2, expenses: 1 });
    }

    #[test]
    fn test_growth_from_series() {
        let records = vec![
            money(FinancialKind::Revenue, 800.0, 2024, 1),
            money(FinancialKind::Revenue, 1000.0, 2024, 2),
        ];
        assert_eq!(growth_from_series(&monthly_finance_series(&records)), 20.0);
        assert_eq!(growth_from_series(&MonthlyFinanceSeries::default()), 0.0);
    }

    proptest! {
        #[test]
        fn weekly_series_shape(
            offsets in proptest::collection::vec((0i64..120, any::<bool>()), 0..80),
            keep in 1usize..10,
        ) {
            let tasks: Vec<_> = offsets
                .iter()
                .map(|(days, done)| {
                    let status = if *done { TaskStatus::Done } else { TaskStatus::Todo };
                    task(status, Some(now() - Duration::days(*days)))
                })
                .collect();

            let series = weekly_task_series(&tasks, keep, now());
            prop_assert!(series.weeks.len() <= keep);
            prop_assert_eq!(series.weeks.len(), series.planned.len());
            prop_assert_eq!(series.weeks.len(), series.completed.len());
            prop_assert_eq!(series.weeks.len(), series.period_keys.len());
            for (planned, completed) in series.planned.iter().zip(&series.completed) {
                prop_assert!(completed <= planned);
            }
            prop_assert_eq!(weekly_task_series(&tasks, keep, now()), series);
        }
    }
}
