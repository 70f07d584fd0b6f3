//! Task and financial totals.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{FinancialRecord, TaskPriority, TaskRecord};


/// Task counts for the board, plus the completion rate in percent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStats {
    pub total: u32,
    pub completed: u32,
    pub in_progress: u32,
    pub pending: u32,
    pub completion_rate: f64,
}


/// Revenue/expense totals for a set of financial records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    pub total_revenue: f64,
    pub total_expenses: f64,
    pub profit: f64,
    pub profit_margin: f64,
}


/// Open (not done) tasks per priority.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityBreakdown {
    pub low: u32,
    pub medium: u32,
    pub high: u32,
    pub urgent: u32,
}


/// Round to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}


/// Count tasks by state.
///
/// Review counts as in progress; todo and unrecognised statuses count as
/// pending, so the three buckets always add up to `total`.
pub fn task_stats(tasks: &[TaskRecord]) -> TaskStats {
    let mut stats = TaskStats::default();

    for task in tasks {
        stats.total += 1;
        if task.is_done() {
            stats.completed += 1;
        } else if task.is_in_progress() {
            stats.in_progress += 1;
        } else {
            stats.pending += 1;
        }
    }

    stats.completion_rate = if stats.total > 0 {
        round1(stats.completed as f64 / stats.total as f64 * 100.0)
    } else {
        0.0
    };

    stats
}


/// Sum revenue and expenses and derive profit and margin.
pub fn financial_summary(records: &[FinancialRecord]) -> FinancialSummary {
    let mut total_revenue = 0.0;
    let mut total_expenses = 0.0;

    for record in records {
        if record.is_revenue() {
            total_revenue += record.effective_amount();
        } else {
            total_expenses += record.effective_amount();
        }
    }

    let profit = total_revenue - total_expenses;
    let profit_margin = if total_revenue > 0.0 {
        profit / total_revenue * 100.0
    } else {
        0.0
    };

    FinancialSummary {
        total_revenue,
        total_expenses,
        profit,
        profit_margin,
    }
}


/// Percent change from `previous` to `current`, measured against `current`.
///
/// Returns 0 when `current` is not positive. The result is not clamped.
pub fn growth_rate(current: f64, previous: f64) -> f64 {
    if current > 0.0 {
        (current - previous) / current * 100.0
    } else {
        0.0
    }
}


/// Count open tasks per priority.
pub fn priority_breakdown(tasks: &[TaskRecord]) -> PriorityBreakdown {
    let mut breakdown = PriorityBreakdown::default();

    for task in tasks.iter().filter(|t| !t.is_done()) {
        match task.priority {
            TaskPriority::Low => breakdown.low += 1,
            TaskPriority::Medium => breakdown.medium += 1,
            TaskPriority::High => breakdown.high += 1,
            TaskPriority::Urgent => breakdown.urgent += 1,
        }
    }

    breakdown
}


/// Expense totals per category, largest first.
///
/// Ties are broken by category name so the order is stable.
pub fn expenses_by_category(records: &[FinancialRecord]) -> Vec<(String, f64)> {
    let mut totals: HashMap<String, f64> = HashMap::new();

    for record in records.iter().filter(|r| r.is_expense()) {
        let category = if record.category.trim().is_empty() {
            "uncategorized".to_string()
        } else {
            record.category.clone()
        };
        *totals.entry(category).or_insert(0.0) += record.effective_amount();
    }

    let mut sorted: Vec<_> = totals.into_iter().collect();
    sorted.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    sorted
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FinancialKind, TaskStatus};
    use proptest::prelude::*;

    fn task(status: TaskStatus, priority: TaskPriority) -> TaskRecord {
        TaskRecord {
            id: "t".to_string(),
            title: "task".to_string(),
            status,
            priority,
            due_date: None,
            created_at: None,
        }
    }

    fn money(kind: FinancialKind, amount: f64, category: &str) -> FinancialRecord {
        FinancialRecord {
            id: "f".to_string(),
            kind,
            amount,
            category: category.to_string(),
            date: None,
        }
    }

    fn status_from(idx: u8) -> TaskStatus {
        match idx % 5 {
            0 => TaskStatus::Todo,
            1 => TaskStatus::InProgress,
            2 => TaskStatus::Review,
            3 => TaskStatus::Done,
            _ => TaskStatus::Other,
        }
    }

    #[test]
    fn test_task_stats_scenario() {
        let mut tasks = Vec::new();
        tasks.extend((0..8).map(|_| task(TaskStatus::Done, TaskPriority::Medium)));
        tasks.extend((0..3).map(|_| task(TaskStatus::InProgress, TaskPriority::Medium)));
        tasks.extend((0..2).map(|_| task(TaskStatus::Todo, TaskPriority::Medium)));

        let stats = task_stats(&tasks);
        assert_eq!(
            stats,
            TaskStats {
                total: 13,
                completed: 8,
                in_progress: 3,
                pending: 2,
                completion_rate: 61.5,
            }
        );
    }

    #[test]
    fn test_task_stats_empty() {
        assert_eq!(task_stats(&[]), TaskStats::default());
    }

    #[test]
    fn test_unknown_status_counts_as_pending() {
        let stats = task_stats(&[task(TaskStatus::Other, TaskPriority::Low)]);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.completion_rate, 0.0);
    }

    #[test]
    fn test_financial_summary_scenario() {
        let records = vec![
            money(FinancialKind::Revenue, 30000.0, "sales"),
            money(FinancialKind::Revenue, 15000.0, "services"),
            money(FinancialKind::Expense, 12000.0, "salaries"),
            money(FinancialKind::Expense, 5550.0, "marketing"),
        ];
        let summary = financial_summary(&records);

        assert_eq!(summary.total_revenue, 45000.0);
        assert_eq!(summary.total_expenses, 17550.0);
        assert_eq!(summary.profit, 27450.0);
        assert_eq!(summary.profit_margin.round(), 61.0);
    }

    #[test]
    fn test_margin_zero_without_revenue() {
        let summary = financial_summary(&[money(FinancialKind::Expense, 900.0, "rent")]);
        assert_eq!(summary.profit, -900.0);
        assert_eq!(summary.profit_margin, 0.0);
    }

    #[test]
    fn test_negative_amounts_are_ignored() {
        let summary = financial_summary(&[
            money(FinancialKind::Revenue, 100.0, "sales"),
            money(FinancialKind::Revenue, -50.0, "sales"),
        ]);
        assert_eq!(summary.total_revenue, 100.0);
    }

    #[test]
    fn test_growth_rate() {
        assert_eq!(growth_rate(100.0, 80.0), 20.0);
        assert_eq!(growth_rate(100.0, 125.0), -25.0);
        assert_eq!(growth_rate(0.0, 50.0), 0.0);
        assert_eq!(growth_rate(-10.0, 50.0), 0.0);
    }

    #[test]
    fn test_priority_breakdown_skips_done() {
        let tasks = vec![
            task(TaskStatus::Todo, TaskPriority::Urgent),
            task(TaskStatus::InProgress, TaskPriority::Urgent),
            task(TaskStatus::Done, TaskPriority::Urgent),
            task(TaskStatus::Todo, TaskPriority::Low),
        ];
        let breakdown = priority_breakdown(&tasks);
        assert_eq!(breakdown.urgent, 2);
        assert_eq!(breakdown.low, 1);
        assert_eq!(breakdown.medium + breakdown.high, 0);
    }

    #[test]
    fn test_expenses_by_category() {
        let records = vec![
            money(FinancialKind::Expense, 100.0, "rent"),
            money(FinancialKind::Expense, 300.0, "ads"),
            money(FinancialKind::Expense, 50.0, "rent"),
            money(FinancialKind::Expense, 10.0, ""),
            money(FinancialKind::Revenue, 1000.0, "sales"),
        ];
        let categories = expenses_by_category(&records);
        assert_eq!(
            categories,
            vec![
                ("ads".to_string(), 300.0),
                ("rent".to_string(), 150.0),
                ("uncategorized".to_string(), 10.0),
            ]
        );
    }

    proptest! {
        #[test]
        fn task_stats_bounds(statuses in proptest::collection::vec(any::<u8>(), 0..200)) {
            let tasks: Vec<_> = statuses
                .iter()
                .map(|s| task(status_from(*s), TaskPriority::Medium))
                .collect();
            let stats = task_stats(&tasks);

            prop_assert!(stats.completed <= stats.total);
            prop_assert_eq!(stats.completed + stats.in_progress + stats.pending, stats.total);
            prop_assert!(stats.completion_rate >= 0.0 && stats.completion_rate <= 100.0);
            if stats.total == 0 {
                prop_assert_eq!(stats.completion_rate, 0.0);
            }
            prop_assert_eq!(task_stats(&tasks), stats);
        }

        #[test]
        fn profit_identity(
            revenue in proptest::collection::vec(0u32..1_000_000, 0..50),
            expenses in proptest::collection::vec(0u32..1_000_000, 0..50),
        ) {
            let mut records: Vec<_> = revenue
                .iter()
                .map(|a| money(FinancialKind::Revenue, *a as f64, "sales"))
                .collect();
            records.extend(expenses.iter().map(|a| money(FinancialKind::Expense, *a as f64, "ops")));

            let summary = financial_summary(&records);
            prop_assert_eq!(summary.profit, summary.total_revenue - summary.total_expenses);
            if summary.total_revenue == 0.0 {
                prop_assert_eq!(summary.profit_margin, 0.0);
            }
        }
    }
}
