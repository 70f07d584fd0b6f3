//! Tasks command - board statistics and weekly throughput.

use std::path::Path;

use anyhow::Result;

use super::common::GlobalOptions;
use crate::aggregation::{priority_breakdown, task_stats, weekly_task_series};
use crate::data::parse_task_file;
use crate::period::relative_time;
use crate::visualization::{render_insights, render_task_summary, render_weekly_tasks};


/// Run the tasks command.
pub fn run(opts: &GlobalOptions, file: &Path, weeks: usize) -> Result<()> {
    let now = opts.now()?;
    let engine = opts.insight_engine()?;
    let tasks = parse_task_file(file)?;

    if tasks.is_empty() {
        println!("No tasks found in {}.", file.display());
        return Ok(());
    }

    let stats = task_stats(&tasks);
    let priorities = priority_breakdown(&tasks);
    let weekly = weekly_task_series(&tasks, weeks, now);

    render_task_summary(&stats, &priorities);
    println!();
    render_weekly_tasks(&weekly);
    println!();

    let insights: Vec<_> = engine.tasks(stats.completion_rate).into_iter().collect();
    render_insights(&insights);

    // Most recently created tasks
    let mut recent: Vec<_> = tasks.iter().filter(|t| t.created_at.is_some()).collect();
    recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    if !recent.is_empty() {
        println!("\nRECENT");
        println!("{}", "-".repeat(60));
        for task in recent.into_iter().take(5) {
            let created = task.created_at.map(|d| d.to_rfc3339()).unwrap_or_default();
            println!(
                "  {:40} {:>12}  {}",
                task.title.chars().take(40).collect::<String>(),
                task.status.as_str(),
                relative_time(&created, now),
            );
        }
    }

    Ok(())
}
