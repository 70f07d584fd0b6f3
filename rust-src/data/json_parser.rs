//! Lenient parsing of task and finance exports.
//!
//! Files hold either a JSON array, an object wrapping the array under
//! `data`, or JSON Lines. A bad record is logged and skipped; it never
//! fails the whole file.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{debug, warn};

use crate::models::{FinancialKind, FinancialRecord, TaskPriority, TaskRecord, TaskStatus};
use crate::period::parse_timestamp;


/// Parse a tasks export.
pub fn parse_task_file(file_path: &Path) -> Result<Vec<TaskRecord>> {
    let values = read_values(file_path)?;
    let total = values.len();

    let records: Vec<TaskRecord> = values
        .iter()
        .enumerate()
        .filter_map(|(idx, value)| {
            let record = parse_task(value);
            if record.is_none() {
                warn!(file = %file_path.display(), record = idx + 1, "skipping malformed task record");
            }
            record
        })
        .collect();

    debug!(file = %file_path.display(), total, parsed = records.len(), "parsed tasks");
    Ok(records)
}


/// Parse a finance export.
pub fn parse_finance_file(file_path: &Path) -> Result<Vec<FinancialRecord>> {
    let values = read_values(file_path)?;
    let total = values.len();

    let records: Vec<FinancialRecord> = values
        .iter()
        .enumerate()
        .filter_map(|(idx, value)| {
            let record = parse_financial(value);
            if record.is_none() {
                warn!(file = %file_path.display(), record = idx + 1, "skipping malformed financial record");
            }
            record
        })
        .collect();

    debug!(file = %file_path.display(), total, parsed = records.len(), "parsed financial records");
    Ok(records)
}


/// Read the raw JSON values out of a file.
fn read_values(file_path: &Path) -> Result<Vec<Value>> {
    let raw = std::fs::read_to_string(file_path)
        .with_context(|| format!("Failed to open file: {}", file_path.display()))?;

    let trimmed = raw.trim_start();
    if trimmed.starts_with('[') {
        // An array is one document; a syntax error anywhere fails the file
        let value = serde_json::from_str::<Value>(trimmed)
            .with_context(|| format!("Malformed JSON array in {}", file_path.display()))?;
        return Ok(unwrap_collection(value));
    }
    if trimmed.starts_with('{') {
        if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
            return Ok(unwrap_collection(value));
        }
    }

    // Fall back to JSON Lines
    let mut values = Vec::new();
    for (line_num, line) in raw.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match serde_json::from_str::<Value>(line) {
            Ok(value) => values.push(value),
            Err(e) => {
                warn!(
                    "Skipping malformed JSON at {}:{}: {}",
                    file_path.display(),
                    line_num + 1,
                    e
                );
            }
        }
    }

    Ok(values)
}


fn unwrap_collection(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        Value::Object(mut obj) => match obj.remove("data") {
            Some(Value::Array(items)) => items,
            Some(other) => vec![other],
            None => vec![Value::Object(obj)],
        },
        other => vec![other],
    }
}


/// Parse a single task. Only non-object values are rejected.
fn parse_task(data: &Value) -> Option<TaskRecord> {
    let obj = data.as_object()?;

    let status = obj
        .get("status")
        .and_then(|v| v.as_str())
        .map(TaskStatus::parse)
        .unwrap_or(TaskStatus::Other);

    let priority = obj
        .get("priority")
        .and_then(|v| v.as_str())
        .map(TaskPriority::parse)
        .unwrap_or_default();

    let title = obj
        .get("title")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    Some(TaskRecord {
        id: extract_id(data),
        title,
        status,
        priority,
        due_date: extract_date(data, &["dueDate", "due_date"]),
        created_at: extract_date(data, &["createdAt", "created_at"]),
    })
}


/// Parse a single financial record. Records without a recognisable
/// revenue/expense type are rejected; a missing amount reads as 0.
fn parse_financial(data: &Value) -> Option<FinancialRecord> {
    let obj = data.as_object()?;

    let kind = obj
        .get("type")
        .or_else(|| obj.get("kind"))
        .and_then(|v| v.as_str())
        .and_then(FinancialKind::parse)?;

    let amount = match obj.get("amount") {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().replace(',', "").parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };

    let category = obj
        .get("category")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    Some(FinancialRecord {
        id: extract_id(data),
        kind,
        amount,
        category,
        date: extract_date(data, &["date", "createdAt"]),
    })
}


fn extract_id(data: &Value) -> String {
    match data.get("id") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => "unknown".to_string(),
    }
}


fn extract_date(data: &Value, fields: &[&str]) -> Option<chrono::DateTime<chrono::Utc>> {
    fields
        .iter()
        .find_map(|field| data.get(*field).and_then(|v| v.as_str()))
        .and_then(parse_timestamp)
}
