//! Data access layer for task and finance exports.

mod json_parser;

pub use json_parser::{parse_finance_file, parse_task_file};
