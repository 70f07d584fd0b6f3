//! Errors raised by the analytics core.

use thiserror::Error;


/// Caller contract violations. Bad data never ends up here; it is
/// skipped or zeroed instead.
#[derive(Debug, Error, PartialEq)]
pub enum AnalyticsError {
    #[error("series length mismatch: {revenue} revenue points vs {expenses} expense points")]
    LengthMismatch { revenue: usize, expenses: usize },
}
