//! CLI command implementations.

pub mod common;
pub mod dashboard;
pub mod export;
pub mod finance;
pub mod remove;
pub mod restore;
pub mod setup;
pub mod tasks;
