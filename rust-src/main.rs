//! Startup Pulse CLI
//!
//! Task and finance analytics for small-business teams.

mod aggregation;
mod cli;
mod commands;
mod config;
mod data;
mod insights;
mod logging;
mod models;
mod period;
mod visualization;


fn main() {
    if let Err(e) = cli::run() {
        tracing::error!("command failed: {e:?}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
