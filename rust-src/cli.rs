//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::aggregation::ReportOptions;
use crate::commands::{self, common::GlobalOptions};
use crate::config::{DEFAULT_CURRENCY, DEFAULT_MONTHS_TO_KEEP, DEFAULT_WEEKS_TO_KEEP};
use crate::logging::init_logging;


/// Startup Pulse - task and finance analytics for small businesses
#[derive(Parser)]
#[command(name = "pulse")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Directory holding thresholds and exports
    #[arg(long, env = "PULSE_DATA_DIR", global = true)]
    data_dir: Option<String>,

    /// Currency label for amounts
    #[arg(long, env = "PULSE_CURRENCY", default_value = DEFAULT_CURRENCY, global = true)]
    currency: String,

    /// Reference date for "now" (YYYY-MM-DD or RFC 3339)
    #[arg(long, global = true)]
    as_of: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}


#[derive(Subcommand)]
enum Commands {
    /// Show task statistics and weekly throughput
    Tasks {
        /// Tasks export (JSON array or JSON Lines)
        file: PathBuf,

        /// Number of weeks in the planned-vs-completed chart
        #[arg(long, default_value_t = DEFAULT_WEEKS_TO_KEEP)]
        weeks: usize,
    },

    /// Show the financial overview
    Finance {
        /// Finance export (JSON array or JSON Lines)
        file: PathBuf,

        /// Number of months in the revenue-vs-expenses chart
        #[arg(long, default_value_t = DEFAULT_MONTHS_TO_KEEP)]
        months: usize,

        /// Group the chart by quarter instead of month
        #[arg(long)]
        quarterly: bool,
    },

    /// Show KPI cards, charts and insights
    Dashboard {
        #[command(flatten)]
        sources: SourceArgs,

        /// Auto-refresh dashboard every 5 seconds
        #[arg(long)]
        live: bool,
    },

    /// Export the dashboard report as JSON
    Export {
        #[command(flatten)]
        sources: SourceArgs,

        /// Output file path
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Setup configuration files
    Setup {
        #[command(subcommand)]
        command: SetupCommands,
    },

    /// Remove configuration files
    Remove {
        #[command(subcommand)]
        command: RemoveCommands,
    },

    /// Restore from backup
    Restore {
        #[command(subcommand)]
        command: RestoreCommands,
    },
}


#[derive(clap::Args)]
struct SourceArgs {
    /// Tasks export
    #[arg(long)]
    tasks: Option<PathBuf>,

    /// Finance export
    #[arg(long)]
    finance: Option<PathBuf>,

    /// Weeks in the task chart
    #[arg(long, default_value_t = DEFAULT_WEEKS_TO_KEEP)]
    weeks: usize,

    /// Months in the finance chart
    #[arg(long, default_value_t = DEFAULT_MONTHS_TO_KEEP)]
    months: usize,
}


#[derive(Subcommand)]
enum SetupCommands {
    /// Write the default insight thresholds file
    Thresholds {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}


#[derive(Subcommand)]
enum RemoveCommands {
    /// Remove the insight thresholds file
    Thresholds {
        /// Force deletion without confirmation
        #[arg(short, long)]
        force: bool,
    },
}


#[derive(Subcommand)]
enum RestoreCommands {
    /// Restore the thresholds file from backup
    Thresholds,
}


impl SourceArgs {
    fn report_options(&self, currency: &str) -> ReportOptions {
        ReportOptions {
            weeks_to_keep: self.weeks,
            months_to_keep: self.months,
            currency: currency.to_string(),
        }
    }
}


/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let opts = GlobalOptions {
        data_dir: cli.data_dir,
        currency: cli.currency,
        as_of: cli.as_of,
    };

    match cli.command {
        Some(Commands::Tasks { file, weeks }) => {
            commands::tasks::run(&opts, &file, weeks)?;
        }
        Some(Commands::Finance { file, months, quarterly }) => {
            commands::finance::run(&opts, &file, months, quarterly)?;
        }
        Some(Commands::Dashboard { sources, live }) => {
            commands::dashboard::run(
                &opts,
                sources.tasks.as_deref(),
                sources.finance.as_deref(),
                &sources.report_options(&opts.currency),
                live,
            )?;
        }
        Some(Commands::Export { sources, output }) => {
            commands::export::run(
                &opts,
                sources.tasks.as_deref(),
                sources.finance.as_deref(),
                &sources.report_options(&opts.currency),
                output.as_deref(),
            )?;
        }
        Some(Commands::Setup { command }) => match command {
            SetupCommands::Thresholds { force } => {
                commands::setup::thresholds(&opts, force)?;
            }
        },
        Some(Commands::Remove { command }) => match command {
            RemoveCommands::Thresholds { force } => {
                commands::remove::thresholds(&opts, force)?;
            }
        },
        Some(Commands::Restore { command }) => match command {
            RestoreCommands::Thresholds => {
                commands::restore::thresholds(&opts)?;
            }
        },
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
