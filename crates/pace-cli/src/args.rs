use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{PlanCommands, SessionCommands};

/// Track time-boxed learning plans and the work sessions spent on them
///
/// Plans are Markdown documents whose chunks carry a target duration. Time
/// is logged as sessions against a plan and optionally a chunk; a chunk is
/// marked completed once its logged time reaches the target. Run `pace
/// serve` to expose the same operations to AI assistants over MCP.
///
/// Without a subcommand, shows the active session and the active plans.
#[derive(Parser)]
#[command(version, about, name = "pace")]
pub struct Args {
    /// Configuration file. Defaults to $XDG_CONFIG_HOME/pace/config.yaml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/pace/pace.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Directory of plan documents. Defaults to $XDG_DATA_HOME/pace/plans
    #[arg(long, global = true)]
    pub plans_dir: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the pace CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage learning plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Start, stop and review work sessions
    #[command(alias = "s")]
    Session {
        #[command(subcommand)]
        command: SessionCommands,
    },
    /// Start the MCP server on stdio
    Serve,
}
