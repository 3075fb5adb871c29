//! CLI argument definitions for the DocHub portal toolkit.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use dochub_portal::DashboardTab;

#[derive(Parser)]
#[command(
    name = "dochub",
    version,
    about = "DocHub - document portal inspection toolkit",
    long_about = "Inspect DocHub portal datasets from the command line.\n\n\
                  Prints the organization roster with tri-state selection status,\n\
                  tabbed document listings with stars, and resolved share recipients.\n\
                  Without --roster/--documents the built-in demo dataset is used."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the organization tree with selection status.
    Roster(RosterArgs),

    /// Print a dashboard tab's document listing.
    Documents(DocumentsArgs),

    /// Resolve share recipients from department and employee selections.
    Share(ShareArgs),
}

#[derive(Parser)]
pub struct RosterArgs {
    /// Roster TOML file (default: built-in demo roster).
    #[arg(long = "roster", value_name = "PATH")]
    pub roster: Option<PathBuf>,

    /// Filter departments and employees by name or role.
    #[arg(long = "search", value_name = "TEXT")]
    pub search: Option<String>,

    /// Pre-select an employee id (repeatable).
    #[arg(long = "select", value_name = "EMPLOYEE_ID")]
    pub select: Vec<String>,
}

#[derive(Parser)]
pub struct DocumentsArgs {
    /// Document listing CSV file (default: built-in demo listing).
    #[arg(long = "documents", value_name = "PATH")]
    pub documents: Option<PathBuf>,

    /// Dashboard tab to list.
    #[arg(long = "tab", value_enum, default_value = "all")]
    pub tab: TabArg,

    /// Filter documents by title, snippet, or department.
    #[arg(long = "search", value_name = "TEXT")]
    pub search: Option<String>,

    /// Star a document id before listing (repeatable, hex id).
    #[arg(long = "star", value_name = "DOC_ID")]
    pub star: Vec<String>,
}

#[derive(Parser)]
pub struct ShareArgs {
    /// Roster TOML file (default: built-in demo roster).
    #[arg(long = "roster", value_name = "PATH")]
    pub roster: Option<PathBuf>,

    /// Select a whole department by id (repeatable).
    #[arg(long = "department", value_name = "DEPARTMENT_ID")]
    pub departments: Vec<String>,

    /// Select a single employee by id (repeatable).
    #[arg(long = "employee", value_name = "EMPLOYEE_ID")]
    pub employees: Vec<String>,
}

/// CLI dashboard tab choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum TabArg {
    All,
    Uploaded,
    Verified,
    Marked,
}

impl From<TabArg> for DashboardTab {
    fn from(tab: TabArg) -> Self {
        match tab {
            TabArg::All => DashboardTab::All,
            TabArg::Uploaded => DashboardTab::Uploaded,
            TabArg::Verified => DashboardTab::Verified,
            TabArg::Marked => DashboardTab::Marked,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
