use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Public holiday calendar for the terminal.
#[derive(Parser)]
#[command(
    name = "holical",
    version,
    about = "Public holiday calendar for the terminal"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file [default: holical.toml if present].
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Fetch holidays once and print the calendar.
    Show(ShowArgs),
    /// List supported country codes.
    Countries(CountriesArgs),
    /// Interactive session: change year and country, calendar refreshes.
    Browse(BrowseArgs),
}

/// Year and country selection shared by `show` and `browse`.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Year to show [default: config, then current year].
    #[arg(short, long, allow_negative_numbers = true)]
    pub year: Option<i32>,

    /// ISO 3166-1 alpha-2 country code [default: config, then US].
    #[arg(short = 'C', long)]
    pub country: Option<String>,

    /// Read holidays from a saved API response instead of the network.
    #[arg(long, value_name = "JSON")]
    pub from_file: Option<PathBuf>,
}

/// Output format for `show`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Month grid and holiday list.
    #[default]
    Text,
    /// The calendar view as JSON.
    Json,
}

/// Arguments for the `show` subcommand.
#[derive(clap::Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Month blocks per row [default: config, then 3].
    #[arg(long)]
    pub columns: Option<usize>,

    /// Omit the holiday list below the grid.
    #[arg(long)]
    pub no_list: bool,
}

/// Arguments for the `countries` subcommand.
#[derive(clap::Args)]
pub struct CountriesArgs {
    /// Only list countries whose code or name contains this text.
    pub search: Option<String>,

    /// Print as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `browse` subcommand.
#[derive(clap::Args)]
pub struct BrowseArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Month blocks per row [default: config, then 3].
    #[arg(long)]
    pub columns: Option<usize>,
}
