mod browse_cmd;
mod cli;
mod config;
mod convert;
mod countries_cmd;
mod logging;
mod show_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Show(args) => show_cmd::run(args, &config::load(cli.config.as_deref())?),
        Command::Countries(args) => countries_cmd::run(args),
        Command::Browse(args) => browse_cmd::run(args, &config::load(cli.config.as_deref())?),
    }
}
