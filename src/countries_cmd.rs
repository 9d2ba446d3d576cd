//! Countries command: list supported country codes.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::{Context, Result, bail};

use holical_client::{Country, search_countries};

use crate::cli::CountriesArgs;

/// Run the countries command.
pub fn run(args: CountriesArgs) -> Result<()> {
    let matches = search_countries(args.search.as_deref().unwrap_or(""));
    if matches.is_empty() {
        bail!(
            "no country matches {:?}",
            args.search.as_deref().unwrap_or_default()
        );
    }

    let output = if args.json {
        let mut json = serde_json::to_string_pretty(&matches).context("failed to serialize countries")?;
        json.push('\n');
        json
    } else {
        format_table(&matches)
    };

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .context("failed to write to stdout")?;
    Ok(())
}

fn format_table(countries: &[&Country]) -> String {
    let mut out = String::new();
    for country in countries {
        let _ = writeln!(out, "{}  {}", country.code, country.name);
    }
    out
}
