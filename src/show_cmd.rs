//! Show command: fetch holidays once and print the calendar.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use holical_client::HolidaySource;
use holical_view::{CalendarState, CalendarView, RenderOptions, render_view};

use crate::cli::{OutputFormat, ShowArgs};
use crate::config::HolicalConfig;
use crate::convert;

/// Run the show command.
pub fn run(args: ShowArgs, config: &HolicalConfig) -> Result<()> {
    let _cmd = info_span!("show").entered();

    let selection = convert::resolve_selection(&args.selection, config)?;
    let options = convert::build_render_options(&config.display, args.columns, args.no_list)?;
    let source = convert::build_source(args.selection.from_file.as_deref(), &config.api)?;

    info!(year = selection.year, country = %selection.country, "fetching holidays");
    let state = fetch_once(source.as_ref(), selection.year, &selection.country);

    let output = format_view(&state.view(), args.format, &options)?;
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.flush())
        .context("failed to write to stdout")?;
    Ok(())
}

/// Builds a state for `year`/`country` and applies a single fetch to it.
fn fetch_once(source: &dyn HolidaySource, year: i32, country: &str) -> CalendarState {
    let mut state = CalendarState::new(year, country);
    let request = state.current_request();
    let outcome = source.fetch(request.year(), request.location());
    info!(ok = outcome.is_success(), "fetch finished");
    state.apply_fetch_result(&request, outcome);
    state
}

fn format_view(view: &CalendarView<'_>, format: OutputFormat, options: &RenderOptions) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_view(view, options)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(view).context("failed to serialize calendar")?;
            json.push('\n');
            Ok(json)
        }
    }
}
