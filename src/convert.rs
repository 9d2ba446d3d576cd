//! Pure conversion functions: TOML config and CLI flags -> crate API types.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use chrono::Datelike;
use tracing::info;

use holical_calendar::check_year;
use holical_client::{ClientConfig, HolidaySource, JsonFileSource, NagerClient, find_country};
use holical_view::RenderOptions;

use crate::cli::SelectionArgs;
use crate::config::{ApiToml, DisplayToml, HolicalConfig};

/// Most month blocks that fit side by side.
const MAX_COLUMNS: usize = 12;

/// Year and country to start from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub year: i32,
    pub country: String,
}

/// Converts the `[api]` table into a `ClientConfig`.
pub fn build_client_config(api: &ApiToml) -> Result<ClientConfig> {
    let base_url = api.base_url.trim();
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        bail!("api.base_url must start with http:// or https://, got {base_url:?}");
    }
    let timeout = match api.timeout_secs {
        Some(0) => bail!("api.timeout_secs must be positive; omit it to disable the timeout"),
        Some(secs) => Some(Duration::from_secs(secs)),
        None => None,
    };
    let mut config = ClientConfig::default()
        .with_base_url(base_url)
        .with_timeout(timeout);
    if let Some(ref ua) = api.user_agent {
        config.user_agent = ua.clone();
    }
    Ok(config)
}

/// Converts the `[display]` table, with an optional CLI column override.
pub fn build_render_options(
    display: &DisplayToml,
    columns: Option<usize>,
    no_list: bool,
) -> Result<RenderOptions> {
    let columns = columns.unwrap_or(display.columns);
    if !(1..=MAX_COLUMNS).contains(&columns) {
        bail!("columns must be in 1..={MAX_COLUMNS}, got {columns}");
    }
    Ok(RenderOptions {
        columns,
        show_list: display.show_list && !no_list,
    })
}

/// Resolves year and country: CLI flag, then config, then built-in default.
///
/// The year must have a calendar and the country must be one of the
/// supported country codes.
pub fn resolve_selection(args: &SelectionArgs, config: &HolicalConfig) -> Result<Selection> {
    let year = args
        .year
        .or(config.calendar.year)
        .unwrap_or_else(current_year);
    let year = check_year(year).context("invalid calendar year")?;
    let code = args.country.as_deref().unwrap_or(&config.calendar.country);
    let country = find_country(code)
        .with_context(|| "run `holical countries` to list supported codes".to_string())?;
    Ok(Selection {
        year,
        country: country.code.to_string(),
    })
}

/// Picks the holiday source: a saved JSON file if given, the HTTP API otherwise.
pub fn build_source(
    from_file: Option<&Path>,
    api: &ApiToml,
) -> Result<Arc<dyn HolidaySource + Send + Sync>> {
    Ok(match from_file {
        Some(path) => {
            let source = JsonFileSource::new(path);
            info!(path = %source.path().display(), "using saved holiday file");
            Arc::new(source)
        }
        None => Arc::new(NagerClient::new(&build_client_config(api)?)),
    })
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}
