//! # holical-client
//!
//! Where holidays come from: the Nager.Date HTTP API, a saved JSON file,
//! and the static table of supported countries. Every fetch resolves to a
//! [`FetchOutcome`], so callers never handle transport errors separately
//! from HTTP status failures.
//!
//! ```no_run
//! use holical_client::{FetchOutcome, HolidaySource, NagerClient};
//!
//! let client = NagerClient::default();
//! match client.fetch(2024, "US") {
//!     FetchOutcome::Holidays(records) => println!("{} holidays", records.len()),
//!     FetchOutcome::HttpError { status } => eprintln!("HTTP {status}"),
//!     FetchOutcome::Failed(e) => eprintln!("{e}"),
//! }
//! ```

mod country;
mod error;
mod file;
mod nager;
mod source;

pub use country::{COUNTRIES, Country, find_country, search_countries};
pub use error::ClientError;
pub use file::JsonFileSource;
pub use nager::{ClientConfig, DEFAULT_BASE_URL, NagerClient};
pub use source::{FetchOutcome, HolidaySource, STATUS_OK, classify_response, decode_holidays};
