//! Holiday source that reads a saved API response from disk.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::ClientError;
use crate::source::{FetchOutcome, HolidaySource, decode_holidays};

/// Serves the same holiday list for every year and country.
///
/// The file holds a JSON array in the API's response format, for example
/// one saved with `curl https://date.nager.at/api/v2/publicholidays/2024/US`.
/// The file is read on every fetch.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HolidaySource for JsonFileSource {
    fn fetch(&self, year: i32, country_code: &str) -> FetchOutcome {
        debug!(path = %self.path.display(), year, country = country_code, "reading holidays from file");
        let body = match std::fs::read_to_string(&self.path) {
            Ok(body) => body,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to read holiday file");
                return FetchOutcome::Failed(ClientError::Read {
                    path: self.path.clone(),
                    reason: e.to_string(),
                });
            }
        };
        match decode_holidays(&body) {
            Ok(records) => FetchOutcome::Holidays(records),
            Err(e) => FetchOutcome::Failed(e),
        }
    }
}
