//! Holiday source abstraction and response classification.

use holical_calendar::HolidayRecord;
use tracing::debug;

use crate::error::ClientError;

/// HTTP status the holiday endpoint answers with when data is available.
pub const STATUS_OK: u16 = 200;

/// Result of one holiday fetch.
///
/// A fetch never fails with an `Err`: every way it can end is a variant
/// here, and the caller decides how each is presented.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// The source answered 200 with a list of holidays.
    Holidays(Vec<HolidayRecord>),
    /// The source answered with any status other than 200.
    HttpError {
        /// The HTTP status code received.
        status: u16,
    },
    /// The request could not be completed or its body could not be decoded.
    Failed(ClientError),
}

impl FetchOutcome {
    /// Returns `true` for [`FetchOutcome::Holidays`].
    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Holidays(_))
    }
}

/// Something that can produce the public holidays of a country and year.
pub trait HolidaySource {
    /// Fetches the holidays for `country_code` in `year`.
    fn fetch(&self, year: i32, country_code: &str) -> FetchOutcome;
}

impl<S: HolidaySource + ?Sized> HolidaySource for &S {
    fn fetch(&self, year: i32, country_code: &str) -> FetchOutcome {
        (**self).fetch(year, country_code)
    }
}

impl<S: HolidaySource + ?Sized> HolidaySource for std::sync::Arc<S> {
    fn fetch(&self, year: i32, country_code: &str) -> FetchOutcome {
        (**self).fetch(year, country_code)
    }
}

/// Turns an HTTP status and body into a [`FetchOutcome`].
///
/// Only status 200 is treated as success; any other status, including
/// other 2xx codes such as 204, is an [`FetchOutcome::HttpError`] and the
/// body is ignored.
pub fn classify_response(status: u16, body: &str) -> FetchOutcome {
    if status != STATUS_OK {
        return FetchOutcome::HttpError { status };
    }
    match decode_holidays(body) {
        Ok(records) => {
            debug!(n = records.len(), "decoded holidays");
            FetchOutcome::Holidays(records)
        }
        Err(e) => FetchOutcome::Failed(e),
    }
}

/// Decodes a JSON array of holiday records.
///
/// # Errors
///
/// Returns [`ClientError::Decode`] if `body` is not a JSON array of
/// objects with at least `date` and `name` fields.
pub fn decode_holidays(body: &str) -> Result<Vec<HolidayRecord>, ClientError> {
    Ok(serde_json::from_str(body)?)
}
