//! Calendar UI state and its transitions.

use holical_calendar::{HolidayIndex, HolidayRecord, MonthGroup, build_calendar};
use holical_client::FetchOutcome;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Message shown in place of the calendar when the last fetch failed.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch data";

/// Message shown when the selected year has no calendar.
pub const UNSUPPORTED_YEAR_MESSAGE: &str = "Year outside the supported calendar range";

/// Snapshot of the inputs a fetch was issued for.
///
/// Each request carries the generation it was issued in. Only the result
/// of the most recently issued request is ever applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FetchRequest {
    year: i32,
    location: String,
    generation: u64,
}

impl FetchRequest {
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Country code the request is for.
    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What [`CalendarState::apply_fetch_result`] did with a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// Holidays replaced, error cleared.
    Updated,
    /// Error flag set, holidays left as they were.
    Failed,
    /// The request was superseded; state is unchanged.
    Stale,
}

/// State owned by the presentation layer.
///
/// Inputs change only through [`set_year`](Self::set_year) and
/// [`set_location`](Self::set_location); fetch results arrive only through
/// [`apply_fetch_result`](Self::apply_fetch_result).
#[derive(Debug, Clone)]
pub struct CalendarState {
    year: i32,
    location: String,
    holidays: Vec<HolidayRecord>,
    error: bool,
    generation: u64,
}

impl CalendarState {
    /// Creates the initial state. Call [`current_request`](Self::current_request)
    /// to obtain the first fetch.
    pub fn new(year: i32, location: impl Into<String>) -> Self {
        Self {
            year,
            location: normalize_location(location.into()),
            holidays: Vec::new(),
            error: false,
            generation: 0,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Selected country code, upper-case.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Holidays from the last successful fetch, in source order.
    pub fn holidays(&self) -> &[HolidayRecord] {
        &self.holidays
    }

    /// `true` if the latest applied fetch failed.
    pub fn is_error(&self) -> bool {
        self.error
    }

    /// The request matching the current inputs.
    pub fn current_request(&self) -> FetchRequest {
        FetchRequest {
            year: self.year,
            location: self.location.clone(),
            generation: self.generation,
        }
    }

    /// Changes the year and issues a new fetch request.
    pub fn set_year(&mut self, year: i32) -> FetchRequest {
        self.year = year;
        self.issue()
    }

    /// Changes the country and issues a new fetch request.
    pub fn set_location(&mut self, location: impl Into<String>) -> FetchRequest {
        self.location = normalize_location(location.into());
        self.issue()
    }

    /// Applies the result of `request`.
    ///
    /// Results of superseded requests are dropped. Every failure, whether an
    /// HTTP status or a broken request, sets the error flag.
    pub fn apply_fetch_result(&mut self, request: &FetchRequest, outcome: FetchOutcome) -> Applied {
        if request.generation != self.generation {
            debug!(
                stale = request.generation,
                current = self.generation,
                "discarding superseded fetch result"
            );
            return Applied::Stale;
        }
        match outcome {
            FetchOutcome::Holidays(records) => {
                info!(
                    year = request.year,
                    location = %request.location,
                    n = records.len(),
                    "holidays updated"
                );
                self.holidays = records;
                self.error = false;
                Applied::Updated
            }
            FetchOutcome::HttpError { status } => {
                warn!(
                    year = request.year,
                    location = %request.location,
                    status,
                    "holiday fetch rejected"
                );
                self.error = true;
                Applied::Failed
            }
            FetchOutcome::Failed(e) => {
                warn!(
                    year = request.year,
                    location = %request.location,
                    error = %e,
                    "holiday fetch failed"
                );
                self.error = true;
                Applied::Failed
            }
        }
    }

    /// Builds what should be displayed for the current state.
    pub fn view(&self) -> CalendarView<'_> {
        if self.error {
            return CalendarView::Error {
                year: self.year,
                location: &self.location,
                message: FETCH_ERROR_MESSAGE,
            };
        }
        let index = HolidayIndex::from_records(&self.holidays);
        match build_calendar(self.year, &index) {
            Ok(months) => CalendarView::Grid {
                year: self.year,
                location: &self.location,
                months,
                holidays: &self.holidays,
            },
            Err(e) => {
                warn!(error = %e, "no calendar for the selected year");
                CalendarView::Error {
                    year: self.year,
                    location: &self.location,
                    message: UNSUPPORTED_YEAR_MESSAGE,
                }
            }
        }
    }

    fn issue(&mut self) -> FetchRequest {
        self.generation += 1;
        self.current_request()
    }
}

/// Renderable output of a [`CalendarState`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CalendarView<'a> {
    /// Twelve-month grid plus the flat holiday list.
    Grid {
        year: i32,
        location: &'a str,
        months: Vec<MonthGroup>,
        holidays: &'a [HolidayRecord],
    },
    /// Replaces both the grid and the list.
    Error {
        year: i32,
        location: &'a str,
        message: &'static str,
    },
}

impl CalendarView<'_> {
    pub fn is_error(&self) -> bool {
        matches!(self, CalendarView::Error { .. })
    }
}

fn normalize_location(location: String) -> String {
    location.trim().to_ascii_uppercase()
}
