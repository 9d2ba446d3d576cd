//! # holical-view
//!
//! Presentation state for the holiday calendar and its plain-text
//! rendering.
//!
//! [`CalendarState`] owns the two inputs (year and country), the holidays
//! of the last successful fetch, and the error flag. Every input change
//! issues a [`FetchRequest`] tagged with a generation number; results of
//! requests that have since been superseded are discarded, so overlapping
//! fetches can resolve in any order.
//!
//! ```
//! use holical_calendar::HolidayRecord;
//! use holical_client::FetchOutcome;
//! use holical_view::{Applied, CalendarState};
//!
//! let mut state = CalendarState::new(2024, "US");
//! let first = state.current_request();
//! let second = state.set_year(2025);
//!
//! let late = FetchOutcome::Holidays(vec![HolidayRecord::new("2024-12-25", "Christmas")]);
//! assert_eq!(state.apply_fetch_result(&first, late), Applied::Stale);
//! assert_eq!(state.apply_fetch_result(&second, FetchOutcome::Holidays(vec![])), Applied::Updated);
//! ```

mod render;
mod state;

pub use render::{RenderOptions, render_grid, render_holiday_list, render_view};
pub use state::{Applied, CalendarState, CalendarView, FETCH_ERROR_MESSAGE, FetchRequest, UNSUPPORTED_YEAR_MESSAGE};
