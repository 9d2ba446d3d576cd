//! # holical-calendar
//!
//! Pure calendar logic for the public holiday calendar: Gregorian dates
//! on top of [`chrono::NaiveDate`], the date-keyed holiday index, and the
//! twelve-month grid. Years are limited to [`supported_years`], the range
//! `chrono` can represent.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Vec of HolidayRecord"] -->|"HolidayIndex::from_records()"| B["HolidayIndex"]
//!     C["year"] -->|"build_calendar()"| D["Vec of MonthGroup"]
//!     B --> D
//!     E["CalendarDate"] -->|".key()"| F["DateKey (YYYY/MM/DD)"]
//!     F -->|"lookup"| B
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use holical_calendar::{HolidayIndex, HolidayRecord, build_calendar};
//!
//! let records = vec![HolidayRecord::new("2024-12-25", "Christmas")];
//! let index = HolidayIndex::from_records(&records);
//! let grid = build_calendar(2024, &index)?;
//!
//! assert_eq!(grid.len(), 12);
//! let christmas = &grid[11].days[24];
//! assert!(christmas.is_holiday);
//! assert_eq!(christmas.holiday_name.as_deref(), Some("Christmas"));
//! # Ok::<(), holical_calendar::CalendarError>(())
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `month` | Leap years, month lengths and names, weekdays |
//! | `date` | Validated date over `chrono::NaiveDate`, year range, normalized lookup key |
//! | `holiday` | Holiday record wire type and holiday index |
//! | `grid` | Calendar grid builder |
//! | `error` | Error types |

mod date;
mod error;
mod grid;
mod holiday;
mod month;

pub use date::{CalendarDate, DateKey, check_year, supported_years};
pub use error::CalendarError;
pub use grid::{CalendarDayCell, MonthGroup, build_calendar};
pub use holiday::{HolidayIndex, HolidayRecord};
pub use month::{Weekday, days_in_month, is_leap_year, month_name};
