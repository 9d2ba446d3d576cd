//! Error types for the holical-calendar crate.

/// Error type for all fallible operations in the holical-calendar crate.
///
/// Covers validation of year, month and day numbers against the Gregorian
/// calendar and parsing of `YYYY-MM-DD` date strings.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for {year}-{month:02} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The year, which decides the length of February.
        year: i32,
        /// The maximum valid day for the given month.
        max_day: u8,
    },

    /// Returned when a year lies outside the supported calendar range.
    #[error("year {year} out of range (supported: {min}..={max})")]
    YearOutOfRange {
        /// The year that was provided.
        year: i32,
        /// First supported year.
        min: i32,
        /// Last supported year.
        max: i32,
    },

    /// Returned when a date string is not of the form `YYYY-MM-DD`.
    #[error("malformed date: {input:?} (expected YYYY-MM-DD)")]
    MalformedDate {
        /// The string that failed to parse.
        input: String,
    },
}
