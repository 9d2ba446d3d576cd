//! Gregorian calendar date and the normalized lookup key.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};

use crate::error::CalendarError;
use crate::month::{Weekday, days_in_month};

/// Years for which dates can be built, the full range of [`chrono::NaiveDate`].
pub fn supported_years() -> RangeInclusive<i32> {
    NaiveDate::MIN.year()..=NaiveDate::MAX.year()
}

/// Returns `year` unchanged if it lies in [`supported_years`].
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] otherwise.
pub fn check_year(year: i32) -> Result<i32, CalendarError> {
    let range = supported_years();
    if range.contains(&year) {
        Ok(year)
    } else {
        Err(CalendarError::YearOutOfRange {
            year,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

/// A validated date in the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Creates a new `CalendarDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12,
    /// [`CalendarError::InvalidDay`] if `day` does not exist in that month
    /// of that year, or [`CalendarError::YearOutOfRange`] if `year` is not
    /// in [`supported_years`].
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let max_day = days_in_month(year, month)?;
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                year,
                max_day,
            });
        }
        let year = check_year(year)?;
        NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day))
            .map(Self)
            .ok_or(CalendarError::InvalidDay {
                day,
                month,
                year,
                max_day,
            })
    }

    /// January 1 of `year`.
    pub(crate) fn first_of_year(year: i32) -> Result<Self, CalendarError> {
        Self::new(year, 1, 1)
    }

    /// This date and every following day of the same year, in order.
    pub(crate) fn rest_of_year(self) -> impl Iterator<Item = CalendarDate> {
        let year = self.year();
        std::iter::successors(Some(self.0), NaiveDate::succ_opt)
            .take_while(move |d| d.year() == year)
            .map(Self)
    }

    /// Parses a `YYYY-MM-DD` string.
    ///
    /// The string is split on `-` into exactly three integer fields. A
    /// leading `-` marks a negative year. Field widths are not enforced, so
    /// `2024-1-5` parses as January 5, 2024.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::MalformedDate`] if the string does not have
    /// three numeric fields, or the validation errors of [`CalendarDate::new`]
    /// if the fields do not form a real date.
    pub fn parse_iso(input: &str) -> Result<Self, CalendarError> {
        let malformed = || CalendarError::MalformedDate {
            input: input.to_string(),
        };
        let trimmed = input.trim();
        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let mut fields = rest.split('-');
        let (Some(y), Some(m), Some(d), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(malformed());
        };
        // Parsed wide so that the most negative year survives negation.
        let magnitude: i64 = y.parse().map_err(|_| malformed())?;
        let year = i32::try_from(if negative { -magnitude } else { magnitude })
            .map_err(|_| malformed())?;
        let month: u8 = m.parse().map_err(|_| malformed())?;
        let day: u8 = d.parse().map_err(|_| malformed())?;
        Self::new(year, month, day)
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.0.month() as u8
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.0.day() as u8
    }

    /// Returns the day of the week.
    pub fn weekday(self) -> Weekday {
        self.0.weekday().into()
    }

    /// Returns `true` if the date falls on a Saturday or Sunday.
    pub fn is_weekend(self) -> bool {
        self.weekday().is_weekend()
    }

    /// Returns the normalized lookup key for this date.
    pub fn key(self) -> DateKey {
        DateKey {
            year: self.year(),
            month: self.month(),
            day: self.day(),
        }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_year(f, self.year())?;
        write!(f, "-{:02}-{:02}", self.month(), self.day())
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_iso(s)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Normalized date key used for holiday lookups, displayed as `YYYY/MM/DD`.
///
/// Two dates map to the same key iff they are the same calendar day,
/// independent of how the source string was formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey {
    year: i32,
    month: u8,
    day: u8,
}

impl From<CalendarDate> for DateKey {
    fn from(date: CalendarDate) -> Self {
        date.key()
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_year(f, self.year)?;
        write!(f, "/{:02}/{:02}", self.month, self.day)
    }
}

/// Writes a year zero-padded to four digits, sign before the padding.
fn write_year(f: &mut fmt::Formatter<'_>, year: i32) -> fmt::Result {
    if year < 0 {
        write!(f, "-{:04}", year.unsigned_abs())
    } else {
        write!(f, "{year:04}")
    }
}
