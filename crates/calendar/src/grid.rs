//! Twelve-month calendar grid annotated with weekends and holidays.

use serde::Serialize;

use crate::date::CalendarDate;
use crate::error::CalendarError;
use crate::holiday::HolidayIndex;
use crate::month::MONTH_NAMES;

/// Days at the start of a month that carry a weekday label.
const LABELLED_DAYS: u8 = 7;

/// One day in the calendar grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarDayCell {
    pub date: CalendarDate,
    pub is_weekend: bool,
    pub is_holiday: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holiday_name: Option<String>,
    /// Two-letter weekday hint, present for the first seven days of a month.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekday_label: Option<&'static str>,
}

/// The day cells of one month, in ascending date order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGroup {
    /// Month number, 1..=12.
    pub month: u8,
    pub month_name: &'static str,
    pub days: Vec<CalendarDayCell>,
}

impl MonthGroup {
    /// Iterates over the holiday cells of this month.
    pub fn holidays(&self) -> impl Iterator<Item = &CalendarDayCell> {
        self.days.iter().filter(|cell| cell.is_holiday)
    }
}

/// Builds the calendar grid for `year`.
///
/// Returns twelve month groups, January first. Each group holds exactly
/// the days of that month in that year, annotated from `index`.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] if `year` is outside
/// [`supported_years`](crate::supported_years).
pub fn build_calendar(year: i32, index: &HolidayIndex) -> Result<Vec<MonthGroup>, CalendarError> {
    let first = CalendarDate::first_of_year(year)?;
    let mut months: Vec<MonthGroup> = (1..=12u8)
        .map(|month| MonthGroup {
            month,
            month_name: MONTH_NAMES[usize::from(month)],
            days: Vec::with_capacity(31),
        })
        .collect();

    for date in first.rest_of_year() {
        let holiday = index.get_date(date);
        let weekday = date.weekday();
        months[usize::from(date.month()) - 1].days.push(CalendarDayCell {
            date,
            is_weekend: weekday.is_weekend(),
            is_holiday: holiday.is_some(),
            holiday_name: holiday.map(|h| h.name.clone()),
            weekday_label: (date.day() <= LABELLED_DAYS).then(|| weekday.label()),
        });
    }
    Ok(months)
}
