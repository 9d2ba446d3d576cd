//! Month tables and the grid checked against `chrono` over its whole year range.

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;

use holical_calendar::{CalendarDate, HolidayIndex, build_calendar, days_in_month, supported_years};

fn chrono_days_in_month(year: i32, month: u32) -> u32 {
    // December always has 31 days.
    if month == 12 {
        return 31;
    }
    let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
    let next = NaiveDate::from_ymd_opt(year, month + 1, 1).unwrap();
    (next - first).num_days() as u32
}

fn year_strategy() -> impl Strategy<Value = i32> {
    let years = supported_years();
    *years.start()..=*years.end()
}

proptest! {
    #[test]
    fn days_in_month_agrees(year in year_strategy(), month in 1u8..=12) {
        prop_assert_eq!(
            u32::from(days_in_month(year, month).unwrap()),
            chrono_days_in_month(year, u32::from(month))
        );
    }

    #[test]
    fn weekday_index_is_sunday_based(year in year_strategy(), month in 1u8..=12, day in 1u8..=28) {
        let ours = CalendarDate::new(year, month, day).unwrap();
        let theirs = NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day)).unwrap();
        prop_assert_eq!(u32::from(ours.weekday().index()), theirs.weekday().num_days_from_sunday());
        prop_assert_eq!(ours.is_weekend(), theirs.weekday().num_days_from_monday() >= 5);
    }

    #[test]
    fn grid_has_every_day_of_the_year(year in year_strategy()) {
        let grid = build_calendar(year, &HolidayIndex::new()).unwrap();
        prop_assert_eq!(grid.len(), 12);
        let total: usize = grid.iter().map(|m| m.days.len()).sum();
        let expected = NaiveDate::from_ymd_opt(year, 12, 31).unwrap().ordinal() as usize;
        prop_assert_eq!(total, expected);
    }

    #[test]
    fn years_outside_the_range_are_rejected(offset in 1i32..1_000) {
        let years = supported_years();
        prop_assert!(build_calendar(*years.end() + offset, &HolidayIndex::new()).is_err());
        prop_assert!(build_calendar(*years.start() - offset, &HolidayIndex::new()).is_err());
    }
}
