//! Holiday records and the date-keyed holiday index.

use std::collections::HashMap;
use std::collections::hash_map;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::date::{CalendarDate, DateKey};

/// A public holiday as delivered by the holiday data source.
///
/// Field names follow the camelCase JSON of the Nager.Date API. Only
/// `date` and `name` are required; the rest is optional metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayRecord {
    /// Date string, expected as `YYYY-MM-DD`.
    pub date: String,
    /// English name of the holiday.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    /// Whether the holiday falls on the same date every year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed: Option<bool>,
    /// Whether the holiday applies to the whole country.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global: Option<bool>,
    /// Subdivision codes (e.g. `US-CA`) when the holiday is regional.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counties: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_year: Option<i32>,
    /// Single holiday type, as sent by the v2 endpoint (`"type": "Public"`).
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Holiday types, as sent by the v3 endpoint (`"types": ["Public"]`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<String>>,
}

impl HolidayRecord {
    /// Creates a record with only a date string and a name.
    pub fn new(date: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            name: name.into(),
            local_name: None,
            country_code: None,
            fixed: None,
            global: None,
            counties: None,
            launch_year: None,
            kind: None,
            types: None,
        }
    }

    /// Parses the record's date string.
    ///
    /// Returns `None` when the string is not a valid `YYYY-MM-DD` date.
    pub fn calendar_date(&self) -> Option<CalendarDate> {
        CalendarDate::parse_iso(&self.date).ok()
    }
}

/// Lookup from normalized date to holiday record.
///
/// Built from a sequence of records; when two records fall on the same
/// day the later one wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HolidayIndex {
    by_date: HashMap<DateKey, HolidayRecord>,
}

impl HolidayIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an index from holiday records.
    ///
    /// Records whose date string does not parse are left out of the index
    /// and therefore never match a calendar cell.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a HolidayRecord>,
    {
        records.into_iter().cloned().collect()
    }

    /// Inserts one record, replacing any record already stored for its date.
    ///
    /// Returns `false` if the record's date does not parse.
    pub fn insert(&mut self, record: HolidayRecord) -> bool {
        match CalendarDate::parse_iso(&record.date) {
            Ok(date) => {
                self.by_date.insert(date.key(), record);
                true
            }
            Err(e) => {
                debug!(date = %record.date, name = %record.name, error = %e, "skipping holiday with unparseable date");
                false
            }
        }
    }

    /// Returns the holiday stored under `key`.
    pub fn get(&self, key: &DateKey) -> Option<&HolidayRecord> {
        self.by_date.get(key)
    }

    /// Returns the holiday on `date`.
    pub fn get_date(&self, date: CalendarDate) -> Option<&HolidayRecord> {
        self.by_date.get(&date.key())
    }

    /// Number of distinct holiday dates.
    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }

    /// Iterates over `(key, record)` pairs in arbitrary order.
    pub fn iter(&self) -> hash_map::Iter<'_, DateKey, HolidayRecord> {
        self.by_date.iter()
    }
}

impl FromIterator<HolidayRecord> for HolidayIndex {
    fn from_iter<I: IntoIterator<Item = HolidayRecord>>(iter: I) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}

impl Extend<HolidayRecord> for HolidayIndex {
    fn extend<I: IntoIterator<Item = HolidayRecord>>(&mut self, iter: I) {
        for record in iter {
            self.insert(record);
        }
    }
}
