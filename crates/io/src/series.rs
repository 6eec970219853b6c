//! Daily series: date-keyed values with first-wins insertion.

use std::collections::BTreeMap;

use annum_calendar::CivilDate;

/// Value and label attached to a single day.
#[derive(Debug, Clone, PartialEq)]
pub struct DayValue {
    /// The numeric observation for the day.
    pub value: f64,
    /// Free-form label rendered alongside the value (may be empty).
    pub label: String,
}

/// A date-keyed series of daily values, ordered chronologically.
///
/// Insertion keeps the first value seen for a date; later inserts for the
/// same date are rejected. This mirrors the keyed aggregation of the
/// loader: group rows by date, keep the first row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailySeries {
    days: BTreeMap<CivilDate, DayValue>,
}

impl DailySeries {
    /// Creates an empty series.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value for a date unless one is already present.
    ///
    /// Returns `true` if the value was stored, `false` if the date already
    /// had one (the existing value is kept).
    pub fn insert_first(&mut self, date: CivilDate, value: f64, label: impl Into<String>) -> bool {
        use std::collections::btree_map::Entry;
        match self.days.entry(date) {
            Entry::Vacant(slot) => {
                slot.insert(DayValue {
                    value,
                    label: label.into(),
                });
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Returns the value for a date, if present.
    pub fn get(&self, date: CivilDate) -> Option<&DayValue> {
        self.days.get(&date)
    }

    /// Returns the number of dates in the series.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Returns `true` if the series holds no dates.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Iterates over `(date, value)` pairs in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (CivilDate, &DayValue)> {
        self.days.iter().map(|(&date, value)| (date, value))
    }

    /// Returns the distinct years present in the series, ascending.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = Vec::new();
        for date in self.days.keys() {
            if years.last() != Some(&date.year()) {
                years.push(date.year());
            }
        }
        years
    }

    /// Returns the `(min, max)` of the finite values in the series, or
    /// `None` if there are none.
    pub fn value_extent(&self) -> Option<(f64, f64)> {
        let mut extent: Option<(f64, f64)> = None;
        for day in self.days.values() {
            if !day.value.is_finite() {
                continue;
            }
            extent = Some(match extent {
                None => (day.value, day.value),
                Some((lo, hi)) => (lo.min(day.value), hi.max(day.value)),
            });
        }
        extent
    }

    /// Returns all values as a vector, in date order.
    pub fn values(&self) -> Vec<f64> {
        self.days.values().map(|d| d.value).collect()
    }
}
