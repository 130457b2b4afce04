use std::sync::{Mutex, PoisonError};

use chrono::NaiveDate;

use crate::models::{DaySummary, LogEntry, Macros};

/// Append-only log of consumption events, partitioned by calendar date at
/// query time.
///
/// Appends are serialized against each other and against `summarize`, so a
/// summary sees each entry in full or not at all. The log accumulates for
/// the process lifetime; there is no delete or edit path.
#[derive(Debug, Default)]
pub struct DailyLog {
    entries: Mutex<Vec<LogEntry>>,
}

impl DailyLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Inputs are validated upstream (the service rejects
    /// unknown foods and non-positive amounts before building an entry).
    pub fn append(&self, entry: LogEntry) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry);
    }

    /// Totals and entries for one calendar date, insertion order preserved.
    ///
    /// A date with no entries yields zero totals and an empty list; absence
    /// of data is a normal result, not an error.
    #[must_use]
    pub fn summarize(&self, date: NaiveDate) -> DaySummary {
        let entries: Vec<LogEntry> = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|e| e.date == date)
            .cloned()
            .collect();

        let totals = entries
            .iter()
            .fold(Macros::ZERO, |acc, e| acc.add(e.macros()));

        DaySummary {
            date,
            totals,
            entries,
        }
    }

    /// Total number of entries across all dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use std::sync::Arc;
    use std::thread;

    fn entry(date: NaiveDate, food: &str, calories: f64) -> LogEntry {
        LogEntry {
            date,
            time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            food: food.to_string(),
            amount: 1.0,
            unit: "unit".to_string(),
            calories,
            protein: 1.0,
            fat: 0.5,
            carbs: 10.0,
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    #[test]
    fn test_append_then_summarize_single_entry() {
        let log = DailyLog::new();
        log.append(entry(day(15), "Apple", 95.0));

        let summary = log.summarize(day(15));
        assert_eq!(summary.entries.len(), 1);
        assert!((summary.totals.calories - 95.0).abs() < f64::EPSILON);
        assert!((summary.totals.protein - 1.0).abs() < f64::EPSILON);
        assert!((summary.totals.fat - 0.5).abs() < f64::EPSILON);
        assert!((summary.totals.carbs - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_totals_are_field_wise_sums() {
        let log = DailyLog::new();
        log.append(entry(day(15), "Apple", 95.0));
        log.append(entry(day(15), "Banana", 105.0));
        log.append(entry(day(15), "Egg", 78.0));

        let summary = log.summarize(day(15));
        assert_eq!(summary.entries.len(), 3);
        assert!((summary.totals.calories - 278.0).abs() < 1e-9);
        assert!((summary.totals.protein - 3.0).abs() < 1e-9);
        assert!((summary.totals.fat - 1.5).abs() < 1e-9);
        assert!((summary.totals.carbs - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_totals_independent_of_append_order() {
        let calories = [95.0, 105.0, 78.0, 160.0];

        let forward = DailyLog::new();
        for &c in &calories {
            forward.append(entry(day(15), "Food", c));
        }
        let backward = DailyLog::new();
        for &c in calories.iter().rev() {
            backward.append(entry(day(15), "Food", c));
        }

        let a = forward.summarize(day(15)).totals;
        let b = backward.summarize(day(15)).totals;
        assert!((a.calories - b.calories).abs() < 1e-9);
        assert!((a.protein - b.protein).abs() < 1e-9);
        assert!((a.fat - b.fat).abs() < 1e-9);
        assert!((a.carbs - b.carbs).abs() < 1e-9);
    }

    #[test]
    fn test_summarize_filters_by_date() {
        let log = DailyLog::new();
        log.append(entry(day(14), "Apple", 95.0));
        log.append(entry(day(15), "Banana", 105.0));
        log.append(entry(day(16), "Egg", 78.0));

        let summary = log.summarize(day(15));
        assert_eq!(summary.entries.len(), 1);
        assert_eq!(summary.entries[0].food, "Banana");
        assert!((summary.totals.calories - 105.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_date_is_zero_not_error() {
        let log = DailyLog::new();
        log.append(entry(day(14), "Apple", 95.0));

        let summary = log.summarize(day(20));
        assert!(summary.entries.is_empty());
        assert_eq!(summary.totals, Macros::ZERO);
    }

    #[test]
    fn test_entries_keep_insertion_order() {
        let log = DailyLog::new();
        log.append(entry(day(15), "Oats", 150.0));
        log.append(entry(day(15), "Milk", 150.0));
        log.append(entry(day(15), "Banana", 105.0));

        let summary = log.summarize(day(15));
        let foods: Vec<&str> = summary.entries.iter().map(|e| e.food.as_str()).collect();
        assert_eq!(foods, ["Oats", "Milk", "Banana"]);
    }

    #[test]
    fn test_concurrent_appends_lose_nothing() {
        let log = Arc::new(DailyLog::new());
        let threads: Vec<_> = (0..8)
            .map(|t| {
                let log = Arc::clone(&log);
                thread::spawn(move || {
                    for i in 0..100 {
                        log.append(entry(day(15), &format!("food-{t}-{i}"), 10.0));
                    }
                })
            })
            .collect();
        for t in threads {
            t.join().unwrap();
        }

        assert_eq!(log.len(), 800);
        let summary = log.summarize(day(15));
        assert_eq!(summary.entries.len(), 800);
        assert!((summary.totals.calories - 8000.0).abs() < 1e-6);
    }

    #[test]
    fn test_summarize_during_concurrent_appends_sees_whole_entries() {
        let log = Arc::new(DailyLog::new());
        let writer = {
            let log = Arc::clone(&log);
            thread::spawn(move || {
                for i in 0..200 {
                    log.append(entry(day(15), &format!("food-{i}"), 10.0));
                }
            })
        };
        let reader = {
            let log = Arc::clone(&log);
            thread::spawn(move || {
                for _ in 0..50 {
                    let summary = log.summarize(day(15));
                    // Totals must always equal the sum over the entries
                    // actually returned.
                    let expected = 10.0 * summary.entries.len() as f64;
                    assert!((summary.totals.calories - expected).abs() < 1e-6);
                }
            })
        };
        writer.join().unwrap();
        reader.join().unwrap();
    }
}
