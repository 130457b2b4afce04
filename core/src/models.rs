use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Reference record for one food: its standard serving and the macro
/// content of that serving.
///
/// The food's name is the catalog key and lives alongside the profile, not
/// inside it. `standard_amount` is the quantity `unit` describes (100 for
/// "100g", 1 for "unit") and is guaranteed positive by catalog validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodProfile {
    pub unit: String,
    pub standard_amount: f64,
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

/// The four tracked macro values, used both for scaled servings and for
/// daily totals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

impl Macros {
    pub const ZERO: Self = Self {
        calories: 0.0,
        protein: 0.0,
        fat: 0.0,
        carbs: 0.0,
    };

    #[must_use]
    pub fn add(self, other: Self) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            fat: self.fat + other.fat,
            carbs: self.carbs + other.carbs,
        }
    }
}

/// The current daily goals, one set per process.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Targets {
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

impl Default for Targets {
    fn default() -> Self {
        Self {
            calories: 2000.0,
            protein: 150.0,
            fat: 70.0,
            carbs: 250.0,
        }
    }
}

/// Partial target update: only the supplied fields change.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct TargetUpdate {
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub fat: Option<f64>,
    pub carbs: Option<f64>,
}

impl TargetUpdate {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calories.is_none()
            && self.protein.is_none()
            && self.fat.is_none()
            && self.carbs.is_none()
    }
}

/// One logged consumption event.
///
/// Date, time, unit, and the scaled macros are all captured at log time.
/// Entries are never edited or recomputed, so later catalog changes cannot
/// retroactively alter past entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub food: String,
    pub amount: f64,
    pub unit: String,
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

impl LogEntry {
    #[must_use]
    pub fn macros(&self) -> Macros {
        Macros {
            calories: self.calories,
            protein: self.protein,
            fat: self.fat,
            carbs: self.carbs,
        }
    }
}

/// Totals and entries for a single calendar date, insertion order preserved.
#[derive(Debug, Clone, Serialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub totals: Macros,
    pub entries: Vec<LogEntry>,
}

/// A day summary bundled with the current targets, the shape the summary
/// endpoints return.
#[derive(Debug, Clone, Serialize)]
pub struct TodaySummary {
    pub date: NaiveDate,
    pub totals: Macros,
    pub targets: Targets,
    pub entries: Vec<LogEntry>,
}
