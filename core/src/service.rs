use chrono::NaiveDate;

use crate::catalog::FoodCatalog;
use crate::clock::{Clock, SystemClock};
use crate::error::EngineError;
use crate::log::DailyLog;
use crate::models::{LogEntry, TargetUpdate, Targets, TodaySummary};
use crate::scale::scale;
use crate::targets::TargetStore;

/// The engine façade: owns the catalog, target store, daily log, and clock,
/// and implements the public operations by composing them.
///
/// All interior state is guarded by its owning component, so one instance
/// can be shared across request handlers behind an `Arc` with no outer
/// lock.
pub struct NoshService {
    catalog: FoodCatalog,
    targets: TargetStore,
    log: DailyLog,
    clock: Box<dyn Clock>,
}

impl NoshService {
    #[must_use]
    pub fn new(catalog: FoodCatalog, clock: Box<dyn Clock>) -> Self {
        Self {
            catalog,
            targets: TargetStore::default(),
            log: DailyLog::new(),
            clock,
        }
    }

    /// Engine over the builtin food table and the system clock.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(FoodCatalog::builtin(), Box::new(SystemClock))
    }

    #[must_use]
    pub fn foods(&self) -> &FoodCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn targets(&self) -> Targets {
        self.targets.get()
    }

    pub fn update_targets(&self, update: &TargetUpdate) -> Result<Targets, EngineError> {
        self.targets.update(update)
    }

    /// Resolve a food, scale its macros to `amount`, stamp the entry with
    /// one clock sample, and append it. Returns a copy of the stored entry.
    pub fn log_meal(&self, food: &str, amount: f64) -> Result<LogEntry, EngineError> {
        let profile = self
            .catalog
            .lookup(food)
            .ok_or_else(|| EngineError::UnknownFood(food.to_string()))?;
        let macros = scale(profile, amount)?;

        let now = self.clock.now();
        let entry = LogEntry {
            date: now.date(),
            time: now.time(),
            food: food.to_string(),
            amount,
            unit: profile.unit.clone(),
            calories: macros.calories,
            protein: macros.protein,
            fat: macros.fat,
            carbs: macros.carbs,
        };
        self.log.append(entry.clone());
        Ok(entry)
    }

    /// Totals, entries, and the current targets for one calendar date.
    #[must_use]
    pub fn summary(&self, date: NaiveDate) -> TodaySummary {
        let day = self.log.summarize(date);
        TodaySummary {
            date: day.date,
            totals: day.totals,
            targets: self.targets.get(),
            entries: day.entries,
        }
    }

    /// Summary for the clock's current date.
    #[must_use]
    pub fn today_summary(&self) -> TodaySummary {
        self.summary(self.clock.now().date())
    }
}

impl Default for NoshService {
    fn default() -> Self {
        Self::builtin()
    }
}
