use std::sync::{Mutex, PoisonError};

use crate::error::EngineError;
use crate::models::{TargetUpdate, Targets};

/// The process-wide daily targets, guarded so a reader always sees a fully
/// old or fully new set, never a field-by-field mix.
#[derive(Debug)]
pub struct TargetStore {
    current: Mutex<Targets>,
}

impl TargetStore {
    #[must_use]
    pub fn new(initial: Targets) -> Self {
        Self {
            current: Mutex::new(initial),
        }
    }

    /// Snapshot copy of the current targets.
    #[must_use]
    pub fn get(&self) -> Targets {
        *self
            .current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply a partial update and return the resulting full set.
    ///
    /// Every supplied field is validated before any state is touched, so an
    /// invalid field rejects the whole update. All accepted fields are
    /// written under one lock acquisition.
    pub fn update(&self, update: &TargetUpdate) -> Result<Targets, EngineError> {
        for (field, value) in [
            ("calories", update.calories),
            ("protein", update.protein),
            ("fat", update.fat),
            ("carbs", update.carbs),
        ] {
            if let Some(value) = value {
                if !value.is_finite() || value < 0.0 {
                    return Err(EngineError::InvalidTarget { field, value });
                }
            }
        }

        let mut current = self
            .current
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(calories) = update.calories {
            current.calories = calories;
        }
        if let Some(protein) = update.protein {
            current.protein = protein;
        }
        if let Some(fat) = update.fat {
            current.fat = fat;
        }
        if let Some(carbs) = update.carbs {
            current.carbs = carbs;
        }
        Ok(*current)
    }
}

impl Default for TargetStore {
    fn default() -> Self {
        Self::new(Targets::default())
    }
}
