use std::collections::HashMap;

use crate::error::EngineError;
use crate::models::FoodProfile;

/// Builtin reference table: name, unit label, standard amount, then
/// calories/protein/fat/carbs per standard amount.
#[rustfmt::skip]
const BUILTIN_FOODS: &[(&str, &str, f64, f64, f64, f64, f64)] = &[
    ("Chicken Breast", "100g",      100.0, 165.0, 31.0,  3.6,  0.0),
    ("White Rice",     "serving",     1.0, 205.0,  4.3,  0.4, 45.0),
    ("Broccoli",       "cup",        91.0,  31.0,  2.6,  0.3,  6.0),
    ("Peanut Butter",  "tbsp",       32.0, 188.0,  8.0, 16.0,  7.0),
    ("Banana",         "unit",        1.0, 105.0,  1.3,  0.3, 27.0),
    ("Apple",          "unit",        1.0,  95.0,  0.5,  0.3, 25.0),
    ("Egg",            "unit",        1.0,  78.0,  6.3,  5.3,  0.6),
    ("Milk",           "cup",       240.0, 150.0,  8.0,  8.0, 12.0),
    ("Oats",           "cup",        81.0, 150.0,  5.0,  3.0, 27.0),
    ("Paneer",         "100g",      100.0, 265.0, 18.0, 20.0,  4.0),
    ("Chapati",        "piece",       1.0, 120.0,  3.0,  3.6, 20.0),
    ("Dal",            "cup",       100.0, 130.0,  9.0,  1.2, 18.0),
    ("Almonds",        "10 pieces",  10.0,  70.0,  3.0,  6.0,  2.0),
    ("Yogurt",         "cup",       245.0, 100.0,  6.0,  3.0, 12.0),
    ("Potato",         "100g",      100.0,  77.0,  2.0,  0.1, 17.0),
    ("Tofu",           "100g",      100.0,  76.0,  8.0,  4.8,  2.0),
    ("Cheese",         "slice",       1.0, 113.0,  7.0,  9.0,  0.4),
    ("Fish",           "100g",      100.0, 206.0, 22.0, 12.0,  0.0),
    ("Bread",          "slice",       1.0,  80.0,  3.0,  1.0, 14.0),
    ("Pasta",          "cup",       100.0, 160.0,  5.0,  1.0, 31.0),
    ("Olive Oil",      "tbsp",       14.0, 120.0,  0.0, 14.0,  0.0),
    ("Cucumber",       "cup",       100.0,  16.0,  0.7,  0.1,  3.6),
    ("Tomato",         "unit",        1.0,  22.0,  1.0,  0.2,  5.0),
    ("Orange",         "unit",        1.0,  62.0,  1.2,  0.2, 15.0),
    ("Honey",          "tbsp",       21.0,  64.0,  0.0,  0.0, 17.0),
];

/// Immutable food reference data, fixed at process start.
///
/// Lookup is case-sensitive exact match. Iteration preserves load order so
/// callers render the catalog consistently.
#[derive(Debug, Clone)]
pub struct FoodCatalog {
    foods: Vec<(String, FoodProfile)>,
    index: HashMap<String, usize>,
}

impl FoodCatalog {
    /// Build a catalog, validating every profile. A non-positive standard
    /// amount, a negative or non-finite macro value, an empty name, or a
    /// duplicate name is corrupt reference data and fails the whole build.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (String, FoodProfile)>,
    ) -> Result<Self, EngineError> {
        let mut foods: Vec<(String, FoodProfile)> = Vec::new();
        let mut index = HashMap::new();

        for (name, profile) in entries {
            validate_profile(&name, &profile)?;
            if index.contains_key(&name) {
                return Err(EngineError::CorruptCatalog(format!(
                    "duplicate food name '{name}'"
                )));
            }
            index.insert(name.clone(), foods.len());
            foods.push((name, profile));
        }

        Ok(Self { foods, index })
    }

    /// The builtin reference table.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN_FOODS.iter().map(
            |&(name, unit, standard_amount, calories, protein, fat, carbs)| {
                (
                    name.to_string(),
                    FoodProfile {
                        unit: unit.to_string(),
                        standard_amount,
                        calories,
                        protein,
                        fat,
                        carbs,
                    },
                )
            },
        ))
        .expect("builtin food table is valid")
    }

    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&FoodProfile> {
        self.index.get(name).map(|&i| &self.foods[i].1)
    }

    /// Foods in load order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FoodProfile)> {
        self.foods.iter().map(|(name, p)| (name.as_str(), p))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

fn validate_profile(name: &str, profile: &FoodProfile) -> Result<(), EngineError> {
    if name.trim().is_empty() {
        return Err(EngineError::CorruptCatalog(
            "food name must not be empty".to_string(),
        ));
    }
    if !profile.standard_amount.is_finite() || profile.standard_amount <= 0.0 {
        return Err(EngineError::CorruptCatalog(format!(
            "'{name}': standard_amount must be greater than 0 (got {})",
            profile.standard_amount
        )));
    }
    for (field, value) in [
        ("calories", profile.calories),
        ("protein", profile.protein),
        ("fat", profile.fat),
        ("carbs", profile.carbs),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(EngineError::CorruptCatalog(format!(
                "'{name}': {field} must not be negative (got {value})"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(standard_amount: f64, calories: f64) -> FoodProfile {
        FoodProfile {
            unit: "100g".to_string(),
            standard_amount,
            calories,
            protein: 10.0,
            fat: 5.0,
            carbs: 20.0,
        }
    }

    #[test]
    fn test_builtin_loads_all_foods() {
        let catalog = FoodCatalog::builtin();
        assert_eq!(catalog.len(), 25);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_builtin_banana_profile() {
        let catalog = FoodCatalog::builtin();
        let banana = catalog.lookup("Banana").unwrap();
        assert!((banana.standard_amount - 1.0).abs() < f64::EPSILON);
        assert!((banana.calories - 105.0).abs() < f64::EPSILON);
        assert_eq!(banana.unit, "unit");
    }

    #[test]
    fn test_lookup_missing_food() {
        let catalog = FoodCatalog::builtin();
        assert!(catalog.lookup("Nonexistent").is_none());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let catalog = FoodCatalog::builtin();
        assert!(catalog.lookup("Apple").is_some());
        assert!(catalog.lookup("apple").is_none());
    }

    #[test]
    fn test_iteration_preserves_load_order() {
        let catalog = FoodCatalog::builtin();
        let names: Vec<&str> = catalog.iter().map(|(name, _)| name).collect();
        assert_eq!(names[0], "Chicken Breast");
        assert_eq!(names[4], "Banana");
        assert_eq!(names[24], "Honey");
    }

    #[test]
    fn test_zero_standard_amount_rejected() {
        let result = FoodCatalog::from_entries([("Bad".to_string(), profile(0.0, 100.0))]);
        assert!(matches!(result, Err(EngineError::CorruptCatalog(_))));
    }

    #[test]
    fn test_negative_standard_amount_rejected() {
        let result = FoodCatalog::from_entries([("Bad".to_string(), profile(-5.0, 100.0))]);
        assert!(matches!(result, Err(EngineError::CorruptCatalog(_))));
    }

    #[test]
    fn test_negative_macro_rejected() {
        let result = FoodCatalog::from_entries([("Bad".to_string(), profile(100.0, -1.0))]);
        assert!(matches!(result, Err(EngineError::CorruptCatalog(_))));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let result = FoodCatalog::from_entries([
            ("Apple".to_string(), profile(1.0, 95.0)),
            ("Apple".to_string(), profile(1.0, 95.0)),
        ]);
        assert!(matches!(result, Err(EngineError::CorruptCatalog(_))));
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = FoodCatalog::from_entries([("  ".to_string(), profile(1.0, 95.0))]);
        assert!(matches!(result, Err(EngineError::CorruptCatalog(_))));
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = FoodCatalog::from_entries([]).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.lookup("Apple").is_none());
    }
}
