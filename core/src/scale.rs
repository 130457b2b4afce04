use crate::error::EngineError;
use crate::models::{FoodProfile, Macros};

/// Scale a food's macros to a requested amount.
///
/// `factor = amount / standard_amount`, applied linearly to each macro with
/// no rounding. Rounding for display is the caller's concern. The catalog
/// guarantees `standard_amount > 0`, so the division is always defined.
pub fn scale(profile: &FoodProfile, amount: f64) -> Result<Macros, EngineError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(EngineError::InvalidAmount(amount));
    }
    debug_assert!(profile.standard_amount > 0.0);

    let factor = amount / profile.standard_amount;
    Ok(Macros {
        calories: profile.calories * factor,
        protein: profile.protein * factor,
        fat: profile.fat * factor,
        carbs: profile.carbs * factor,
    })
}
