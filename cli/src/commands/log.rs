use anyhow::Result;

use nosh_core::service::NoshService;

use super::helpers::fmt_amount;

pub(crate) fn cmd_log(service: &NoshService, food: &str, amount: f64, json: bool) -> Result<()> {
    let entry = service.log_meal(food, amount)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entry)?);
        return Ok(());
    }

    let cal = entry.calories;
    let name = &entry.food;
    println!("Logged {cal:.0} kcal from {name}!");

    let qty = fmt_amount(entry.amount);
    let unit = &entry.unit;
    let protein = entry.protein;
    let fat = entry.fat;
    let carbs = entry.carbs;
    println!("  {qty} {unit} — P:{protein:.1}g F:{fat:.1}g C:{carbs:.1}g");

    Ok(())
}
