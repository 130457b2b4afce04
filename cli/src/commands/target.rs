use anyhow::{Result, bail};

use nosh_core::models::{TargetUpdate, Targets};
use nosh_core::service::NoshService;

pub(crate) fn cmd_target_show(service: &NoshService, json: bool) -> Result<()> {
    print_targets(&service.targets(), json)
}

pub(crate) fn cmd_target_set(
    service: &NoshService,
    calories: Option<f64>,
    protein: Option<f64>,
    fat: Option<f64>,
    carbs: Option<f64>,
    json: bool,
) -> Result<()> {
    let update = TargetUpdate {
        calories,
        protein,
        fat,
        carbs,
    };
    if update.is_empty() {
        bail!("At least one of --calories, --protein, --fat, --carbs must be provided");
    }

    let updated = service.update_targets(&update)?;

    if !json {
        println!("Targets updated.");
    }
    print_targets(&updated, json)
}

fn print_targets(targets: &Targets, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(targets)?);
        return Ok(());
    }
    let cal = targets.calories;
    let protein = targets.protein;
    let fat = targets.fat;
    let carbs = targets.carbs;
    println!("  Calories: {cal:.0} kcal");
    println!("  Protein:  {protein:.0} g");
    println!("  Fat:      {fat:.0} g");
    println!("  Carbs:    {carbs:.0} g");
    Ok(())
}
