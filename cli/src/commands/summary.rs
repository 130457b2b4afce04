use anyhow::Result;

use nosh_core::service::NoshService;

use super::helpers::{fmt_amount, parse_date};

pub(crate) fn cmd_summary(service: &NoshService, date: Option<String>, json: bool) -> Result<()> {
    let date = parse_date(date)?;
    let summary = service.summary(date);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("=== {date} ===\n");

    if summary.entries.is_empty() {
        println!("  (no entries)");
    } else {
        for e in &summary.entries {
            let time = e.time.format("%H:%M");
            let food = &e.food;
            let qty = fmt_amount(e.amount);
            let unit = &e.unit;
            let cal = e.calories;
            let protein = e.protein;
            let fat = e.fat;
            let carbs = e.carbs;
            println!(
                "  [{time}] {food} — {qty} {unit} — {cal:.0} kcal | P:{protein:.1}g F:{fat:.1}g C:{carbs:.1}g"
            );
        }
    }
    println!();

    let t = summary.totals;
    println!(
        "  TOTAL: {:.0} kcal | P:{:.1}g F:{:.1}g C:{:.1}g",
        t.calories, t.protein, t.fat, t.carbs
    );

    let g = summary.targets;
    println!(
        "  TARGET: {:.0} kcal | P:{:.0}g F:{:.0}g C:{:.0}g",
        g.calories, g.protein, g.fat, g.carbs
    );
    println!(
        "  REMAINING: {:.0} kcal | P:{:.1}g F:{:.1}g C:{:.1}g",
        g.calories - t.calories,
        g.protein - t.protein,
        g.fat - t.fat,
        g.carbs - t.carbs
    );

    Ok(())
}
