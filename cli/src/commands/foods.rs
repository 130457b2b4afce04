use anyhow::Result;
use serde::Serialize;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Columns},
};

use nosh_core::models::FoodProfile;
use nosh_core::service::NoshService;

use super::helpers::fmt_amount;

pub(crate) fn cmd_foods(service: &NoshService, json: bool) -> Result<()> {
    if json {
        #[derive(Serialize)]
        struct FoodItem<'a> {
            name: &'a str,
            #[serde(flatten)]
            profile: &'a FoodProfile,
        }
        let items: Vec<FoodItem> = service
            .foods()
            .iter()
            .map(|(name, profile)| FoodItem { name, profile })
            .collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    #[derive(Tabled)]
    struct FoodRow {
        #[tabled(rename = "Name")]
        name: String,
        #[tabled(rename = "Unit")]
        unit: String,
        #[tabled(rename = "Std Amount")]
        amount: String,
        #[tabled(rename = "Calories")]
        calories: String,
        #[tabled(rename = "Protein")]
        protein: String,
        #[tabled(rename = "Fat")]
        fat: String,
        #[tabled(rename = "Carbs")]
        carbs: String,
    }

    let rows: Vec<FoodRow> = service
        .foods()
        .iter()
        .map(|(name, p)| FoodRow {
            name: name.to_string(),
            unit: p.unit.clone(),
            amount: fmt_amount(p.standard_amount),
            calories: format!("{:.0}", p.calories),
            protein: format!("{:.1}g", p.protein),
            fat: format!("{:.1}g", p.fat),
            carbs: format!("{:.1}g", p.carbs),
        })
        .collect();

    let table = Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(2..)).with(Alignment::right()))
        .to_string();
    println!("{table}");

    Ok(())
}
