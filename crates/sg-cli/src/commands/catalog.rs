use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use sg_mechanics::{Ability, AbilityScores};

pub fn races(catalog: Option<&Path>) -> Result<(), String> {
    let catalog = super::load_catalog(catalog)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "STR", "DEX", "CHA", "Description"]);

    for race in &catalog.races {
        let score = |ability| race.stats.get(ability).unwrap_or(10).to_string();
        table.add_row(vec![
            race.id.clone(),
            race.name.clone(),
            score(Ability::Str),
            score(Ability::Dex),
            score(Ability::Cha),
            race.description.clone(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} races", catalog.races.len());

    Ok(())
}

pub fn classes(catalog: Option<&Path>) -> Result<(), String> {
    let catalog = super::load_catalog(catalog)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "HP", "Bonuses", "Description"]);

    for class in &catalog.classes {
        table.add_row(vec![
            class.id.clone(),
            class.name.clone(),
            class.hp.to_string(),
            format_bonuses(&class.stat_bonus),
            class.description.clone(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} classes", catalog.classes.len());

    Ok(())
}

fn format_bonuses(scores: &AbilityScores) -> String {
    let parts: Vec<String> = scores
        .iter()
        .map(|(ability, value)| format!("{value:+} {ability}"))
        .collect();
    if parts.is_empty() {
        "—".to_string()
    } else {
        parts.join(", ")
    }
}
