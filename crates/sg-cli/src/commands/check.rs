use std::path::Path;

use colored::Colorize;
use sg_fiction::Adventure;
use sg_fiction::scene::validate_adventure;

pub fn run(path: &Path) -> Result<(), String> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read '{}': {e}", path.display()))?;
    let adventure = Adventure::from_json(&json).map_err(|e| e.to_string())?;

    let issues = validate_adventure(&adventure);
    for issue in &issues {
        if issue.is_error {
            eprintln!("  {}", issue.to_string().red());
        } else {
            eprintln!("  {}", issue.to_string().yellow());
        }
    }

    let errors = issues.iter().filter(|i| i.is_error).count();
    let warnings = issues.len() - errors;
    if errors > 0 {
        return Err(format!(
            "{errors} error{} in '{}'",
            if errors == 1 { "" } else { "s" },
            path.display()
        ));
    }

    if warnings == 0 {
        println!("  All checks passed for '{}'.", adventure.title);
    } else {
        println!(
            "  '{}' loaded with {} warning{}.",
            adventure.title,
            warnings,
            if warnings == 1 { "" } else { "s" }
        );
    }
    println!("  {} scenes", adventure.scenes.len());

    Ok(())
}
