use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use sg_fiction::Adventure;

pub fn run(dir: &Path) -> Result<(), String> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| format!("cannot read directory '{}': {e}", dir.display()))?;

    let mut files: Vec<_> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();

    let mut rows = Vec::new();
    for path in &files {
        let parsed = std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|json| Adventure::from_json(&json).map_err(|e| e.to_string()));
        match parsed {
            Ok(adventure) => rows.push((path, adventure)),
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "skipping file"),
        }
    }

    if rows.is_empty() {
        println!("  No adventures found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["File", "Title", "Scenes"]);

    for (path, adventure) in &rows {
        let file = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let title = if adventure.title.is_empty() {
            "—".to_string()
        } else {
            adventure.title.clone()
        };
        table.add_row(vec![file, title, adventure.scenes.len().to_string()]);
    }

    println!("{table}");
    println!();
    println!("  {} adventures", rows.len());

    Ok(())
}
