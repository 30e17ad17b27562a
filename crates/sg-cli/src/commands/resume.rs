use std::path::Path;

use chrono::Utc;
use colored::Colorize;
use sg_fiction::save::{format_elapsed, format_saved_ago, peek_save};
use sg_fiction::{DirectorySource, FileStore, GameSession};

pub fn run(
    dir: &Path,
    seed: Option<u64>,
    save: &Path,
    catalog: Option<&Path>,
    animate: bool,
) -> Result<(), String> {
    let catalog = super::load_catalog(catalog)?;
    let config = super::engine_config(seed);
    let mut store = FileStore::new(save);

    let Some(record) = peek_save(&mut store, config.save_version) else {
        return Err("no saved adventure to continue".into());
    };

    let source = DirectorySource::new(dir);
    let Some(mut session) =
        GameSession::resume(&source, store, &catalog, config).map_err(|e| e.to_string())?
    else {
        return Err("no saved adventure to continue".into());
    };

    println!(
        "  {} '{}' as {} ({} played, saved {})",
        "Continuing".bold(),
        record.adventure_title,
        record.character.name,
        format_elapsed(record.elapsed_ms),
        format_saved_ago(record.saved_at, Utc::now()),
    );
    println!("  Type '?' for commands.");

    super::play_session(&mut session, animate)
}
