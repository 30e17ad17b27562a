use std::path::Path;

use chrono::Utc;
use colored::Colorize;
use sg_fiction::save::{SAVE_VERSION, format_elapsed, format_saved_ago, peek_save};
use sg_fiction::{FileStore, SaveStore};

pub fn run(save: &Path, delete: bool) -> Result<(), String> {
    let mut store = FileStore::new(save);

    if delete {
        store.clear().map_err(|e| e.to_string())?;
        println!("  Deleted save '{}'", save.display());
        return Ok(());
    }

    let Some(record) = peek_save(&mut store, SAVE_VERSION) else {
        println!("  No saved adventure.");
        return Ok(());
    };

    let player = &record.player;
    println!("  {}", record.adventure_title.bold());
    println!(
        "  {} the {} {}",
        record.character.name, player.race, player.class
    );
    println!(
        "  HP {}/{} | Gold {} | Items {}",
        player.hp,
        player.max_hp,
        player.gold,
        player.inventory.len()
    );
    println!("  Scene: {}", record.scene_id);
    println!(
        "  Played {} | Saved {}",
        format_elapsed(record.elapsed_ms),
        format_saved_ago(record.saved_at, Utc::now())
    );

    Ok(())
}
