use std::path::Path;

use colored::Colorize;
use sg_fiction::{CharacterDraft, DirectorySource, FileStore, GameSession};

pub struct PlayArgs<'a> {
    pub adventure: &'a str,
    pub name: &'a str,
    pub race: &'a str,
    pub class: &'a str,
    pub dir: &'a Path,
    pub seed: Option<u64>,
    pub save: &'a Path,
    pub catalog: Option<&'a Path>,
    pub animate: bool,
}

pub fn run(args: &PlayArgs<'_>) -> Result<(), String> {
    let catalog = super::load_catalog(args.catalog)?;
    let character = CharacterDraft::new()
        .with_name(args.name)
        .with_race(args.race)
        .with_class(args.class)
        .confirm(&catalog)
        .map_err(|e| e.to_string())?;

    let source = DirectorySource::new(args.dir);
    let mut session = GameSession::begin(
        &source,
        args.adventure,
        character,
        FileStore::new(args.save),
        super::engine_config(args.seed),
    )
    .map_err(|e| e.to_string())?;

    let player = session.player();
    println!(
        "  {} {} the {} {} sets out on '{}'",
        "Starting".bold(),
        player.name,
        player.race,
        player.class,
        session.adventure().title
    );
    println!("  Type '?' for commands.");

    super::play_session(&mut session, args.animate)
}
