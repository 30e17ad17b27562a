pub mod catalog;
pub mod check;
pub mod list;
pub mod play;
pub mod resume;
pub mod save;

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::thread;

use colored::Colorize;
use sg_fiction::{ChoiceOutcome, Ending, EngineConfig, FileStore, GameSession, PendingCheck, SceneView};
use sg_mechanics::{Ability, Catalog, CheckResult, Outcome, RevealSchedule, clean_item_name, item_bonuses};

/// Load the race and class catalog, falling back to the built-in one.
fn load_catalog(path: Option<&Path>) -> Result<Catalog, String> {
    let Some(path) = path else {
        return Ok(Catalog::builtin());
    };
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read catalog '{}': {e}", path.display()))?;
    Catalog::from_json(&json).map_err(|e| e.to_string())
}

fn engine_config(seed: Option<u64>) -> EngineConfig {
    match seed {
        Some(seed) => EngineConfig::default().with_seed(seed),
        None => EngineConfig::default(),
    }
}

/// Drive a session from stdin until the adventure ends or the player quits.
fn play_session(session: &mut GameSession<FileStore>, animate: bool) -> Result<(), String> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    let mut view = session.resolve().map_err(|e| e.to_string())?;

    loop {
        print_scene(&view, session);

        if let Some(ending) = view.ending {
            print_ending(ending);
            return Ok(());
        }
        if view.choices.is_empty() {
            tracing::warn!(scene = %view.scene_id, "no available choices, stopping");
            println!("  {}", "There is no way forward.".yellow());
            return Ok(());
        }

        let next = loop {
            print!("> ");
            io::stdout().flush().map_err(|e| e.to_string())?;

            line.clear();
            let read = reader.read_line(&mut line).map_err(|e| e.to_string())?;
            let input = line.trim();
            if read == 0 || input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
                tracing::debug!(scene = %session.scene_id(), "saving on quit");
                session.save();
                println!("  Progress saved. Use `sg continue` to resume.");
                return Ok(());
            }

            match input {
                "" => continue,
                "i" | "inv" => print_inventory(session),
                "s" | "stats" => print_stats(session),
                "?" | "help" => print_help(),
                _ => match pick(&view, input) {
                    Some(index) => break index,
                    None => println!("{}", format!("  '{input}' is not a choice").yellow()),
                },
            }
        };

        view = match session.choose(next).map_err(|e| e.to_string())? {
            ChoiceOutcome::Moved(view) => view,
            ChoiceOutcome::Rolling(pending) => {
                reveal(&pending, animate)?;
                session.commit().map_err(|e| e.to_string())?
            }
        };
    }
}

/// Map a 1-based menu number to the scene's choice index.
fn pick(view: &SceneView, input: &str) -> Option<usize> {
    let n: usize = input.parse().ok()?;
    view.choices.get(n.checked_sub(1)?).map(|c| c.index)
}

fn print_scene(view: &SceneView, session: &GameSession<FileStore>) {
    let player = session.player();
    println!();
    println!(
        "  {} | HP {}/{} | Gold {}",
        player.name.bold(),
        player.hp,
        player.max_hp,
        player.gold
    );
    println!();
    for line in view.text.lines() {
        println!("  {line}");
    }
    println!();

    for (n, choice) in view.choices.iter().enumerate() {
        match choice.check {
            Some(check) => println!(
                "  {}. {} {}",
                n + 1,
                choice.text,
                format!("[{} DC {}]", check.ability, check.dc).dimmed()
            ),
            None => println!("  {}. {}", n + 1, choice.text),
        }
    }
}

fn print_ending(ending: Ending) {
    println!();
    match ending {
        Ending::Victory => println!("  {}", "VICTORY".green().bold()),
        Ending::Defeat => println!("  {}", "DEFEAT".red().bold()),
    }
}

fn print_inventory(session: &GameSession<FileStore>) {
    let inventory = &session.player().inventory;
    if inventory.is_empty() {
        println!("  Your pack is empty.");
        return;
    }
    for item in inventory {
        let bonuses: Vec<String> = item_bonuses(item)
            .into_iter()
            .map(|(ability, value)| format!("{value:+} {ability}"))
            .collect();
        if bonuses.is_empty() {
            println!("  - {}", clean_item_name(item));
        } else {
            println!(
                "  - {} {}",
                clean_item_name(item),
                format!("({})", bonuses.join(", ")).cyan()
            );
        }
    }
}

fn print_stats(session: &GameSession<FileStore>) {
    for ability in Ability::ALL {
        println!(
            "  {:<13} {:>2} ({:+})",
            ability.label(),
            session.stat(ability),
            session.modifier(ability)
        );
    }
}

fn print_help() {
    println!("  <number>  take a choice");
    println!("  i         show inventory");
    println!("  s         show ability scores");
    println!("  q         save and quit");
}

/// Show a rolling d20, then the committed result.
fn reveal(pending: &PendingCheck, animate: bool) -> Result<(), String> {
    let schedule = if animate {
        RevealSchedule::default()
    } else {
        RevealSchedule::instant()
    };

    let mut stdout = io::stdout();
    for frame in schedule.frames(&mut rand::rng()) {
        print!("\r  d20 ... {:>2}", frame.face);
        stdout.flush().map_err(|e| e.to_string())?;
        thread::sleep(frame.delay);
    }
    thread::sleep(schedule.settle);

    if schedule.frames > 0 {
        print!("\r");
    }
    println!("  {}", describe_check(&pending.result));
    thread::sleep(schedule.hold);
    Ok(())
}

fn describe_check(result: &CheckResult) -> String {
    let line = result.to_string();
    match result.outcome {
        Outcome::CriticalSuccess | Outcome::Success => line.green().to_string(),
        Outcome::Failure | Outcome::CriticalFailure => line.red().to_string(),
    }
}
