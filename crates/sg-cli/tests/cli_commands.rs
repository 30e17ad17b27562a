//! Integration tests for the sg-cli commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CRYPT: &str = include_str!("../../../demos/sunken-crypt.json");

/// Create a temp directory holding the demo adventure.
fn test_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("crypt.json"), CRYPT).unwrap();
    dir
}

fn save_path(dir: &TempDir) -> PathBuf {
    dir.path().join("save.json")
}

fn sg() -> Command {
    let mut cmd = Command::cargo_bin("sg").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("SG_SAVE").env_remove("SG_LOG");
    cmd
}

fn play(dir: &TempDir) -> Command {
    let mut cmd = sg();
    cmd.args(["play", "crypt.json", "--name", "Ayla", "--race", "elf", "--class", "rogue"])
        .arg("-d")
        .arg(dir.path())
        .arg("--save")
        .arg(save_path(dir))
        .arg("--no-animation");
    cmd
}

fn arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

// ---------------------------------------------------------------------------
// races / classes
// ---------------------------------------------------------------------------

#[test]
fn races_lists_builtin_catalog() {
    sg().arg("races")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Human")
                .and(predicate::str::contains("Elf"))
                .and(predicate::str::contains("Tiefling"))
                .and(predicate::str::contains("3 races")),
        );
}

#[test]
fn classes_lists_builtin_catalog() {
    sg().arg("classes")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Warrior")
                .and(predicate::str::contains("Rogue"))
                .and(predicate::str::contains("+4 DEX"))
                .and(predicate::str::contains("3 classes")),
        );
}

#[test]
fn custom_catalog_is_used() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(
        &path,
        r#"{ "races": [{ "id": "dwarf", "name": "Dwarf", "stats": { "str": 14 } }],
             "classes": [{ "id": "monk", "name": "Monk", "hp": 9 }] }"#,
    )
    .unwrap();

    sg().args(["races", "--catalog", arg(&path)])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dwarf").and(predicate::str::contains("Elf").not()));
}

#[test]
fn broken_catalog_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(&path, r#"{ "races": [], "classes": [] }"#).unwrap();

    sg().args(["classes", "--catalog", arg(&path)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_passes_demo_adventure() {
    let dir = test_dir();
    sg().args(["check", arg(&dir.path().join("crypt.json"))])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("All checks passed for 'The Sunken Crypt'")
                .and(predicate::str::contains("8 scenes")),
        );
}

#[test]
fn check_warns_on_dangling_target() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("adv.json");
    fs::write(
        &path,
        r#"{ "title": "Loose Ends", "scenes": { "start": { "text": "x", "choices": [
            { "text": "Go", "next": "nowhere" }
        ] } } }"#,
    )
    .unwrap();

    sg().args(["check", arg(&path)])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 warning"))
        .stderr(predicate::str::contains("leads to unknown scene 'nowhere'"));
}

#[test]
fn check_fails_without_start_scene() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("adv.json");
    fs::write(&path, r#"{ "scenes": { "intro": { "text": "x" } } }"#).unwrap();

    sg().args(["check", arg(&path)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing 'start' scene"));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_renders_start_and_saves_on_quit() {
    let dir = test_dir();
    play(&dir)
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Ayla the Elf Rogue stands before a crypt")
                .and(predicate::str::contains("1. Pay the ferryman"))
                .and(predicate::str::contains("[STR DC 13]"))
                .and(predicate::str::contains("Progress saved")),
        );

    let saved = fs::read_to_string(save_path(&dir)).unwrap();
    let record: serde_json::Value = serde_json::from_str(&saved).unwrap();
    assert_eq!(record["version"], 5);
    assert_eq!(record["scene_id"], "start");
    assert_eq!(record["player"]["gold"], 10);
}

#[test]
fn play_to_victory_deletes_save() {
    let dir = test_dir();
    // Pay the ferryman, search the reeds, unlock the door.
    play(&dir)
        .write_stdin("1\n3\n1\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("silver key")
                .and(predicate::str::contains("The crypt is yours"))
                .and(predicate::str::contains("VICTORY")),
        );

    assert!(!save_path(&dir).exists());
}

#[test]
fn play_rejects_unknown_menu_entry() {
    let dir = test_dir();
    play(&dir)
        .write_stdin("7\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("'7' is not a choice"));
}

#[test]
fn play_shows_inventory_and_stats() {
    let dir = test_dir();
    play(&dir)
        .write_stdin("1\ni\ns\nq\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("- Elven Cloak (+2 DEX)")
                .and(predicate::str::contains("- Torch"))
                .and(predicate::str::contains("Dexterity")),
        );
}

#[test]
fn play_check_reports_roll() {
    let dir = test_dir();
    play(&dir)
        .args(["--seed", "7"])
        .write_stdin("2\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("STR DC13:"));
}

#[test]
fn play_unknown_race_fails() {
    let dir = test_dir();
    sg().args(["play", "crypt.json", "-n", "Bo", "-r", "orc", "-c", "bard"])
        .arg("-d")
        .arg(dir.path())
        .arg("--save")
        .arg(save_path(&dir))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown race: orc"));
}

#[test]
fn play_missing_adventure_writes_no_save() {
    let dir = test_dir();
    sg().args(["play", "missing.json", "-n", "Bo", "-r", "human", "-c", "bard"])
        .arg("-d")
        .arg(dir.path())
        .arg("--save")
        .arg(save_path(&dir))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load adventure 'missing.json'"));

    assert!(!save_path(&dir).exists());
}

#[test]
fn play_dead_end_logs_warning() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("stuck.json"),
        r#"{ "title": "Stuck", "scenes": { "start": { "text": "A locked room.", "choices": [
            { "text": "Open the door", "next": "start", "requires": "has_key" }
        ] } } }"#,
    )
    .unwrap();

    sg().args(["play", "stuck.json", "-n", "Bo", "-r", "human", "-c", "bard"])
        .arg("-d")
        .arg(dir.path())
        .arg("--save")
        .arg(save_path(&dir))
        .assert()
        .success()
        .stdout(predicate::str::contains("There is no way forward"))
        .stderr(predicate::str::contains("no available choices, stopping"));
}

// ---------------------------------------------------------------------------
// list
// ---------------------------------------------------------------------------

#[test]
fn list_shows_adventure_titles() {
    let dir = test_dir();
    fs::write(dir.path().join("broken.json"), "{ not an adventure").unwrap();
    fs::write(dir.path().join("notes.txt"), "not json at all").unwrap();

    sg().args(["list", "-d", arg(dir.path())])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("crypt.json")
                .and(predicate::str::contains("The Sunken Crypt"))
                .and(predicate::str::contains("1 adventures"))
                .and(predicate::str::contains("notes.txt").not()),
        )
        .stderr(predicate::str::contains("skipping file"));
}

#[test]
fn list_empty_directory() {
    let dir = TempDir::new().unwrap();
    sg().args(["list", "-d", arg(dir.path())])
        .assert()
        .success()
        .stdout(predicate::str::contains("No adventures found"));
}

#[test]
fn list_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    sg().args(["list", "-d", arg(&dir.path().join("nope"))])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read directory"));
}

// ---------------------------------------------------------------------------
// continue
// ---------------------------------------------------------------------------

#[test]
fn continue_resumes_saved_scene() {
    let dir = test_dir();
    play(&dir).write_stdin("1\nq\n").assert().success();

    sg().arg("continue")
        .arg("-d")
        .arg(dir.path())
        .arg("--save")
        .arg(save_path(&dir))
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Continuing 'The Sunken Crypt' as Ayla")
                .and(predicate::str::contains("The island is quiet"))
                .and(predicate::str::contains("Gold 2")),
        );
}

#[test]
fn continue_without_save_fails() {
    let dir = TempDir::new().unwrap();
    sg().arg("continue")
        .arg("--save")
        .arg(save_path(&dir))
        .assert()
        .failure()
        .stderr(predicate::str::contains("no saved adventure"));
}

#[test]
fn continue_with_missing_adventure_clears_save() {
    let dir = test_dir();
    play(&dir).write_stdin("q\n").assert().success();
    fs::remove_file(dir.path().join("crypt.json")).unwrap();

    sg().arg("continue")
        .arg("-d")
        .arg(dir.path())
        .arg("--save")
        .arg(save_path(&dir))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load adventure"));

    assert!(!save_path(&dir).exists());
}

#[test]
fn save_path_from_environment() {
    let dir = test_dir();
    let mut cmd = sg();
    cmd.env("SG_SAVE", save_path(&dir))
        .args(["play", "crypt.json", "-n", "Ayla", "-r", "elf", "-c", "rogue"])
        .arg("-d")
        .arg(dir.path())
        .write_stdin("q\n")
        .assert()
        .success();

    assert!(save_path(&dir).exists());
}

// ---------------------------------------------------------------------------
// save
// ---------------------------------------------------------------------------

#[test]
fn save_shows_summary() {
    let dir = test_dir();
    play(&dir).write_stdin("q\n").assert().success();

    sg().args(["save", "--save", arg(&save_path(&dir))])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("The Sunken Crypt")
                .and(predicate::str::contains("Ayla the Elf Rogue"))
                .and(predicate::str::contains("HP 10/10 | Gold 10 | Items 1"))
                .and(predicate::str::contains("Scene: start"))
                .and(predicate::str::contains("Saved just now")),
        );
}

#[test]
fn save_delete_removes_file() {
    let dir = test_dir();
    play(&dir).write_stdin("q\n").assert().success();

    sg().args(["save", "--delete", "--save", arg(&save_path(&dir))])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted save"));
    assert!(!save_path(&dir).exists());
}

#[test]
fn outdated_save_is_discarded() {
    let dir = TempDir::new().unwrap();
    fs::write(save_path(&dir), r#"{ "version": 4, "player": {} }"#).unwrap();

    sg().args(["save", "--save", arg(&save_path(&dir))])
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved adventure"));
    assert!(!save_path(&dir).exists());
}
