#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable
#![allow(missing_docs)] // integration test crate

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Create a temp directory holding the sample scene via `truhe init`.
fn init_scene() -> (TempDir, String) {
    let dir = TempDir::new().unwrap();
    let scene_dir = dir.path().join("crypt");

    Command::cargo_bin("truhe")
        .unwrap()
        .arg("init")
        .arg(&scene_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created scene"));

    let scene = scene_dir.join("scene.json").display().to_string();
    (dir, scene)
}

#[test]
fn init_refuses_existing_directory() {
    let (dir, _scene) = init_scene();

    Command::cargo_bin("truhe")
        .unwrap()
        .arg("init")
        .arg(dir.path().join("crypt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn tokens_lists_scene_tokens() {
    let (_dir, scene) = init_scene();

    Command::cargo_bin("truhe")
        .unwrap()
        .args(["tokens", &scene])
        .assert()
        .success()
        .stdout(predicate::str::contains("Old Chest"))
        .stdout(predicate::str::contains("Kara"))
        .stdout(predicate::str::contains("3 tokens"));
}

#[test]
fn items_shows_catalog_in_bucket_order() {
    let (_dir, scene) = init_scene();

    let output = Command::cargo_bin("truhe")
        .unwrap()
        .args(["items", &scene, "old chest"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5 items offered"))
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let sword = stdout.find("Rusty Sword").unwrap();
    let dagger = stdout.find("Chipped Dagger").unwrap();
    let tome = stdout.find("Dusty Tome").unwrap();
    let needle = stdout.find("Poison Needle").unwrap();
    let pouch = stdout.find("Gold Pouch").unwrap();
    assert!(sword < dagger && dagger < tome && tome < needle && needle < pouch);
}

#[test]
fn items_rejects_non_environment_token() {
    let (_dir, scene) = init_scene();

    Command::cargo_bin("truhe")
        .unwrap()
        .args(["items", &scene, "Kara"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not an environment token"));
}

#[test]
fn items_rejects_unknown_token() {
    let (_dir, scene) = init_scene();

    Command::cargo_bin("truhe")
        .unwrap()
        .args(["items", &scene, "Dragon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no token named"));
}

#[test]
fn tokens_reports_missing_file() {
    Command::cargo_bin("truhe")
        .unwrap()
        .args(["tokens", "no-such-scene.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn play_runs_a_full_interaction_script() {
    let (_dir, scene) = init_scene();

    Command::cargo_bin("truhe")
        .unwrap()
        .args(["play", &scene])
        .write_stdin("tokens\nselect Kara\nopen Old Chest\nuse 1\nattack\ndamage\nchat\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Selected Kara."))
        .stdout(predicate::str::contains("Rusty Sword"))
        .stdout(predicate::str::contains("attacks with Rusty Sword"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn play_warns_without_selection() {
    let (_dir, scene) = init_scene();

    Command::cargo_bin("truhe")
        .unwrap()
        .args(["play", &scene])
        .write_stdin("open Old Chest\nuse 1\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Select a token"));
}

#[test]
fn play_asks_for_proficiency_when_configured() {
    let (_dir, scene) = init_scene();

    Command::cargo_bin("truhe")
        .unwrap()
        .args(["play", &scene, "--ask-proficiency"])
        .write_stdin("select Kara\nopen Old Chest\nuse 1\nattack\ny\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[y/n/c]"))
        .stdout(predicate::str::contains("attacks with Rusty Sword"));
}

#[test]
fn play_loot_macro_and_gm_sheet() {
    let (_dir, scene) = init_scene();

    Command::cargo_bin("truhe")
        .unwrap()
        .args(["play", &scene, "--gm", "--user", "gm"])
        .write_stdin("select Kara\nopen Old Chest\nuse 5\nopen Old Chest\nsheet\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Macro 'found-gold'"))
        .stdout(predicate::str::contains("--- Old Chest ---"));
}
