//! Integration tests for the thornvale CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn thornvale() -> Command {
    Command::cargo_bin("thornvale").unwrap()
}

// ---------------------------------------------------------------------------
// stories
// ---------------------------------------------------------------------------

#[test]
fn stories_lists_the_bundled_adventures() {
    thornvale()
        .arg("stories")
        .assert()
        .success()
        .stdout(predicate::str::contains("pond").and(predicate::str::contains("castle")));
}

// ---------------------------------------------------------------------------
// map
// ---------------------------------------------------------------------------

#[test]
fn map_shows_locations_and_exits() {
    thornvale()
        .args(["map", "pond"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("[Cottage] (start)")
                .and(predicate::str::contains("[Fishing Pond]"))
                .and(predicate::str::contains("--out-->")),
        );
}

#[test]
fn map_marks_blocked_exits() {
    thornvale()
        .args(["map", "castle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[blocked]"));
}

#[test]
fn map_rejects_unknown_stories() {
    thornvale()
        .args(["map", "labyrinth"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown story"));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_describes_the_start_and_quits() {
    thornvale()
        .args(["play", "pond"])
        .write_stdin("look\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("You are standing in a small cottage.")
                .and(predicate::str::contains("THE GAME HAS ENDED.")),
        );
}

#[test]
fn play_runs_a_winning_script() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("walkthrough.txt");
    fs::write(
        &script,
        "take pole\ngo out\ngo south\ncatch fish with pole\neat fish\n",
    )
    .unwrap();

    thornvale()
        .args(["play", "pond", "--script"])
        .arg(&script)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("you've won this version of the game")
                .and(predicate::str::contains("THE GAME HAS ENDED.")),
        );
}

#[test]
fn play_writes_a_transcript() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("in.txt");
    let transcript = dir.path().join("transcript.txt");
    fs::write(&script, "look\ntake pole\nquit\n").unwrap();

    thornvale()
        .args(["play", "pond", "--script"])
        .arg(&script)
        .arg("--transcript")
        .arg(&transcript)
        .assert()
        .success();

    let written = fs::read_to_string(&transcript).unwrap();
    assert_eq!(written, "look\ntake pole\n");
}

#[test]
fn play_without_hints_hides_trigger_phrases() {
    thornvale()
        .args(["play", "castle", "--no-hints"])
        .write_stdin("go out\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("pick rose").not());
}

// ---------------------------------------------------------------------------
// export
// ---------------------------------------------------------------------------

#[test]
fn export_produces_parseable_json() {
    let output = thornvale()
        .args(["export", "pond"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert!(value["locations"].is_array());
}

#[test]
fn export_writes_to_a_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pond.json");

    thornvale()
        .args(["export", "pond", "-o"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to"));

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert!(value["locations"].is_array());
}
