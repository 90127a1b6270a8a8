//! Smoke tests for the headless `play` subcommand.

use std::process::Command;

fn run_play(args: &[&str]) -> std::process::Output {
    run_play_logged(args, "off")
}

fn run_play_logged(args: &[&str], filter: &str) -> std::process::Output {
    let dir = tempfile::tempdir().expect("temp dir");
    Command::new(env!("CARGO_BIN_EXE_tictactoe_board"))
        .arg("play")
        .args(args)
        .current_dir(dir.path())
        .env("RUST_LOG", filter)
        .output()
        .expect("failed to run tictactoe_board")
}

#[test]
fn play_prints_board_and_status() {
    let output = run_play(&["0", "3", "1", "4", "2"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines[0], " X | X | X ");
    assert_eq!(lines[2], " O | O |   ");
    assert_eq!(lines.last().copied(), Some("Player X Wins!"));
}

#[test]
fn play_json_skips_illegal_moves() {
    // Second 4 is occupied, 9 is off the board.
    let output = run_play(&["4", "4", "9", "0", "--json"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["status"], "Next Player: X");
    assert_eq!(v["is_game_over"], false);
    assert_eq!(v["reset_label"], "Reset Game");
    assert_eq!(v["cells"][4]["cell"]["Occupied"], "X");
    assert_eq!(v["cells"][0]["cell"]["Occupied"], "O");
}

#[test]
fn missing_config_file_fails() {
    let output = run_play(&["--config", "does-not-exist.toml", "0"]);
    assert!(!output.status.success());
}

#[test]
fn resolved_settings_are_logged() {
    let output = run_play_logged(&["4"], "info");
    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).expect("non utf8 output");
    assert!(stderr.contains("Settings resolved"), "stderr: {stderr}");
    assert!(stderr.contains("tictactoe_board.log"), "stderr: {stderr}");
    assert!(stderr.contains("Moves replayed"), "stderr: {stderr}");
}
