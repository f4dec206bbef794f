#![cfg(feature = "std")]

use std::process::Command;

fn salvo(args: &[&str]) -> serde_json::Value {
    let output = Command::new(env!("CARGO_BIN_EXE_salvo"))
        .args(args)
        .output()
        .expect("failed to run salvo binary");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    serde_json::from_str(stdout.trim()).expect("invalid json")
}

#[test]
fn place_prints_board_and_stats() {
    let v = salvo(&["place", "--seed", "3", "--ship", "1=1"]);
    assert_eq!(v["rows"], 10);
    assert_eq!(v["cols"], 10);
    assert_eq!(v["stats"]["occupied"], 2);
    assert_eq!(v["stats"]["empty"], 98);
    let ones = v["board"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|row| row.as_array().unwrap().iter())
        .filter(|c| **c == 1)
        .count();
    assert_eq!(ones, 2);
}

#[test]
fn place_is_reproducible_with_seed() {
    let a = salvo(&["place", "--seed", "99"]);
    let b = salvo(&["place", "--seed", "99"]);
    assert_eq!(a, b);
}

#[test]
fn simulate_reports_shot_counts() {
    let v = salvo(&["simulate", "--seed", "1", "--games", "3", "--rows", "8", "--cols", "8"]);
    assert_eq!(v["games"], 3);
    let min = v["min_shots"].as_u64().unwrap();
    let max = v["max_shots"].as_u64().unwrap();
    assert!(min <= max && max <= 64);
    // default fleet covers 2 + 3 + 4 + 5 + 4 cells
    assert!(min >= 18);
}

#[test]
fn unknown_ship_is_an_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_salvo"))
        .args(["place", "--ship", "9=1"])
        .output()
        .expect("failed to run salvo binary");
    assert!(!output.status.success());
}
