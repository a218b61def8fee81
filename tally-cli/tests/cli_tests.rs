//! End-to-end checks of the binary's stream discipline

use std::process::Command;

#[test]
fn test_json_stdout_stays_parseable_when_the_fetch_fails() {
    // discard port, nothing listens there
    let output = Command::new(env!("CARGO_BIN_EXE_tally"))
        .args(["-s", "http://127.0.0.1:9", "-o", "json", "list"])
        .output()
        .expect("binary runs");

    assert!(output.status.success());

    // stdout must hold nothing but the rows
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows, serde_json::json!([]));

    // the diagnostic lands on stderr
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Inventory unavailable"));
}

#[test]
fn test_table_stdout_carries_the_empty_notice_on_fetch_failure() {
    let output = Command::new(env!("CARGO_BIN_EXE_tally"))
        .args(["-s", "http://127.0.0.1:9", "list"])
        .output()
        .expect("binary runs");

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No results found"));
    assert!(!stdout.contains("Inventory unavailable"));
}
