//! Drives the `foody` binary end to end against a temporary data directory.

use std::path::Path;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use serde_json::Value;

fn foody(workdir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_foody"))
        .current_dir(workdir)
        .env("FOODY_STORE__BACKEND", "jsonl")
        .env_remove("FOODY_LOG")
        .args(["--format", "raw", "--quiet", "--data-dir"])
        .arg(workdir.join("data"))
        .args(args)
        .output()
        .expect("foody binary runs")
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn setup_then_count_and_nearest() {
    let dir = tempfile::tempdir().unwrap();

    let setup = foody(dir.path(), &["setup"]);
    assert!(setup.status.success(), "{}", String::from_utf8_lossy(&setup.stderr));
    let counts = stdout_json(&setup);
    assert_eq!(counts[0]["collection"], "restaurants");
    assert_eq!(counts[0]["count"], 2);
    assert_eq!(counts[5]["collection"], "feedback");

    let count = foody(dir.path(), &["count"]);
    assert!(count.status.success());
    let orders = stdout_json(&count)
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["collection"] == "orders")
        .cloned()
        .unwrap();
    assert_eq!(orders["count"], 3);

    let nearest = foody(
        dir.path(),
        &["nearest", "restaurants", "--lon", "77.2", "--lat", "28.6", "--limit", "1"],
    );
    assert!(nearest.status.success());
    assert_eq!(stdout_json(&nearest)[0]["document"]["id"], "rest_002");
}

#[test]
fn seeding_twice_hits_the_unique_index() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("items.json");
    std::fs::write(
        &file,
        r#"[{"id": "item_100", "restaurantId": "rest_001", "name": "Lassi", "price": 60}]"#,
    )
    .unwrap();
    let file = file.to_string_lossy().into_owned();

    let first = foody(dir.path(), &["seed", "items", &file]);
    assert!(first.status.success());
    assert_eq!(stdout_json(&first)["written"], 1);

    let second = foody(dir.path(), &["seed", "items", &file]);
    assert_eq!(second.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&second.stderr);
    assert!(stderr.starts_with("foody error:"), "{stderr}");
    assert!(stderr.contains("item_100"), "{stderr}");
}

#[test]
fn validate_reports_and_fails_on_bad_documents() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("feedback.json");
    std::fs::write(
        &file,
        r#"[{"id": "f1", "restaurantId": "rest_001", "rating": 4.5},
            {"id": "f2", "restaurantId": "rest_001", "rating": 6}]"#,
    )
    .unwrap();
    let file = file.to_string_lossy().into_owned();

    let output = foody(dir.path(), &["validate", "feedback", &file]);
    assert_eq!(output.status.code(), Some(1));
    let report = stdout_json(&output);
    assert_eq!(report["invalid"], 1);
    assert_eq!(report["documents"][1]["rule"], "range_violation");
    assert_eq!(report["documents"][1]["path"], "rating");
}

#[test]
fn schema_export_is_a_json_schema() {
    let dir = tempfile::tempdir().unwrap();
    let output = foody(dir.path(), &["schema", "order"]);
    assert!(output.status.success());
    let schema = stdout_json(&output);
    assert!(schema["properties"]["amountBreakup"].is_object());
}
