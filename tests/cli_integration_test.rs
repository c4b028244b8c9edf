//! Integration tests for the qa-datagen binary.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn qa_datagen_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_qa-datagen"))
}

fn run_ok(cmd: &mut Command) -> std::process::Output {
    let output = cmd.output().expect("Failed to execute command");
    assert!(
        output.status.success(),
        "Command failed with stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    output
}

#[test]
fn test_seeded_json_export() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.json");

    let output = run_ok(
        qa_datagen_bin()
            .args(["--seed", "42", "--users", "5", "--products", "3", "--orders", "10"])
            .arg("--output")
            .arg(&path),
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Generated 5 users"));
    assert!(stdout.contains("Generated 3 products"));
    assert!(stdout.contains("Generated 10 orders"));
    assert!(stdout.contains("Exported to"));

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        json["statistics"],
        serde_json::json!({"users": 5, "products": 3, "orders": 10})
    );
    assert_eq!(json["generated_at"], "2024-01-01T00:00:00");
}

#[test]
fn test_seeded_runs_are_byte_identical() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first.json");
    let second = dir.path().join("second.json");

    for path in [&first, &second] {
        run_ok(
            qa_datagen_bin()
                .args(["--seed", "7", "--users", "20", "--products", "8", "--orders", "30"])
                .arg("--output")
                .arg(path),
        );
    }

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_sql_format_swaps_extension() {
    let dir = TempDir::new().unwrap();
    let requested = dir.path().join("fixtures.json");

    let output = run_ok(
        qa_datagen_bin()
            .args(["--seed", "1", "--users", "3", "--products", "2", "--orders", "4"])
            .args(["--format", "sql", "--output"])
            .arg(&requested),
    );

    let written = dir.path().join("fixtures.sql");
    assert!(written.exists());
    assert!(!requested.exists());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Exported SQL to"));

    let sql = fs::read_to_string(&written).unwrap();
    assert_eq!(sql.matches("INSERT INTO users ").count(), 3);
    assert_eq!(sql.matches("INSERT INTO orders ").count(), 4);
}

#[test]
fn test_mask_flag() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("masked.json");

    run_ok(
        qa_datagen_bin()
            .args(["--seed", "3", "--users", "10", "--products", "2", "--orders", "5", "--mask"])
            .arg("--output")
            .arg(&path),
    );

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    for user in json["users"].as_array().unwrap() {
        assert!(user["email"].as_str().unwrap().contains("***@"));
        assert!(user["phone"].as_str().unwrap().contains("******"));
    }
}

#[test]
fn test_anonymize_flag_with_salt() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.json");
    let b = dir.path().join("b.json");

    for (path, salt) in [(&a, "one"), (&b, "two")] {
        run_ok(
            qa_datagen_bin()
                .args(["--seed", "3", "--users", "4", "--products", "2", "--orders", "2"])
                .args(["--anonymize", "--salt", salt, "--output"])
                .arg(path),
        );
    }

    let ja: serde_json::Value = serde_json::from_str(&fs::read_to_string(&a).unwrap()).unwrap();
    let jb: serde_json::Value = serde_json::from_str(&fs::read_to_string(&b).unwrap()).unwrap();
    let email_a = ja["users"][0]["email"].as_str().unwrap();
    let email_b = jb["users"][0]["email"].as_str().unwrap();
    assert!(email_a.starts_with("anon_"));
    assert_ne!(email_a, email_b);
    assert_eq!(ja["orders"], jb["orders"]);
}

#[test]
fn test_mask_conflicts_with_anonymize() {
    let output = qa_datagen_bin()
        .args(["--mask", "--anonymize"])
        .output()
        .expect("Failed to execute command");
    assert!(!output.status.success());
}

#[test]
fn test_config_file_with_flag_override() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("datagen.yaml");
    let path = dir.path().join("from-config.json");
    fs::write(
        &config,
        format!(
            "users: 4\nproducts: 2\norders: 6\nseed: 99\nformat: json\noutput: {}\n",
            path.display()
        ),
    )
    .unwrap();

    run_ok(
        qa_datagen_bin()
            .arg("--config")
            .arg(&config)
            .args(["--orders", "9"]),
    );

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        json["statistics"],
        serde_json::json!({"users": 4, "products": 2, "orders": 9})
    );
}

#[test]
fn test_invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("bad.yaml");
    fs::write(&config, "usres: 4\n").unwrap();

    let output = qa_datagen_bin()
        .arg("--config")
        .arg(&config)
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid config"));
}

#[test]
fn test_zero_users_fails_precondition() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("never.json");

    let output = qa_datagen_bin()
        .args(["--seed", "1", "--users", "0", "--output"])
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("generate users and products before orders"));
    assert!(!path.exists());
}

#[test]
fn test_more_users_than_unique_emails_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("never.json");

    let output = qa_datagen_bin()
        .args(["--seed", "1", "--users", "5000000000", "--output"])
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("more unique email values"));
    assert!(!path.exists());
}

#[test]
fn test_unwritable_output_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("out.json");

    let output = qa_datagen_bin()
        .args(["--seed", "1", "--users", "1", "--products", "1", "--orders", "1", "--output"])
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to write"));
}
