use std::fs;
use std::path::Path;
use std::process::{Command, Output};

/// Run the binary with a clean environment: no feed overrides, no `RUST_LOG`,
/// and an empty config file so the user's own settings never leak in.
fn run(dir: &Path, args: &[&Path]) -> Output {
    let config = dir.join("config.toml");
    fs::write(&config, "").unwrap();

    Command::new(env!("CARGO_BIN_EXE_menu-feed"))
        .arg("--config")
        .arg(&config)
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("MENU_FEED_URL")
        .env_remove("FEED_URL")
        .env_remove("MENU_OUTPUT_PATH")
        .output()
        .unwrap()
}

fn lines(bytes: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(bytes).lines().map(String::from).collect()
}

#[test]
fn test_success_prints_two_lines() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("menu.csv");
    let output = dir.path().join("site").join("menu.json");
    fs::write(
        &source,
        "name,price,updatedAt\nLatte,4.5,2024-06-01\nScone,3,2023-01-01\n",
    )
    .unwrap();

    let out = run(dir.path(), &[&source, &output]);

    assert_eq!(out.status.code(), Some(0));
    let stdout = lines(&out.stdout);
    assert_eq!(stdout.len(), 2);
    assert_eq!(
        stdout[0],
        format!("Wrote 2 menu items to {}", output.display())
    );
    assert_eq!(stdout[1], "Feed last updated at 2024-06-01T00:00:00.000Z");
    assert!(out.stderr.is_empty());
    assert!(output.exists());
}

#[test]
fn test_no_items_prints_one_error_line() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("menu.json");
    let output = dir.path().join("out.json");
    fs::write(&source, r#"{"items":[]}"#).unwrap();

    let out = run(dir.path(), &[&source, &output]);

    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert_eq!(
        lines(&out.stderr),
        vec!["Unable to fetch menu data: No menu items found in feed".to_string()]
    );
    assert!(!output.exists());
}

#[test]
fn test_missing_source_reports_cause_once() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("absent.csv");
    let output = dir.path().join("out.json");

    let out = run(dir.path(), &[&source, &output]);

    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = lines(&out.stderr);
    assert_eq!(stderr.len(), 1);
    assert!(stderr[0].starts_with(&format!(
        "Unable to fetch menu data: Failed to read {}",
        source.display()
    )));
    assert_eq!(stderr[0].matches("(os error 2)").count(), 1);
}
