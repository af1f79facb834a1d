use anyhow::Result;
use std::process::{Command, Output};

#[path = "../common/mod.rs"]
mod common;
use common::create_sample_csv;

fn csvq(args: &[&str]) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_csvq")).args(args).output()?)
}

/// Test that the CLI filters and prints a table
#[test]
fn test_cli_where() -> Result<()> {
    let file = create_sample_csv()?;
    let path = file.path().to_string_lossy().to_string();

    let output = csvq(&[path.as_str(), "--where", "price>500"])?;
    assert!(output.status.success(), "CLI query failed");

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("| name"), "Header not found in output");
    assert!(stdout.contains("iphone 15 pro"));
    assert!(stdout.contains("galaxy s23 ultra"));
    assert!(!stdout.contains("redmi note 12"));
    Ok(())
}

/// Test the --file flag together with an aggregate
#[test]
fn test_cli_aggregate() -> Result<()> {
    let file = create_sample_csv()?;
    let path = file.path().to_string_lossy().to_string();

    let output = csvq(&["--file", path.as_str(), "--aggregate", "avg=rating"])?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Avg rating: 4.766667"), "Aggregate line missing: {stdout}");
    Ok(())
}

#[test]
fn test_cli_no_matches_succeeds() -> Result<()> {
    let file = create_sample_csv()?;
    let path = file.path().to_string_lossy().to_string();

    let output = csvq(&[path.as_str(), "--where", "brand=nokia"])?;
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    Ok(())
}

#[test]
fn test_cli_missing_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("missing.csv").to_string_lossy().to_string();

    let output = csvq(&[path.as_str()])?;
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr)?;
    assert_eq!(stderr.lines().count(), 1, "expected one error line: {stderr}");
    assert!(stderr.starts_with("Error: File not found"));
    Ok(())
}

#[test]
fn test_cli_invalid_where() -> Result<()> {
    let file = create_sample_csv()?;
    let path = file.path().to_string_lossy().to_string();

    let output = csvq(&[path.as_str(), "--where", "price"])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr)?;
    assert_eq!(
        stderr,
        "Error: Invalid filter 'price': use column<value, column>value or column=value\n"
    );
    Ok(())
}

#[test]
fn test_cli_invalid_aggregate() -> Result<()> {
    let file = create_sample_csv()?;
    let path = file.path().to_string_lossy().to_string();

    let output = csvq(&[path.as_str(), "--aggregate", "avg-rating"])?;
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr)?;
    assert_eq!(
        stderr,
        "Error: Invalid aggregate 'avg-rating': use function=column, for example avg=rating\n"
    );
    Ok(())
}
