use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn compute_sales(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_compute_sales"))
        .current_dir(dir)
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn should_print_usage_for_a_wrong_argument_count() {
    let dir = tempfile::tempdir().unwrap();

    for args in [&[][..], &["only.json"][..], &["a.json", "b.json", "c.json"][..]] {
        let output = compute_sales(dir.path(), args);

        assert_eq!(output.status.code(), Some(1));
        assert_eq!(
            String::from_utf8_lossy(&output.stdout).trim_end(),
            "Usage: compute_sales priceCatalogue.json salesRecord.json"
        );
    }
}

#[test]
fn should_write_the_report_to_stdout_and_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("prices.json"), r#"{"Apple": "1.50", "Bread": 3}"#).unwrap();
    fs::write(
        dir.path().join("sales.json"),
        r#"[{"id": "S1", "items": [{"product": "Apple", "quantity": 4}, {"product": "Milk", "quantity": 2}]}]"#,
    )
    .unwrap();

    let output = compute_sales(dir.path(), &["prices.json", "sales.json"]);
    assert_eq!(output.status.code(), Some(0));

    let persisted = fs::read_to_string(dir.path().join("SalesResults.txt")).unwrap();
    assert_eq!(String::from_utf8_lossy(&output.stdout), format!("{}\n", persisted));
    assert!(persisted.starts_with("=== Sales Computation Results ===\nTotal Cost: $6.00\n"));
    assert!(persisted.ends_with(
        "\n\nErrors encountered during execution:\nProduct 'Milk' not found in price catalogue"
    ));
}

#[test]
fn should_fail_without_a_report_when_sales_are_not_a_list() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("prices.json"), r#"{"Apple": 1}"#).unwrap();
    fs::write(dir.path().join("sales.json"), r#"{"id": "S1"}"#).unwrap();

    let output = compute_sales(dir.path(), &["prices.json", "sales.json"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim_end(),
        "Error: Sales record must be a list of sales"
    );
    assert!(!dir.path().join("SalesResults.txt").exists());
}

#[test]
fn should_name_a_missing_catalogue_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("sales.json"), "[]").unwrap();

    let output = compute_sales(dir.path(), &["missing.json", "sales.json"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim_end(),
        "Error: File 'missing.json' not found"
    );
    assert!(!dir.path().join("SalesResults.txt").exists());
}

#[test]
fn should_print_usage_instead_of_help_or_version() {
    let dir = tempfile::tempdir().unwrap();

    for flag in ["--help", "-h", "-V", "--version"] {
        let output = compute_sales(dir.path(), &[flag]);

        assert_eq!(output.status.code(), Some(1));
        assert_eq!(
            String::from_utf8_lossy(&output.stdout).trim_end(),
            "Usage: compute_sales priceCatalogue.json salesRecord.json"
        );
    }
}

#[test]
fn should_accept_a_catalogue_path_starting_with_a_hyphen() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("-prices.json"), r#"{"Apple": 2}"#).unwrap();
    fs::write(
        dir.path().join("sales.json"),
        r#"[{"id": "S1", "items": [{"product": "Apple", "quantity": 3}]}]"#,
    )
    .unwrap();

    let output = compute_sales(dir.path(), &["-prices.json", "sales.json"]);

    assert_eq!(output.status.code(), Some(0));
    let persisted = fs::read_to_string(dir.path().join("SalesResults.txt")).unwrap();
    assert!(persisted.starts_with("=== Sales Computation Results ===\nTotal Cost: $6.00\n"));
}

#[test]
fn should_fail_when_the_report_file_cannot_be_written() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("prices.json"), "{}").unwrap();
    fs::write(dir.path().join("sales.json"), "[]").unwrap();
    // A directory in place of the report file makes the write fail.
    fs::create_dir(dir.path().join("SalesResults.txt")).unwrap();

    let output = compute_sales(dir.path(), &["prices.json", "sales.json"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.starts_with("=== Sales Computation Results ===\n"));
    assert!(stdout
        .trim_end()
        .lines()
        .last()
        .unwrap()
        .starts_with("Error: Unable to write report to 'SalesResults.txt': "));
}
