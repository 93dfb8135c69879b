use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn budget(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("budget").unwrap();
    cmd.env("BUDGET_TRACKER_DATA_DIR", data_dir);
    cmd.env_remove("RUST_LOG");
    cmd
}

fn add(data_dir: &Path, args: &[&str]) {
    budget(data_dir).arg("add").args(args).assert().success();
}

#[test]
fn init_creates_settings_and_database() {
    let temp = TempDir::new().unwrap();

    budget(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"))
        .stdout(predicate::str::contains("Stored transactions: 0"));

    assert!(temp.path().join("config.json").exists());
    assert!(temp.path().join("data").exists());
}

#[test]
fn add_then_list_newest_first() {
    let temp = TempDir::new().unwrap();
    add(
        temp.path(),
        &["income", "50000", "-c", "Salary", "-d", "2024-01-05"],
    );
    add(
        temp.path(),
        &["expense", "8000", "-c", "Groceries", "-d", "2024-02-01"],
    );

    let output = budget(temp.path()).arg("list").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    let groceries = stdout.find("Groceries").unwrap();
    let salary = stdout.find("Salary").unwrap();
    assert!(groceries < salary);
    assert!(stdout.contains("2 transaction(s)"));
}

#[test]
fn add_rejects_non_positive_amount() {
    let temp = TempDir::new().unwrap();

    budget(temp.path())
        .args(["add", "expense", "0", "-c", "Rent"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error:"));
}

#[test]
fn add_rejects_unknown_kind() {
    let temp = TempDir::new().unwrap();

    budget(temp.path())
        .args(["add", "transfer", "100", "-c", "Rent"])
        .assert()
        .failure();
}

#[test]
fn import_csv_and_summarize_month() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("march.csv");
    fs::write(
        &file,
        "type,category,amount,currency,date,notes\n\
         income,Salary,50000,PKR,2024-03-01,Monthly salary\n\
         expense,Rent,15000,PKR,2024-03-02,\n\
         expense,Groceries,8000,PKR,2024-03-09,Weekly groceries\n",
    )
    .unwrap();

    budget(temp.path())
        .arg("import")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("File processed successfully!"))
        .stdout(predicate::str::contains("Imported 3 transaction(s)"));

    budget(temp.path())
        .args(["summary", "--year", "2024", "--month", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("50000.00"))
        .stdout(predicate::str::contains("27000.00"))
        .stdout(predicate::str::contains("Rent"));
}

#[test]
fn import_reports_missing_columns_in_order() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("bad.csv");
    fs::write(&file, "type,category,date\nincome,Salary,2024-03-01\n").unwrap();

    budget(temp.path())
        .arg("import")
        .arg(&file)
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: Missing required columns: amount, currency",
        ));

    budget(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found."));
}

#[test]
fn import_rejects_bad_amount_without_storing() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("bad.csv");
    fs::write(
        &file,
        "type,category,amount,currency,date\n\
         income,Salary,50000,PKR,2024-03-01\n\
         expense,Rent,lots,PKR,2024-03-02\n",
    )
    .unwrap();

    budget(temp.path())
        .arg("import")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid data types in amount or date columns"));

    budget(temp.path())
        .arg("list")
        .assert()
        .stdout(predicate::str::contains("No transactions found."));
}

#[test]
fn import_rejects_unsupported_extension() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("data.txt");
    fs::write(&file, "type,category\n").unwrap();

    budget(temp.path())
        .arg("import")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file format"));
}

#[test]
fn import_dry_run_stores_nothing() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("rows.csv");
    fs::write(
        &file,
        "type,category,amount,currency,date\nexpense,Fuel,1200,PKR,2024-04-01\n",
    )
    .unwrap();

    budget(temp.path())
        .args(["import", "--dry-run"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Fuel"))
        .stdout(predicate::str::contains("1 row(s) would be imported"));

    budget(temp.path())
        .arg("list")
        .assert()
        .stdout(predicate::str::contains("No transactions found."));
}

#[test]
fn export_writes_default_files() {
    let temp = TempDir::new().unwrap();
    add(
        temp.path(),
        &["income", "50000", "-c", "Salary", "-d", "2024-01-05"],
    );

    budget(temp.path())
        .args(["export", "xlsx"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 transaction(s)"));
    assert!(temp
        .path()
        .join("exports")
        .join("budget_tracker_all.xlsx")
        .exists());

    budget(temp.path())
        .args(["export", "pdf", "--year", "2024", "--month", "1"])
        .assert()
        .success();
    let pdf = temp.path().join("exports").join("budget_report_January_2024.pdf");
    assert!(fs::read(pdf).unwrap().starts_with(b"%PDF"));
}

#[test]
fn exported_template_imports_cleanly() {
    let temp = TempDir::new().unwrap();
    let template = temp.path().join("template.xlsx");

    budget(temp.path())
        .args(["export", "template"])
        .arg(&template)
        .assert()
        .success()
        .stdout(predicate::str::contains("Template written to"));

    budget(temp.path())
        .arg("import")
        .arg(&template)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 4 transaction(s)"));
}

#[test]
fn audit_lists_recorded_operations() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), &["expense", "300", "-c", "Tea"]);

    budget(temp.path())
        .arg("audit")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE"));
}

#[test]
fn config_rejects_blank_default_currency() {
    let temp = TempDir::new().unwrap();

    budget(temp.path())
        .args(["config", "--default-currency", "  "])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Currency code cannot be empty"));

    budget(temp.path())
        .args(["add", "expense", "300", "-c", "Tea"])
        .assert()
        .success();
}

#[test]
fn oversized_amounts_are_rejected_and_reports_keep_working() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("huge.csv");
    fs::write(
        &file,
        "type,category,amount,currency,date\n\
         income,Windfall,50000000000000000000000000000,PKR,2024-01-01\n\
         income,Windfall,50000000000000000000000000000,PKR,2024-01-02\n",
    )
    .unwrap();

    budget(temp.path())
        .arg("import")
        .arg(&file)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("too large"));

    budget(temp.path())
        .args(["add", "income", "50000000000000000000000000000", "-c", "Windfall"])
        .assert()
        .code(1);

    budget(temp.path()).arg("summary").assert().success();
    budget(temp.path()).arg("trend").assert().success();
}
