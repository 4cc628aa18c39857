use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use roi_calc::export::import_from_json;

fn roi(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("roi").unwrap();
    cmd.env("ROI_CALC_DATA_DIR", data_dir.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

const DFY_ARGS: &[&str] = &[
    "--plan",
    "dfy",
    "--trucks",
    "40",
    "--empty-trucks",
    "3",
    "--profit-per-truck",
    "$4,000",
    "--marketing",
    "2,000",
    "--dfy-monthly",
    "$1,000",
    "--drivers-needed",
    "5",
    "--ad-spend-per-driver",
    "200",
];

#[test]
fn test_calc_prints_report_and_savings() {
    let data_dir = TempDir::new().unwrap();
    roi(&data_dir)
        .arg("calc")
        .args(DFY_ARGS)
        .args(["--company", "Acme Freight"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme Freight"))
        .stdout(predicate::str::contains("Savings / mo."))
        .stdout(predicate::str::contains("$12,000"))
        .stdout(predicate::str::contains("Projected savings / yr.: $144,000"));
}

#[test]
fn test_calc_summary_prints_table() {
    let data_dir = TempDir::new().unwrap();
    roi(&data_dir)
        .arg("calc")
        .args(DFY_ARGS)
        .arg("--summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Savings"))
        .stdout(predicate::str::contains("$168,000"))
        .stdout(predicate::str::contains("Company:").not());
}

#[test]
fn test_calc_dwy_counts_fee_once_per_year() {
    let data_dir = TempDir::new().unwrap();
    roi(&data_dir)
        .args([
            "calc",
            "--plan",
            "dwy",
            "--dwy-one-time",
            "12000",
            "--amortization-months",
            "24",
            "--drivers-needed",
            "5",
            "--ad-spend-per-driver",
            "200",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("$24,000"))
        .stdout(predicate::str::contains("Projected savings / yr.: -$24,000"));
}

#[test]
fn test_calc_empty_form_is_all_zero() {
    let data_dir = TempDir::new().unwrap();
    roi(&data_dir)
        .arg("calc")
        .assert()
        .success()
        .stdout(predicate::str::contains("Projected savings / yr.: $0"));
}

#[test]
fn test_invalid_plan_is_rejected() {
    let data_dir = TempDir::new().unwrap();
    roi(&data_dir)
        .args(["calc", "--plan", "monthly"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown plan"));
}

#[test]
fn test_export_json_round_trips() {
    let data_dir = TempDir::new().unwrap();
    let output = data_dir.path().join("acme.json");

    roi(&data_dir)
        .arg("export")
        .arg(&output)
        .args(["--format", "json"])
        .args(DFY_ARGS)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported JSON"));

    let contents = std::fs::read_to_string(&output).unwrap();
    let export = import_from_json(&contents).unwrap();
    assert_eq!(export.metrics.yearly_savings, 144000.0);
    assert_eq!(export.worksheet.inputs.profit_per_truck_per_month, "$4,000");
}

#[test]
fn test_export_document_from_worksheet_file() {
    let data_dir = TempDir::new().unwrap();
    let sheet = data_dir.path().join("sheet.yaml");
    std::fs::write(
        &sheet,
        "company_name: Acme Freight\ninputs:\n  plan: DWY\n  dwy_one_time: 6000\n  dwy_amortization_months: 12\n",
    )
    .unwrap();
    let output = data_dir.path().join("out").join("report.txt");

    roi(&data_dir)
        .arg("export")
        .arg(&output)
        .arg("--from")
        .arg(&sheet)
        .assert()
        .success();

    let document = std::fs::read_to_string(&output).unwrap();
    assert!(document.contains("Acme Freight"));
    assert!(document.contains("DWY (One-time)"));
    assert!(document.contains("$500"));
}

#[test]
fn test_export_csv() {
    let data_dir = TempDir::new().unwrap();
    let output = data_dir.path().join("metrics.csv");

    roi(&data_dir)
        .arg("export")
        .arg(&output)
        .args(["--format", "csv"])
        .args(DFY_ARGS)
        .assert()
        .success();

    let contents = std::fs::read_to_string(&output).unwrap();
    assert!(contents.contains("144000.00"));
}

#[test]
fn test_print_requires_document_format() {
    let data_dir = TempDir::new().unwrap();
    let output = data_dir.path().join("acme.json");

    roi(&data_dir)
        .arg("export")
        .arg(&output)
        .args(["--format", "json", "--print"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--print is only available"));

    assert!(!output.exists());
}

#[test]
fn test_invalid_date_format_setting_is_reported() {
    let data_dir = TempDir::new().unwrap();
    std::fs::write(data_dir.path().join("config.json"), r#"{"date_format":"%Q"}"#).unwrap();

    roi(&data_dir)
        .args(["calc", "--empty-trucks", "3"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid date_format"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn test_unsupported_worksheet_extension() {
    let data_dir = TempDir::new().unwrap();
    let sheet = data_dir.path().join("sheet.toml");
    std::fs::write(&sheet, "trucks = 4").unwrap();

    roi(&data_dir)
        .arg("calc")
        .arg("--from")
        .arg(&sheet)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported worksheet file"));
}

#[test]
fn test_template_yaml() {
    let data_dir = TempDir::new().unwrap();
    roi(&data_dir)
        .arg("template")
        .assert()
        .success()
        .stdout(predicate::str::contains("company_name"))
        .stdout(predicate::str::contains("dwy_amortization_months"));
}

#[test]
fn test_template_json_is_loadable() {
    let data_dir = TempDir::new().unwrap();
    let output = roi(&data_dir)
        .args(["template", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let sheet = data_dir.path().join("blank.json");
    std::fs::write(&sheet, &output.stdout).unwrap();

    roi(&data_dir)
        .arg("calc")
        .arg("--from")
        .arg(&sheet)
        .assert()
        .success();
}

#[test]
fn test_config_init_writes_settings() {
    let data_dir = TempDir::new().unwrap();

    roi(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("roi config init"));

    roi(&data_dir)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default settings"));

    assert!(data_dir.path().join("config.json").exists());

    roi(&data_dir)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exist"));
}

#[test]
fn test_no_command_prints_hint() {
    let data_dir = TempDir::new().unwrap();
    roi(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("roi --help"));
}
