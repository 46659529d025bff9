use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db_with_punches, pc, setup_test_db};

const DAY: &str = "2025-09-01";

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates_database");

    pc().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_add_and_status() {
    let db_path = setup_test_db("add_and_status");
    init_db_with_punches(&db_path, DAY, &["09:00", "12:00", "13:00", "17:00"]);

    pc().args(["--db", &db_path, "status", "--date", DAY])
        .assert()
        .success()
        .stdout(contains("08h 00m"))
        .stdout(contains("01h 00m"))
        .stdout(contains("End break"));
}

#[test]
fn test_status_empty_day() {
    let db_path = setup_test_db("status_empty_day");
    init_db_with_punches(&db_path, DAY, &[]);

    pc().args(["--db", &db_path, "status", "--date", DAY])
        .assert()
        .success()
        .stdout(contains("Off duty"))
        .stdout(contains("Start workday"))
        .stdout(contains("No punches"));
}

#[test]
fn test_add_rejects_bad_time() {
    let db_path = setup_test_db("add_rejects_bad_time");
    init_db_with_punches(&db_path, DAY, &[]);

    pc().args(["--db", &db_path, "add", DAY, "25:99"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));
}

#[test]
fn test_edit_moves_punch() {
    let db_path = setup_test_db("edit_moves_punch");
    init_db_with_punches(&db_path, DAY, &["09:00", "17:00"]);

    pc().args(["--db", &db_path, "edit", DAY, "2", "18:30"])
        .assert()
        .success()
        .stdout(contains("OUT at 18:30"));

    pc().args(["--db", &db_path, "status", "--date", DAY])
        .assert()
        .success()
        .stdout(contains("09h 30m"));
}

#[test]
fn test_del_with_confirmation() {
    let db_path = setup_test_db("del_with_confirmation");
    init_db_with_punches(&db_path, DAY, &["09:00", "17:00"]);

    pc().args(["--db", &db_path, "del", DAY, "2"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    pc().args(["--db", &db_path, "status", "--date", DAY])
        .assert()
        .success()
        .stdout(contains("Working"));
}

#[test]
fn test_del_cancelled() {
    let db_path = setup_test_db("del_cancelled");
    init_db_with_punches(&db_path, DAY, &["09:00"]);

    pc().args(["--db", &db_path, "del", DAY, "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));
}

#[test]
fn test_del_invalid_position() {
    let db_path = setup_test_db("del_invalid_position");
    init_db_with_punches(&db_path, DAY, &["09:00"]);

    pc().args(["--db", &db_path, "del", DAY, "3"])
        .write_stdin("y\n")
        .assert()
        .failure()
        .stderr(contains("Invalid punch position: 3"));
}

#[test]
fn test_report_json() {
    let db_path = setup_test_db("report_json");
    init_db_with_punches(&db_path, DAY, &["09:00", "17:00"]);

    let output = pc()
        .args(["--db", &db_path, "report", "2025-09", "--json"])
        .output()
        .expect("run report");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON on stdout");

    assert_eq!(json["year"], 2025);
    assert_eq!(json["month"], 9);
    assert_eq!(json["monthlySummary"]["totalHours"].as_f64(), Some(8.0));
    assert_eq!(json["monthlySummary"]["balance"].as_f64(), Some(-168.0));
    assert_eq!(json["chartSeries"].as_array().map(Vec::len), Some(30));
}

#[test]
fn test_report_shift_rolls_year() {
    let db_path = setup_test_db("report_shift_rolls_year");
    init_db_with_punches(&db_path, DAY, &[]);

    pc().args(["--db", &db_path, "report", "2025-01", "--shift", "-1", "--json"])
        .assert()
        .success()
        .stdout(contains("\"year\": 2024").and(contains("\"month\": 12")));
}

#[test]
fn test_report_shift_out_of_range() {
    let db_path = setup_test_db("report_shift_out_of_range");
    init_db_with_punches(&db_path, DAY, &[]);

    pc().args(["--db", &db_path, "report", "--shift", "2147483647"])
        .assert()
        .failure()
        .stderr(contains("Invalid month"));
}

#[test]
fn test_report_text() {
    let db_path = setup_test_db("report_text");
    init_db_with_punches(&db_path, DAY, &["09:00", "19:00"]);

    pc().args(["--db", &db_path, "report", "2025-09"])
        .assert()
        .success()
        .stdout(contains("September 2025"))
        .stdout(contains("01/09 Mon"))
        .stdout(contains("+02h 00m"))
        .stdout(contains("▓"));
}

#[test]
fn test_report_invalid_month() {
    let db_path = setup_test_db("report_invalid_month");
    init_db_with_punches(&db_path, DAY, &[]);

    pc().args(["--db", &db_path, "report", "2025-13"])
        .assert()
        .failure()
        .stderr(contains("Invalid month"));
}

#[test]
fn test_bank_add_and_list() {
    let db_path = setup_test_db("bank_add_and_list");
    init_db_with_punches(&db_path, DAY, &[]);

    pc().args(["--db", &db_path, "bank"])
        .assert()
        .success()
        .stdout(contains("No time bank entries"));

    pc().args([
        "--db", &db_path, "bank", "--add", "-01:30", "--reason", "dentist", "--date", DAY,
    ])
    .assert()
    .success()
    .stdout(contains("-01h 30m"))
    .stdout(contains("dentist"));
}

#[test]
fn test_settings_update() {
    let db_path = setup_test_db("settings_update");
    init_db_with_punches(&db_path, DAY, &[]);

    pc().args(["--db", &db_path, "settings"])
        .assert()
        .success()
        .stdout(contains("08:00"))
        .stdout(contains("01:00"));

    pc().args(["--db", &db_path, "settings", "--work-day", "07:30", "--break", "0.5"])
        .assert()
        .success()
        .stdout(contains("07:30"))
        .stdout(contains("00:30"));

    pc().args(["--db", &db_path, "settings"])
        .assert()
        .success()
        .stdout(contains("07:30"));
}

#[test]
fn test_status_with_extreme_work_day() {
    let db_path = setup_test_db("status_extreme_work_day");
    init_db_with_punches(&db_path, DAY, &["09:00"]);

    pc().args(["--db", &db_path, "settings", "--work-day", "-1e300"])
        .assert()
        .success();

    pc().args(["--db", &db_path, "status", "--date", DAY])
        .assert()
        .success()
        .stdout(contains("--:--"))
        .stdout(contains("Working"));
}

#[test]
fn test_db_commands() {
    let db_path = setup_test_db("db_commands");
    init_db_with_punches(&db_path, DAY, &["09:00", "17:00"]);

    pc().args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Punches"))
        .stdout(contains("2025-09-01"));

    pc().args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));

    pc().args(["--db", &db_path, "settings", "--work-day", "6"])
        .assert()
        .success();

    pc().args(["--db", &db_path, "db", "--recalc", "--period", "2025-09"])
        .assert()
        .success()
        .stdout(contains("1 record(s) updated"));
}

#[test]
fn test_log_print() {
    let db_path = setup_test_db("log_print");
    init_db_with_punches(&db_path, DAY, &["09:00"]);

    pc().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("init"))
        .stdout(contains("add"));
}

#[test]
fn test_config_print() {
    pc().args(["--test", "config", "--print"])
        .assert()
        .success()
        .stdout(contains("chart_width"));
}
