#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use pontocerto::db::initialize::init_db;
use pontocerto::db::pool::DbPool;
use pontocerto::models::punch::Punch;
use pontocerto::models::punch_kind::PunchKind;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn pc() -> Command {
    cargo_bin_cmd!("pontocerto")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_pontocerto.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// `--test init` on a fresh DB, then the given punches added on `date`.
pub fn init_db_with_punches(db_path: &str, date: &str, times: &[&str]) {
    pc().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    for t in times {
        pc().args(["--db", db_path, "add", date, t])
            .assert()
            .success();
    }
}

/// Migrated in-memory store
pub fn memory_store() -> DbPool {
    let pool = DbPool::in_memory().expect("open in-memory db");
    init_db(&pool.conn).expect("run migrations");
    pool
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).single().expect("valid instant")
}

pub fn punch(kind: PunchKind, h: u32, min: u32) -> Punch {
    Punch::new(kind, at(2025, 9, 1, h, min))
}

/// Standard day: 09:00 in, 12:00 out, 12:30 in, 18:00 out (8.5h worked, 0.5h break)
pub fn standard_day() -> Vec<Punch> {
    vec![
        punch(PunchKind::In, 9, 0),
        punch(PunchKind::Out, 12, 0),
        punch(PunchKind::In, 12, 30),
        punch(PunchKind::Out, 18, 0),
    ]
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
