use pontocerto::core::calculator::balance::time_bank_balance;
use pontocerto::db::Store;
use pontocerto::db::db_utils::recalc_records;
use pontocerto::db::migrate::{applied_versions, run_pending_migrations};
use pontocerto::models::daily_record::DailyRecord;
use pontocerto::models::settings::Settings;
use pontocerto::models::time_bank::TimeBankEntry;

mod common;
use common::{approx, date, memory_store, standard_day};

#[test]
fn migrations_run_once() {
    let pool = memory_store();

    let versions = applied_versions(&pool.conn).expect("versions");
    assert_eq!(versions.len(), 3);

    let again = run_pending_migrations(&pool.conn).expect("rerun");
    assert_eq!(again, 0);
}

#[test]
fn migration_rows_use_rfc3339_dates() {
    let pool = memory_store();

    let mut stmt = pool
        .conn
        .prepare("SELECT date FROM log WHERE operation = 'migration_applied'")
        .expect("prepare");
    let dates: Vec<String> = stmt
        .query_map([], |row| row.get(0))
        .expect("query")
        .collect::<Result<_, _>>()
        .expect("rows");

    assert_eq!(dates.len(), 3);
    for d in dates {
        assert!(chrono::DateTime::parse_from_rfc3339(&d).is_ok(), "not RFC 3339: {}", d);
    }
}

#[test]
fn record_round_trip_keeps_punch_order_and_ids() {
    let mut pool = memory_store();
    let settings = Settings::default();

    let mut record = DailyRecord::empty(date(2025, 9, 1));
    record.punches = standard_day();
    record.recompute(&settings);
    pool.save_record(&record).expect("save");

    let loaded = pool
        .load_record(date(2025, 9, 1))
        .expect("load")
        .expect("record present");

    assert_eq!(loaded, record);
    assert!(pool.load_record(date(2025, 9, 2)).expect("load").is_none());
}

#[test]
fn saving_again_replaces_punches() {
    let mut pool = memory_store();
    let settings = Settings::default();

    let mut record = DailyRecord::empty(date(2025, 9, 1));
    record.punches = standard_day();
    record.recompute(&settings);
    pool.save_record(&record).expect("save");

    record.punches.truncate(2);
    record.recompute(&settings);
    pool.save_record(&record).expect("save again");

    let loaded = pool.load_record(date(2025, 9, 1)).expect("load").expect("present");
    assert_eq!(loaded.punches.len(), 2);
    assert!(approx(loaded.total_hours, 3.0));
}

#[test]
fn month_query_filters_by_date() {
    let mut pool = memory_store();

    for d in [date(2025, 8, 31), date(2025, 9, 1), date(2025, 9, 30), date(2025, 10, 1)] {
        pool.save_record(&DailyRecord::empty(d)).expect("save");
    }

    let september = pool.load_records_for_month(2025, 9).expect("month");
    assert_eq!(september.len(), 2);
    assert_eq!(pool.load_records().expect("all").len(), 4);
}

#[test]
fn settings_default_then_persist() {
    let mut pool = memory_store();

    assert_eq!(pool.load_settings().expect("defaults"), Settings::default());

    let custom = Settings {
        work_day_hours: 7.5,
        break_hours: 0.5,
    };
    pool.save_settings(&custom).expect("save");
    assert_eq!(pool.load_settings().expect("load"), custom);
}

#[test]
fn partial_settings_merge_over_defaults() {
    let pool = memory_store();
    pool.conn
        .execute("INSERT INTO settings (key, value) VALUES ('break_hours', 0.25)", [])
        .expect("insert");

    let s = pool.load_settings().expect("load");
    assert_eq!(s.work_day_hours, 8.0);
    assert_eq!(s.break_hours, 0.25);
}

#[test]
fn time_bank_keeps_insertion_order() {
    let mut pool = memory_store();

    pool.append_time_bank(&TimeBankEntry::new(date(2025, 9, 1), 2.0, "extra saturday"))
        .expect("append");
    pool.append_time_bank(&TimeBankEntry::new(date(2025, 9, 2), -1.5, "dentist"))
        .expect("append");

    let entries = pool.load_time_bank().expect("load");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].reason, "dentist");
    assert!(approx(time_bank_balance(&entries), 0.5));
}

#[test]
fn recalc_updates_only_changed_records() {
    let mut pool = memory_store();
    let settings = Settings::default();

    let mut worked = DailyRecord::empty(date(2025, 9, 1));
    worked.punches = standard_day();
    worked.recompute(&settings);
    pool.save_record(&worked).expect("save");
    pool.save_record(&DailyRecord::empty(date(2025, 9, 2))).expect("save");

    let shorter_day = Settings {
        work_day_hours: 6.0,
        break_hours: 1.0,
    };
    let changed = recalc_records(&mut pool, &shorter_day, Some((2025, 9))).expect("recalc");
    assert_eq!(changed, 1);

    let loaded = pool.load_record(date(2025, 9, 1)).expect("load").expect("present");
    assert!(approx(loaded.overtime_hours, 2.5));

    assert_eq!(recalc_records(&mut pool, &shorter_day, None).expect("recalc"), 0);
}
