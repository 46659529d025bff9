use pontocerto::core::punch::PunchLogic;
use pontocerto::core::status::{ClockState, clock_status};
use pontocerto::db::Store;
use pontocerto::errors::AppError;
use pontocerto::models::daily_record::DailyRecord;
use pontocerto::models::punch_kind::PunchKind;
use pontocerto::models::settings::Settings;
use uuid::Uuid;

mod common;
use common::{approx, at, date, memory_store};

#[test]
fn punch_now_toggles_kind() {
    let mut pool = memory_store();
    let settings = Settings::default();
    let d = date(2025, 9, 1);

    let first = PunchLogic::punch_now(&mut pool, d, at(2025, 9, 1, 9, 0), &settings, false).expect("punch");
    let second = PunchLogic::punch_now(&mut pool, d, at(2025, 9, 1, 12, 0), &settings, false).expect("punch");
    let third = PunchLogic::punch_now(&mut pool, d, at(2025, 9, 1, 13, 0), &settings, false).expect("punch");

    assert_eq!(first.kind, PunchKind::In);
    assert_eq!(second.kind, PunchKind::Out);
    assert_eq!(third.kind, PunchKind::In);

    let record = pool.load_record(d).expect("load").expect("present");
    assert_eq!(record.punches.len(), 3);
    assert!(approx(record.total_hours, 3.0));
    assert!(approx(record.break_hours, 1.0));
}

#[test]
fn end_workday_forces_out() {
    let mut pool = memory_store();
    let settings = Settings::default();
    let d = date(2025, 9, 1);

    PunchLogic::punch_now(&mut pool, d, at(2025, 9, 1, 9, 0), &settings, false).expect("in");
    PunchLogic::punch_now(&mut pool, d, at(2025, 9, 1, 12, 0), &settings, false).expect("out");
    let forced = PunchLogic::punch_now(&mut pool, d, at(2025, 9, 1, 17, 0), &settings, true).expect("end");

    assert_eq!(forced.kind, PunchKind::Out);
}

#[test]
fn add_infers_kind_from_last_stored_punch_and_sorts() {
    let mut pool = memory_store();
    let settings = Settings::default();
    let d = date(2025, 9, 1);

    PunchLogic::add(&mut pool, d, at(2025, 9, 1, 9, 0), &settings).expect("add");
    PunchLogic::add(&mut pool, d, at(2025, 9, 1, 18, 0), &settings).expect("add");
    let late_entry = PunchLogic::add(&mut pool, d, at(2025, 9, 1, 12, 0), &settings).expect("add");

    // last stored punch was the 18:00 OUT
    assert_eq!(late_entry.kind, PunchKind::In);

    let record = pool.load_record(d).expect("load").expect("present");
    let times: Vec<_> = record.punches.iter().map(|p| p.timestamp).collect();
    assert_eq!(times, vec![at(2025, 9, 1, 9, 0), at(2025, 9, 1, 12, 0), at(2025, 9, 1, 18, 0)]);

    // IN 09:00, IN 12:00, OUT 18:00: only the second pair counts
    assert!(approx(record.total_hours, 6.0));
}

#[test]
fn edit_moves_punch_and_keeps_kind() {
    let mut pool = memory_store();
    let settings = Settings::default();
    let d = date(2025, 9, 1);

    PunchLogic::add(&mut pool, d, at(2025, 9, 1, 9, 0), &settings).expect("add");
    let out = PunchLogic::add(&mut pool, d, at(2025, 9, 1, 17, 0), &settings).expect("add");

    let edited = PunchLogic::edit(&mut pool, d, out.id, at(2025, 9, 1, 18, 0), &settings).expect("edit");
    assert_eq!(edited.id, out.id);
    assert_eq!(edited.kind, PunchKind::Out);

    let record = pool.load_record(d).expect("load").expect("present");
    assert!(approx(record.total_hours, 9.0));
    assert!(approx(record.overtime_hours, 1.0));
}

#[test]
fn edit_unknown_id_fails() {
    let mut pool = memory_store();
    let settings = Settings::default();
    let d = date(2025, 9, 1);
    PunchLogic::add(&mut pool, d, at(2025, 9, 1, 9, 0), &settings).expect("add");

    let err = PunchLogic::edit(&mut pool, d, Uuid::new_v4(), at(2025, 9, 1, 10, 0), &settings).unwrap_err();
    assert!(matches!(err, AppError::PunchNotFound(_)));
}

#[test]
fn delete_keeps_an_empty_record() {
    let mut pool = memory_store();
    let settings = Settings::default();
    let d = date(2025, 9, 1);

    let only = PunchLogic::add(&mut pool, d, at(2025, 9, 1, 9, 0), &settings).expect("add");
    PunchLogic::delete(&mut pool, d, only.id, &settings).expect("delete");

    let record = pool.load_record(d).expect("load").expect("record kept");
    assert!(record.punches.is_empty());
    assert_eq!(record.total_hours, 0.0);
}

#[test]
fn delete_errors() {
    let mut pool = memory_store();
    let settings = Settings::default();
    let d = date(2025, 9, 1);

    let err = PunchLogic::delete(&mut pool, d, Uuid::new_v4(), &settings).unwrap_err();
    assert!(matches!(err, AppError::NoPunchesForDate(_)));

    PunchLogic::add(&mut pool, d, at(2025, 9, 1, 9, 0), &settings).expect("add");
    let err = PunchLogic::delete(&mut pool, d, Uuid::new_v4(), &settings).unwrap_err();
    assert!(matches!(err, AppError::PunchNotFound(_)));
}

#[test]
fn resolve_index_is_one_based() {
    let mut record = DailyRecord::empty(date(2025, 9, 1));
    record.punches = common::standard_day();

    assert_eq!(PunchLogic::resolve_index(&record, 1).expect("first"), record.punches[0].id);
    assert_eq!(PunchLogic::resolve_index(&record, 4).expect("last"), record.punches[3].id);
    assert!(matches!(
        PunchLogic::resolve_index(&record, 0),
        Err(AppError::InvalidPunchIndex(0))
    ));
    assert!(matches!(
        PunchLogic::resolve_index(&record, 5),
        Err(AppError::InvalidPunchIndex(5))
    ));
}

#[test]
fn load_day_recomputes_without_writing() {
    let mut pool = memory_store();
    let d = date(2025, 9, 1);

    PunchLogic::add(&mut pool, d, at(2025, 9, 1, 9, 0), &Settings::default()).expect("add");
    PunchLogic::add(&mut pool, d, at(2025, 9, 1, 17, 0), &Settings::default()).expect("add");

    let shorter = Settings {
        work_day_hours: 6.0,
        break_hours: 1.0,
    };
    let view = PunchLogic::load_day(&pool, d, &shorter).expect("load day");
    assert!(approx(view.overtime_hours, 2.0));

    let stored = pool.load_record(d).expect("load").expect("present");
    assert_eq!(stored.overtime_hours, 0.0);

    let empty = PunchLogic::load_day(&pool, date(2025, 9, 2), &shorter).expect("empty day");
    assert!(empty.punches.is_empty());
    assert!(pool.load_record(date(2025, 9, 2)).expect("load").is_none());
}

#[test]
fn clock_status_follows_last_punch() {
    let settings = Settings::default();
    let mut record = DailyRecord::empty(date(2025, 9, 1));

    let off = clock_status(&record, &settings);
    assert_eq!(off.state, ClockState::OffDuty);
    assert_eq!(off.next_action.label, "Start workday");
    assert!(off.predicted_exit.is_none());

    record.punches = common::standard_day();
    record.punches.truncate(3);
    let working = clock_status(&record, &settings);
    assert_eq!(working.state, ClockState::Working);
    assert_eq!(working.next_action.kind, PunchKind::Out);
    assert_eq!(working.predicted_exit, Some(at(2025, 9, 1, 18, 0)));

    record.punches.truncate(2);
    let on_break = clock_status(&record, &settings);
    assert_eq!(on_break.state, ClockState::OnBreak);
    assert_eq!(on_break.next_action.label, "End break");
}
