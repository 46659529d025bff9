//! Typed repository over the three persisted collections: daily records
//! (one per date, with their punches), the time bank ledger and the settings.

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::daily_record::DailyRecord;
use crate::models::punch::Punch;
use crate::models::punch_kind::PunchKind;
use crate::models::settings::Settings;
use crate::models::time_bank::TimeBankEntry;
use chrono::{DateTime, Local, NaiveDate, Utc};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Row, params};
use uuid::Uuid;

const KEY_WORK_DAY_HOURS: &str = "work_day_hours";
const KEY_BREAK_HOURS: &str = "break_hours";

pub trait Store {
    /// Every record, oldest date first.
    fn load_records(&self) -> AppResult<Vec<DailyRecord>>;
    fn load_records_for_month(&self, year: i32, month: u32) -> AppResult<Vec<DailyRecord>>;
    fn load_record(&self, date: NaiveDate) -> AppResult<Option<DailyRecord>>;
    /// Insert or replace the record for `record.date`, punches included.
    fn save_record(&mut self, record: &DailyRecord) -> AppResult<()>;

    fn load_time_bank(&self) -> AppResult<Vec<TimeBankEntry>>;
    fn append_time_bank(&mut self, entry: &TimeBankEntry) -> AppResult<()>;

    /// Stored settings merged over the defaults, key by key.
    fn load_settings(&self) -> AppResult<Settings>;
    fn save_settings(&mut self, settings: &Settings) -> AppResult<()>;

    fn log_operation(&self, operation: &str, target: &str, message: &str) -> AppResult<()>;
}

fn conversion_error(col: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(col, Type::Text, Box::new(err))
}

fn parse_date_col(row: &Row, col: &str) -> rusqlite::Result<NaiveDate> {
    let raw: String = row.get(col)?;
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| conversion_error(0, AppError::InvalidDate(raw)))
}

fn map_record_row(row: &Row) -> rusqlite::Result<DailyRecord> {
    Ok(DailyRecord {
        date: parse_date_col(row, "date")?,
        punches: Vec::new(),
        total_hours: row.get("total_hours")?,
        overtime_hours: row.get("overtime_hours")?,
        break_hours: row.get("break_hours")?,
    })
}

fn map_punch_row(row: &Row) -> rusqlite::Result<Punch> {
    let id_str: String = row.get("id")?;
    let id = Uuid::parse_str(&id_str)
        .map_err(|_| conversion_error(0, AppError::Other(format!("Invalid punch id: {}", id_str))))?;

    let kind_str: String = row.get("kind")?;
    let kind = PunchKind::from_db_str(&kind_str)
        .ok_or_else(|| conversion_error(0, AppError::Other(format!("Invalid punch kind: {}", kind_str))))?;

    let ts_str: String = row.get("timestamp")?;
    let timestamp = DateTime::parse_from_rfc3339(&ts_str)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| conversion_error(0, AppError::InvalidTime(ts_str.clone())))?;

    Ok(Punch { id, kind, timestamp })
}

fn punches_for(conn: &Connection, date: NaiveDate) -> AppResult<Vec<Punch>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, kind, timestamp FROM punches
         WHERE date = ?1
         ORDER BY seq ASC",
    )?;

    let rows = stmt.query_map([date.format("%Y-%m-%d").to_string()], map_punch_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Run a records query and attach each record's punches.
fn query_records<P: rusqlite::Params>(conn: &Connection, sql: &str, params: P) -> AppResult<Vec<DailyRecord>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params, map_record_row)?;

    let mut records = Vec::new();
    for r in rows {
        records.push(r?);
    }

    for record in &mut records {
        record.punches = punches_for(conn, record.date)?;
    }

    Ok(records)
}

impl Store for DbPool {
    fn load_records(&self) -> AppResult<Vec<DailyRecord>> {
        query_records(
            &self.conn,
            "SELECT date, total_hours, overtime_hours, break_hours
             FROM daily_records
             ORDER BY date ASC",
            [],
        )
    }

    fn load_records_for_month(&self, year: i32, month: u32) -> AppResult<Vec<DailyRecord>> {
        let prefix = format!("{:04}-{:02}", year, month);
        query_records(
            &self.conn,
            "SELECT date, total_hours, overtime_hours, break_hours
             FROM daily_records
             WHERE strftime('%Y-%m', date) = ?1
             ORDER BY date ASC",
            [prefix],
        )
    }

    fn load_record(&self, date: NaiveDate) -> AppResult<Option<DailyRecord>> {
        let record = self
            .conn
            .query_row(
                "SELECT date, total_hours, overtime_hours, break_hours
                 FROM daily_records
                 WHERE date = ?1",
                [date.format("%Y-%m-%d").to_string()],
                map_record_row,
            )
            .optional()?;

        match record {
            Some(mut r) => {
                r.punches = punches_for(&self.conn, date)?;
                Ok(Some(r))
            }
            None => Ok(None),
        }
    }

    fn save_record(&mut self, record: &DailyRecord) -> AppResult<()> {
        let date_str = record.date_str();
        let tx = self.conn.transaction()?;

        tx.execute(
            "INSERT INTO daily_records (date, total_hours, overtime_hours, break_hours, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(date) DO UPDATE SET
                total_hours = excluded.total_hours,
                overtime_hours = excluded.overtime_hours,
                break_hours = excluded.break_hours,
                updated_at = excluded.updated_at",
            params![
                date_str,
                record.total_hours,
                record.overtime_hours,
                record.break_hours,
                Local::now().to_rfc3339(),
            ],
        )?;

        tx.execute("DELETE FROM punches WHERE date = ?1", [&date_str])?;

        {
            let mut stmt = tx.prepare(
                "INSERT INTO punches (id, date, seq, kind, timestamp)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for (seq, p) in record.punches.iter().enumerate() {
                stmt.execute(params![
                    p.id.to_string(),
                    date_str,
                    seq as i64,
                    p.kind.to_db_str(),
                    p.timestamp_db_str(),
                ])?;
            }
        }

        tx.commit()?;
        tracing::debug!(date = %date_str, punches = record.punches.len(), "record saved");
        Ok(())
    }

    fn load_time_bank(&self) -> AppResult<Vec<TimeBankEntry>> {
        let mut stmt = self
            .conn
            .prepare("SELECT date, hours, reason FROM time_bank ORDER BY id ASC")?;

        let rows = stmt.query_map([], |row| {
            Ok(TimeBankEntry {
                date: parse_date_col(row, "date")?,
                hours: row.get("hours")?,
                reason: row.get("reason")?,
            })
        })?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn append_time_bank(&mut self, entry: &TimeBankEntry) -> AppResult<()> {
        self.conn.execute(
            "INSERT INTO time_bank (date, hours, reason, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                entry.date.format("%Y-%m-%d").to_string(),
                entry.hours,
                entry.reason,
                Local::now().to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    fn load_settings(&self) -> AppResult<Settings> {
        let mut settings = Settings::default();

        let mut stmt = self.conn.prepare("SELECT key, value FROM settings")?;
        let rows = stmt.query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, f64>(1)?)))?;

        for r in rows {
            let (key, value) = r?;
            match key.as_str() {
                KEY_WORK_DAY_HOURS => settings.work_day_hours = value,
                KEY_BREAK_HOURS => settings.break_hours = value,
                other => tracing::warn!(key = other, "ignoring unknown settings key"),
            }
        }

        Ok(settings)
    }

    fn save_settings(&mut self, settings: &Settings) -> AppResult<()> {
        let tx = self.conn.transaction()?;
        for (key, value) in [
            (KEY_WORK_DAY_HOURS, settings.work_day_hours),
            (KEY_BREAK_HOURS, settings.break_hours),
        ] {
            tx.execute(
                "INSERT INTO settings (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key, value],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    fn log_operation(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        ttlog(&self.conn, operation, target, message)
    }
}
