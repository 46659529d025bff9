//! Versioned schema migrations.
//!
//! Each migration runs once; its version string is recorded as a
//! `migration_applied` row in the `log` table inside the same transaction.

use crate::errors::{AppError, AppResult};
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Result};

struct Migration {
    version: &'static str,
    description: &'static str,
    apply: fn(&Connection) -> Result<()>,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250901_0001_create_daily_records",
        description: "Created daily_records and punches tables",
        apply: create_records_tables,
    },
    Migration {
        version: "20250901_0002_create_time_bank",
        description: "Created time_bank table",
        apply: create_time_bank_table,
    },
    Migration {
        version: "20250901_0003_create_settings",
        description: "Created settings table",
        apply: create_settings_table,
    },
];

/// Ensure that the `log` table exists; migrations are tracked in it.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

fn create_records_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS daily_records (
            date            TEXT PRIMARY KEY,
            total_hours     REAL NOT NULL DEFAULT 0,
            overtime_hours  REAL NOT NULL DEFAULT 0,
            break_hours     REAL NOT NULL DEFAULT 0,
            updated_at      TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS punches (
            id         TEXT PRIMARY KEY,
            date       TEXT NOT NULL REFERENCES daily_records(date) ON DELETE CASCADE,
            seq        INTEGER NOT NULL,
            kind       TEXT NOT NULL CHECK(kind IN ('in','out')),
            timestamp  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_punches_date_seq ON punches(date, seq);
        "#,
    )
}

fn create_time_bank_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS time_bank (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            date        TEXT NOT NULL,
            hours       REAL NOT NULL,
            reason      TEXT NOT NULL DEFAULT '',
            created_at  TEXT NOT NULL
        );
        "#,
    )
}

fn create_settings_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS settings (
            key    TEXT PRIMARY KEY,
            value  REAL NOT NULL
        );
        "#,
    )
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Versions already recorded in the `log` table, oldest first.
pub fn applied_versions(conn: &Connection) -> AppResult<Vec<String>> {
    ensure_log_table(conn)?;

    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Public entry point: run all pending migrations.
/// Returns how many were applied by this call.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;

    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }

        let tx = conn.unchecked_transaction()?;

        (m.apply)(&tx).map_err(|e| AppError::Migration(format!("{}: {}", m.version, e)))?;

        tx.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (?1, 'migration_applied', ?2, ?3)",
            [Local::now().to_rfc3339().as_str(), m.version, m.description],
        )?;

        tx.commit()?;

        tracing::info!(version = m.version, "migration applied");
        applied += 1;
    }

    Ok(applied)
}
