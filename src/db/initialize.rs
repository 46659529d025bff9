use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;
use rusqlite::Connection;

/// Initialize the database.
/// All schema creation / upgrades go through the migration engine.
pub fn init_db(conn: &Connection) -> AppResult<usize> {
    run_pending_migrations(conn)
}

/// Open the database at `path` with the schema brought up to date.
pub fn open_db(path: &str) -> AppResult<DbPool> {
    let pool = DbPool::new(expand_tilde(path))?;
    init_db(&pool.conn)?;
    Ok(pool)
}
