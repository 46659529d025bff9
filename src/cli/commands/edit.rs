use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::punch::PunchLogic;
use crate::db::{Store, open_db};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::time::parse_local_instant;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        date: date_str,
        position,
        time,
    } = cmd
    {
        let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.clone()))?;
        let ts = parse_local_instant(d, time)?;

        let mut pool = open_db(&cfg.database)?;
        let settings = pool.load_settings()?;

        let record = pool
            .load_record(d)?
            .ok_or_else(|| AppError::NoPunchesForDate(d.to_string()))?;
        let id = PunchLogic::resolve_index(&record, *position)?;

        let punch = PunchLogic::edit(&mut pool, d, id, ts, &settings)?;
        success(format!(
            "Punch #{} on {} moved: {} at {}",
            position,
            d,
            punch.kind.label(),
            punch.time_str()
        ));
    }

    Ok(())
}
