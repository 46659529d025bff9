use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::punch::PunchLogic;
use crate::db::{Store, open_db};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::formatting::format_hours;
use crate::utils::time::parse_local_instant;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { date: date_str, time } = cmd {
        let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.clone()))?;
        let ts = parse_local_instant(d, time)?;

        let mut pool = open_db(&cfg.database)?;
        let settings = pool.load_settings()?;

        let punch = PunchLogic::add(&mut pool, d, ts, &settings)?;
        let record = PunchLogic::load_day(&pool, d, &settings)?;

        success(format!(
            "Added {} at {} on {} (worked {})",
            punch.kind.label(),
            punch.time_str(),
            d,
            format_hours(record.total_hours, false)
        ));
    }

    Ok(())
}
