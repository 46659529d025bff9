use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::bank::TimeBankLogic;
use crate::db::open_db;
use crate::errors::{AppError, AppResult};
use crate::models::time_bank::TimeBankEntry;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::formatting::format_hours;
use crate::utils::time::parse_hours;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Bank {
        add,
        reason,
        date: date_arg,
    } = cmd
    {
        let mut pool = open_db(&cfg.database)?;

        if let Some(hours_str) = add {
            let hours = parse_hours(hours_str)?;
            let d = match date_arg {
                Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
                None => date::today(),
            };
            let reason = reason.clone().unwrap_or_default();

            TimeBankLogic::add(&mut pool, &TimeBankEntry::new(d, hours, reason))?;
            success(format!("Time bank adjusted by {}", format_hours(hours, true)));
        }

        TimeBankLogic::print(&pool)?;
    }

    Ok(())
}
