use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::punch::PunchLogic;
use crate::core::status::print_status;
use crate::db::{Store, open_db};
use crate::errors::{AppError, AppResult};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { date: date_arg } = cmd {
        let d = match date_arg {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        let pool = open_db(&cfg.database)?;
        let settings = pool.load_settings()?;
        let record = PunchLogic::load_day(&pool, d, &settings)?;

        print_status(&record, &settings);
    }

    Ok(())
}
