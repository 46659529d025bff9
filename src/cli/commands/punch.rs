use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::punch::PunchLogic;
use crate::core::status::print_status;
use crate::db::{Store, open_db};
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date::today;
use chrono::Utc;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Punch { end } = cmd {
        let mut pool = open_db(&cfg.database)?;
        let settings = pool.load_settings()?;
        let date = today();

        let punch = PunchLogic::punch_now(&mut pool, date, Utc::now(), &settings, *end)?;
        success(format!("Punched {} at {}", punch.kind.label(), punch.time_str()));

        let record = PunchLogic::load_day(&pool, date, &settings)?;
        print_status(&record, &settings);
    }

    Ok(())
}
