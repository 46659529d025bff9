use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::settings::SettingsLogic;
use crate::db::open_db;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::time::parse_hours;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Settings {
        work_day,
        break_hours,
    } = cmd
    {
        let work_day = work_day.as_deref().map(parse_hours).transpose()?;
        let break_hours = break_hours.as_deref().map(parse_hours).transpose()?;

        let mut pool = open_db(&cfg.database)?;
        let settings = SettingsLogic::update(&mut pool, work_day, break_hours)?;

        if work_day.is_some() || break_hours.is_some() {
            success("Settings saved.");
        }
        SettingsLogic::print(&settings);
    }

    Ok(())
}
