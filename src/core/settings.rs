use crate::db::store::Store;
use crate::errors::AppResult;
use crate::models::settings::Settings;
use crate::utils::colors::{CYAN, RESET};
use crate::utils::time::hours_to_hhmm;

pub struct SettingsLogic;

impl SettingsLogic {
    /// Overwrite the given fields and persist. Values are stored as given.
    pub fn update<S: Store>(
        store: &mut S,
        work_day_hours: Option<f64>,
        break_hours: Option<f64>,
    ) -> AppResult<Settings> {
        let mut settings = store.load_settings()?;

        if work_day_hours.is_none() && break_hours.is_none() {
            return Ok(settings);
        }

        if let Some(h) = work_day_hours {
            settings.work_day_hours = h;
        }
        if let Some(h) = break_hours {
            settings.break_hours = h;
        }

        store.save_settings(&settings)?;

        if let Err(e) = store.log_operation(
            "settings",
            "",
            &format!(
                "work day {}, break {}",
                hours_to_hhmm(settings.work_day_hours),
                hours_to_hhmm(settings.break_hours)
            ),
        ) {
            tracing::warn!(error = %e, "failed to write audit log");
        }

        Ok(settings)
    }

    pub fn print(settings: &Settings) {
        println!();
        println!("{}⚙️  Settings{}", CYAN, RESET);
        println!("   Work day:  {}", hours_to_hhmm(settings.work_day_hours));
        println!("   Break:     {}", hours_to_hhmm(settings.break_hours));
        println!();
    }
}
