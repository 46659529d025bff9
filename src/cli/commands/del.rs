use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::punch::PunchLogic;
use crate::db::{Store, open_db};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::utils::date;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del {
        date: date_str,
        position,
    } = cmd
    {
        let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.clone()))?;

        let mut pool = open_db(&cfg.database)?;
        let settings = pool.load_settings()?;

        let record = pool
            .load_record(d)?
            .ok_or_else(|| AppError::NoPunchesForDate(d.to_string()))?;
        let id = PunchLogic::resolve_index(&record, *position)?;

        let prompt = format!("Delete punch #{} for {}? This action is irreversible.", position, d);
        if !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let removed = PunchLogic::delete(&mut pool, d, id, &settings)?;
        success(format!(
            "Punch #{} ({} at {}) for {} has been deleted.",
            position,
            removed.kind.label(),
            removed.time_str(),
            d
        ));
    }

    Ok(())
}
