use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::monthly::compute_monthly_summary;
use crate::core::report::ReportLogic;
use crate::db::{Store, open_db};
use crate::errors::AppResult;
use crate::utils::date::{parse_month, shift_month, today};
use chrono::Datelike;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { month, shift, json } = cmd {
        let (year, m) = match month {
            Some(s) => parse_month(s)?,
            None => {
                let t = today();
                (t.year(), t.month())
            }
        };
        let (year, m) = shift_month(year, m, shift.unwrap_or(0))?;

        let pool = open_db(&cfg.database)?;
        let settings = pool.load_settings()?;
        let records = pool.load_records_for_month(year, m)?;

        let report = compute_monthly_summary(&records, year, m, &settings);

        if *json {
            ReportLogic::print_json(&report)?;
        } else {
            ReportLogic::print_text(&report, settings.work_day_hours, cfg.chart_width);
        }
    }

    Ok(())
}
