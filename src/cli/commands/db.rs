use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::db_utils::recalc_records;
use crate::db::{Store, open_db, stats};
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};
use crate::utils::date::parse_month;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        check,
        info,
        recalc,
        period,
    } = cmd
    {
        let mut pool = open_db(&cfg.database)?;

        //
        // 1) INFO
        //
        if *info {
            stats::print_db_info(&pool, &cfg.database)?;
        }

        //
        // 2) CHECK
        //
        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
            }
        }

        //
        // 3) RECALC
        //
        if *recalc {
            let month = period.as_deref().map(parse_month).transpose()?;
            let settings = pool.load_settings()?;

            println!("{}▶ Recomputing daily metrics…{}", CYAN, RESET);
            let changed = recalc_records(&mut pool, &settings, month)?;

            let scope = period.as_deref().unwrap_or("all");
            if let Err(e) = pool.log_operation("recalc", scope, &format!("{} record(s) updated", changed)) {
                tracing::warn!(error = %e, "failed to write audit log");
            }

            println!("{}✔ {} record(s) updated.{}\n", GREEN, changed, RESET);
        }
    }

    Ok(())
}
