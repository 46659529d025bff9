use crate::core::calculator::balance::time_bank_balance;
use crate::db::store::Store;
use crate::errors::AppResult;
use crate::models::time_bank::TimeBankEntry;
use crate::utils::colors::{GREY, RESET, color_for_balance};
use crate::utils::formatting::format_hours;
use crate::utils::table::{Column, Table};

pub struct TimeBankLogic;

impl TimeBankLogic {
    /// Append a manual adjustment to the ledger.
    pub fn add<S: Store>(store: &mut S, entry: &TimeBankEntry) -> AppResult<()> {
        store.append_time_bank(entry)?;

        if let Err(e) = store.log_operation(
            "bank",
            &entry.date.format("%Y-%m-%d").to_string(),
            &format!("{} {}", format_hours(entry.hours, true), entry.reason),
        ) {
            tracing::warn!(error = %e, "failed to write audit log");
        }

        tracing::info!(hours = entry.hours, "time bank entry added");
        Ok(())
    }

    pub fn print<S: Store>(store: &S) -> AppResult<()> {
        let entries = store.load_time_bank()?;
        let balance = time_bank_balance(&entries);

        println!();
        println!(
            "🏦 Time bank balance: {}{}{}",
            color_for_balance(balance),
            format_hours(balance, true),
            RESET
        );
        println!();

        if entries.is_empty() {
            println!("{}   No time bank entries yet.{}", GREY, RESET);
            println!();
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::left("Date", 10),
            Column::right("Hours", 9),
            Column::left("Reason", 30),
        ]);

        for e in entries.iter().rev() {
            table.add_row(vec![
                e.date.format("%Y-%m-%d").to_string(),
                format_hours(e.hours, true),
                e.reason.clone(),
            ]);
        }

        for line in table.render().lines() {
            println!("   {}", line.trim_end());
        }
        println!();
        Ok(())
    }
}
