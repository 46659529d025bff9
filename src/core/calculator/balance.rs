use crate::models::time_bank::TimeBankEntry;

/// Worked minus expected hours. Negative means under the expected hours.
pub fn calculate_balance(worked_hours: f64, expected_hours: f64) -> f64 {
    worked_hours - expected_hours
}

/// Running total of the time bank ledger.
pub fn time_bank_balance(entries: &[TimeBankEntry]) -> f64 {
    entries.iter().map(|e| e.hours).sum()
}
