use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A manual adjustment of the time bank. `hours` is signed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeBankEntry {
    pub date: NaiveDate,
    pub hours: f64,
    pub reason: String,
}

impl TimeBankEntry {
    pub fn new(date: NaiveDate, hours: f64, reason: impl Into<String>) -> Self {
        Self {
            date,
            hours,
            reason: reason.into(),
        }
    }
}
