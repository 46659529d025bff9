use crate::core::calculator::daily::{DailyMetrics, compute_daily_metrics};
use crate::models::punch::Punch;
use crate::models::settings::Settings;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One calendar day: its punches plus the hours derived from them.
/// The three hour fields are only ever written by `recompute`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub punches: Vec<Punch>,
    pub total_hours: f64,
    pub overtime_hours: f64,
    pub break_hours: f64,
}

impl DailyRecord {
    /// The transient record of a day with no punches yet.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            punches: Vec::new(),
            total_hours: 0.0,
            overtime_hours: 0.0,
            break_hours: 0.0,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn metrics(&self) -> DailyMetrics {
        DailyMetrics {
            total_hours: self.total_hours,
            break_hours: self.break_hours,
            overtime_hours: self.overtime_hours,
        }
    }

    /// Re-derive the hour fields from the current punches.
    pub fn recompute(&mut self, settings: &Settings) {
        let m = compute_daily_metrics(&self.punches, settings);
        self.total_hours = m.total_hours;
        self.break_hours = m.break_hours;
        self.overtime_hours = m.overtime_hours;
    }

    /// Sort punches chronologically in place (stable, ties keep insertion order).
    pub fn sort_punches(&mut self) {
        self.punches.sort_by_key(|p| p.timestamp);
    }

    pub fn last_punch(&self) -> Option<&Punch> {
        self.punches.last()
    }
}
