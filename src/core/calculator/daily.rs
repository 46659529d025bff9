//! Daily metrics: worked, break and overtime hours for one day of punches.

use crate::core::calculator::timeline::{IntervalKind, build_timeline};
use crate::models::punch::Punch;
use crate::models::settings::Settings;
use serde::Serialize;

pub const MILLIS_PER_HOUR: f64 = 3_600_000.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyMetrics {
    pub total_hours: f64,
    pub break_hours: f64,
    pub overtime_hours: f64,
}

/// Derive the day's hours from its punches.
///
/// Punches are sorted by timestamp on a private copy; every `in → out`
/// pair counts as work and every `out → in` pair as break. Same-kind
/// neighbours contribute nothing. Overtime is whatever exceeds
/// `settings.work_day_hours`, floored at zero.
pub fn compute_daily_metrics(punches: &[Punch], settings: &Settings) -> DailyMetrics {
    let timeline = build_timeline(punches);

    let total_hours = timeline.total_millis(IntervalKind::Work) as f64 / MILLIS_PER_HOUR;
    let break_hours = timeline.total_millis(IntervalKind::Break) as f64 / MILLIS_PER_HOUR;
    let overtime_hours = (total_hours - settings.work_day_hours).max(0.0);

    DailyMetrics {
        total_hours,
        break_hours,
        overtime_hours,
    }
}
