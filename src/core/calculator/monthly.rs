//! Monthly aggregation of daily records into totals, balance and a
//! per-day chart series.
//!
//! `month` is 1-based (January = 1) throughout the crate.

use crate::core::calculator::balance::calculate_balance;
use crate::core::calculator::expected::expected_hours;
use crate::models::daily_record::DailyRecord;
use crate::models::settings::Settings;
use crate::utils::date::days_in_month;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    pub total_hours: f64,
    pub overtime_hours: f64,
    pub balance: f64,
}

/// One bar of the monthly chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPoint {
    pub day: u32,
    pub total_hours: f64,
    pub regular_hours: f64,
    pub overtime_hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReport {
    pub year: i32,
    pub month: u32,
    pub monthly_summary: MonthlySummary,
    pub chart_series: Vec<DayPoint>,
    /// Chart scale: never below 1 nor below the configured work day.
    pub max_hours: f64,
}

pub fn compute_monthly_summary(
    records: &[DailyRecord],
    year: i32,
    month: u32,
    settings: &Settings,
) -> MonthlyReport {
    let in_month: Vec<&DailyRecord> = records
        .iter()
        .filter(|r| r.date.year() == year && r.date.month() == month)
        .collect();

    let days = days_in_month(year, month).unwrap_or(0);

    let mut chart_series = Vec::with_capacity(days as usize);
    let mut total_hours = 0.0;
    let mut total_overtime = 0.0;
    let mut total_expected = 0.0;
    let mut max_worked: f64 = 0.0;

    for day in 1..=days {
        let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
            continue;
        };

        let record = in_month.iter().find(|r| r.date == date);
        let worked = record.map_or(0.0, |r| r.total_hours);
        let overtime = record.map_or(0.0, |r| r.overtime_hours);

        total_expected += expected_hours(date, settings);
        total_hours += worked;
        total_overtime += overtime;
        max_worked = max_worked.max(worked);

        chart_series.push(DayPoint {
            day,
            total_hours: worked,
            regular_hours: worked - overtime,
            overtime_hours: overtime,
        });
    }

    MonthlyReport {
        year,
        month,
        monthly_summary: MonthlySummary {
            total_hours,
            overtime_hours: total_overtime,
            balance: calculate_balance(total_hours, total_expected),
        },
        chart_series,
        max_hours: max_worked.max(settings.work_day_hours).max(1.0),
    }
}
