//! Time utilities: parsing HH:MM, converting wall-clock input to instants,
//! hours <-> HH:MM conversions.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
        .ok()
}

/// Interpret `time` on `date` in the local timezone.
/// Times skipped by a DST jump are rejected; ambiguous ones take the earlier instant.
pub fn local_instant(date: NaiveDate, time: NaiveTime) -> AppResult<DateTime<Utc>> {
    Local
        .from_local_datetime(&date.and_time(time))
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| AppError::InvalidTime(format!("{} {} does not exist locally", date, time)))
}

pub fn parse_local_instant(date: NaiveDate, t: &str) -> AppResult<DateTime<Utc>> {
    let time = parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))?;
    local_instant(date, time)
}

/// Parse hours given as `HH:MM` (optionally signed) or as a decimal number.
///
/// `"01:30"` → 1.5, `"-00:45"` → -0.75, `"2.25"` → 2.25
pub fn parse_hours(s: &str) -> AppResult<f64> {
    let s = s.trim();
    let invalid = || AppError::InvalidHours(s.to_string());

    let (negative, body) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    let value = if let Some((h, m)) = body.split_once(':') {
        let h: u32 = h.parse().map_err(|_| invalid())?;
        let m: u32 = m.parse().map_err(|_| invalid())?;
        if m >= 60 {
            return Err(invalid());
        }
        h as f64 + m as f64 / 60.0
    } else {
        let v: f64 = body.parse().map_err(|_| invalid())?;
        if !v.is_finite() || v < 0.0 {
            return Err(invalid());
        }
        v
    };

    Ok(if negative { -value } else { value })
}

/// 8.0 → "08:00", 1.5 → "01:30"
pub fn hours_to_hhmm(hours: f64) -> String {
    let (sign, h, m) = split_hours(hours);
    format!("{}{:02}:{:02}", if sign { "-" } else { "" }, h, m)
}

/// Split signed hours into (negative, whole hours, rounded minutes).
/// A rounded 60 carries into the hour.
pub fn split_hours(hours: f64) -> (bool, i64, i64) {
    let total_minutes = (hours.abs() * 60.0).round() as i64;
    (hours < 0.0 && total_minutes > 0, total_minutes / 60, total_minutes % 60)
}
