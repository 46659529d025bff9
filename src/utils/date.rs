use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parse a `YYYY-MM` selector into `(year, month)`, month 1-based.
pub fn parse_month(s: &str) -> AppResult<(i32, u32)> {
    let first = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidMonth(s.to_string()))?;
    Ok((first.year(), first.month()))
}

/// Number of days in `month` of `year` (Gregorian, leap years included).
/// `None` when the month is outside 1..=12.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((next - first).num_days() as u32)
}

/// Move `delta` months away from `(year, month)`, rolling the year over.
/// Fails with `InvalidMonth` when the result leaves the calendar range.
pub fn shift_month(year: i32, month: u32, delta: i32) -> AppResult<(i32, u32)> {
    let index = i64::from(year) * 12 + (i64::from(month) - 1) + i64::from(delta);
    let out_of_range = || AppError::InvalidMonth(format!("{:04}-{:02} shifted by {}", year, month, delta));

    let shifted_year = i32::try_from(index.div_euclid(12)).map_err(|_| out_of_range())?;
    let shifted_month = index.rem_euclid(12) as u32 + 1;

    NaiveDate::from_ymd_opt(shifted_year, shifted_month, 1).ok_or_else(out_of_range)?;
    Ok((shifted_year, shifted_month))
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "?",
    }
}

/// "September 2025"
pub fn month_title(year: i32, month: u32) -> String {
    format!("{} {}", month_name(month), year)
}

/// "01/09 Mon"
pub fn short_day_label(date: NaiveDate) -> String {
    date.format("%d/%m %a").to_string()
}
