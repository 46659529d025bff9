use crate::core::calculator::daily::MILLIS_PER_HOUR;
use crate::models::settings::Settings;
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc, Weekday};

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Hours the user is expected to work on `date`: the configured work day
/// on Monday to Friday, nothing on weekends.
pub fn expected_hours(date: NaiveDate, settings: &Settings) -> f64 {
    if is_weekend(date) {
        0.0
    } else {
        settings.work_day_hours
    }
}

/// Exit time if the day runs a full work day plus the standard break,
/// counted from the first punch. `None` when the offset does not fit a
/// representable instant.
pub fn predicted_exit(first_punch: DateTime<Utc>, settings: &Settings) -> Option<DateTime<Utc>> {
    let millis = ((settings.work_day_hours + settings.break_hours) * MILLIS_PER_HOUR).round();

    // Out of i64 range (or NaN) means no meaningful exit time
    if !millis.is_finite() || millis.abs() >= i64::MAX as f64 {
        return None;
    }

    let offset = Duration::try_milliseconds(millis as i64)?;
    first_punch.checked_add_signed(offset)
}
