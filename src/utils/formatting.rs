//! Formatting utilities used for CLI output.

use crate::utils::time::split_hours;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Hours as `08h 30m`.
///
/// With `want_sign` positive values get a leading `+`; negative values
/// always carry `-`; zero never has a sign.
pub fn format_hours(hours: f64, want_sign: bool) -> String {
    let (negative, h, m) = split_hours(hours);

    let sign = if negative {
        "-"
    } else if want_sign && (h > 0 || m > 0) {
        "+"
    } else {
        ""
    };

    format!("{}{:02}h {:02}m", sign, h, m)
}

/// `HH:MM` for an optional instant already formatted, `--:--` otherwise.
pub fn time_or_placeholder(value: Option<String>) -> String {
    value.unwrap_or_else(|| "--:--".to_string())
}
