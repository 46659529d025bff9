use serde::{Deserialize, Serialize};

pub const DEFAULT_WORK_DAY_HOURS: f64 = 8.0;
pub const DEFAULT_BREAK_HOURS: f64 = 1.0;

/// Work-day configuration passed into every calculation.
/// Values are taken as given: negative or zero hours are not rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub work_day_hours: f64,
    pub break_hours: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            work_day_hours: DEFAULT_WORK_DAY_HOURS,
            break_hours: DEFAULT_BREAK_HOURS,
        }
    }
}
