use super::punch_kind::PunchKind;
use chrono::{DateTime, Local, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Punch {
    pub id: Uuid,                  // ⇔ punches.id (TEXT, uuid v4)
    #[serde(rename = "type")]
    pub kind: PunchKind,           // ⇔ punches.kind ('in' | 'out')
    pub timestamp: DateTime<Utc>,  // ⇔ punches.timestamp (TEXT, RFC 3339)
}

impl Punch {
    /// New punch with a fresh random id.
    pub fn new(kind: PunchKind, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            timestamp,
        }
    }

    pub fn local_time(&self) -> DateTime<Local> {
        self.timestamp.with_timezone(&Local)
    }

    pub fn time_str(&self) -> String {
        self.local_time().format("%H:%M").to_string()
    }

    pub fn timestamp_db_str(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
