use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PunchKind {
    In,
    Out,
}

impl PunchKind {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            PunchKind::In => "in",
            PunchKind::Out => "out",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "in" => Some(PunchKind::In),
            "out" => Some(PunchKind::Out),
            _ => None,
        }
    }

    /// The kind that follows this one in a well-formed day.
    pub fn toggled(&self) -> Self {
        match self {
            PunchKind::In => PunchKind::Out,
            PunchKind::Out => PunchKind::In,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PunchKind::In => "IN",
            PunchKind::Out => "OUT",
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, PunchKind::In)
    }
}
