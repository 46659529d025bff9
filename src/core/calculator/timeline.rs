use crate::models::punch::Punch;
use crate::models::punch_kind::PunchKind;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalKind {
    Work,
    Break,
}

/// Span between two adjacent punches that counts toward work or break.
#[derive(Debug, Clone, PartialEq)]
pub struct Interval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub kind: IntervalKind,
}

impl Interval {
    pub fn duration_millis(&self) -> i64 {
        (self.end - self.start).num_milliseconds()
    }
}

#[derive(Debug, Default, Clone)]
pub struct Timeline {
    pub punches: Vec<Punch>,
    pub intervals: Vec<Interval>,
    /// Adjacent pairs of the same kind (in→in, out→out) that were skipped.
    pub unmatched: usize,
}

impl Timeline {
    pub fn total_millis(&self, kind: IntervalKind) -> i64 {
        self.intervals
            .iter()
            .filter(|i| i.kind == kind)
            .map(Interval::duration_millis)
            .sum()
    }
}

pub fn build_timeline(punches: &[Punch]) -> Timeline {
    if punches.is_empty() {
        return Timeline::default();
    }

    // Stable: punches sharing a timestamp keep their input order
    let mut sorted = punches.to_vec();
    sorted.sort_by_key(|p| p.timestamp);

    let mut intervals = Vec::new();
    let mut unmatched = 0;

    for w in sorted.windows(2) {
        let (current, next) = (&w[0], &w[1]);

        let kind = match (current.kind, next.kind) {
            (PunchKind::In, PunchKind::Out) => IntervalKind::Work,
            (PunchKind::Out, PunchKind::In) => IntervalKind::Break,
            _ => {
                unmatched += 1;
                continue;
            }
        };

        intervals.push(Interval {
            start: current.timestamp,
            end: next.timestamp,
            kind,
        });
    }

    Timeline {
        punches: sorted,
        intervals,
        unmatched,
    }
}
