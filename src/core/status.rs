use crate::core::calculator::daily::MILLIS_PER_HOUR;
use crate::core::calculator::expected::predicted_exit;
use crate::core::calculator::timeline::{IntervalKind, build_timeline};
use crate::models::daily_record::DailyRecord;
use crate::models::punch_kind::PunchKind;
use crate::models::settings::Settings;
use crate::utils::colors::{CYAN, GREY, RESET, colorize_kind, colorize_optional};
use crate::utils::date::today;
use crate::utils::formatting::{format_hours, time_or_placeholder};
use crate::utils::table::{Column, Table};
use chrono::{DateTime, Local, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ClockState {
    OffDuty,
    Working,
    OnBreak,
}

impl ClockState {
    pub fn label(&self) -> &'static str {
        match self {
            ClockState::OffDuty => "Off duty",
            ClockState::Working => "Working",
            ClockState::OnBreak => "On break",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextAction {
    pub label: &'static str,
    pub kind: PunchKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockStatus {
    pub state: ClockState,
    pub next_action: NextAction,
    pub predicted_exit: Option<DateTime<Utc>>,
}

/// Where the day stands, judged from the last stored punch.
pub fn clock_status(record: &DailyRecord, settings: &Settings) -> ClockStatus {
    let (state, next_action) = match record.last_punch().map(|p| p.kind) {
        None => (
            ClockState::OffDuty,
            NextAction {
                label: "Start workday",
                kind: PunchKind::In,
            },
        ),
        Some(PunchKind::In) => (
            ClockState::Working,
            NextAction {
                label: "Start break",
                kind: PunchKind::Out,
            },
        ),
        Some(PunchKind::Out) => (
            ClockState::OnBreak,
            NextAction {
                label: "End break",
                kind: PunchKind::In,
            },
        ),
    };

    let predicted_exit = record
        .punches
        .iter()
        .map(|p| p.timestamp)
        .min()
        .and_then(|first| predicted_exit(first, settings));

    ClockStatus {
        state,
        next_action,
        predicted_exit,
    }
}

pub fn print_status(record: &DailyRecord, settings: &Settings) {
    let status = clock_status(record, settings);
    let exit = time_or_placeholder(
        status
            .predicted_exit
            .map(|t| t.with_timezone(&Local).format("%H:%M").to_string()),
    );

    println!();
    println!("{}📅 {}{}", CYAN, record.date.format("%A, %d/%m/%Y"), RESET);
    if record.date == today() {
        println!("   Now:            {}", Local::now().format("%H:%M"));
    }
    println!("   Worked:         {}", format_hours(record.total_hours, false));
    println!("   Expected exit:  {}", colorize_optional(&exit));
    println!("   State:          {}", status.state.label());
    println!(
        "   Next action:    {}",
        colorize_kind(status.next_action.label, status.next_action.kind.is_in())
    );
    println!();

    if record.punches.is_empty() {
        println!("{}   No punches for this day.{}", GREY, RESET);
        println!();
        return;
    }

    let mut table = Table::new(vec![
        Column::right("Pos", 4),
        Column::left("Type", 5),
        Column::left("Time", 5),
    ]);
    for (i, p) in record.punches.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            colorize_kind(&format!("{:<5}", p.kind.label()), p.kind.is_in()),
            p.time_str(),
        ]);
    }
    print!("{}", table.render());
    println!();

    let timeline = build_timeline(&record.punches);
    if !timeline.intervals.is_empty() {
        println!("   Intervals:");
        for iv in &timeline.intervals {
            let label = match iv.kind {
                IntervalKind::Work => "work ",
                IntervalKind::Break => "break",
            };
            println!(
                "     {} {} → {}  ({})",
                label,
                iv.start.with_timezone(&Local).format("%H:%M"),
                iv.end.with_timezone(&Local).format("%H:%M"),
                format_hours(iv.duration_millis() as f64 / MILLIS_PER_HOUR, false)
            );
        }
        println!();
    }

    println!("   Break:  {}", colorize_optional(&format_hours(record.break_hours, false)));
    println!("   Total:  {}", format_hours(record.total_hours, false));
    if record.overtime_hours > 0.0 {
        println!("   Extra:  {}", format_hours(record.overtime_hours, true));
    }
    println!();
}
