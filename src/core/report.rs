use crate::core::calculator::monthly::{DayPoint, MonthlyReport};
use crate::errors::AppResult;
use crate::utils::colors::{BLUE, CYAN, GREY, RESET, YELLOW, color_for_balance};
use crate::utils::date::{month_title, short_day_label};
use crate::utils::formatting::{bold, format_hours};
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

const REGULAR_CELL: char = '█';
const OVERTIME_CELL: char = '▓';
const GOAL_MARKER: char = '|';

fn columns_for(hours: f64, max_hours: f64, width: usize) -> usize {
    if max_hours <= 0.0 || hours <= 0.0 {
        return 0;
    }
    (((hours / max_hours) * width as f64).round() as usize).min(width)
}

/// One chart row: regular hours as `█`, overtime as `▓`, and a `|` at
/// the goal column when the bar does not already reach past it.
pub fn render_bar(point: &DayPoint, max_hours: f64, goal_hours: f64, width: usize) -> String {
    let regular = columns_for(point.regular_hours, max_hours, width);
    let filled = columns_for(point.total_hours, max_hours, width).max(regular);
    let goal = columns_for(goal_hours, max_hours, width);

    let mut cells: Vec<char> = (0..width)
        .map(|i| {
            if i < regular {
                REGULAR_CELL
            } else if i < filled {
                OVERTIME_CELL
            } else {
                ' '
            }
        })
        .collect();

    if goal > 0 && goal >= filled {
        if goal < width {
            cells[goal] = GOAL_MARKER;
        } else {
            cells.push(GOAL_MARKER);
        }
    }

    cells.into_iter().collect::<String>().trim_end().to_string()
}

pub struct ReportLogic;

impl ReportLogic {
    pub fn print_json(report: &MonthlyReport) -> AppResult<()> {
        println!("{}", serde_json::to_string_pretty(report)?);
        Ok(())
    }

    pub fn print_text(report: &MonthlyReport, goal_hours: f64, chart_width: usize) {
        let summary = &report.monthly_summary;
        let balance_color = color_for_balance(summary.balance);

        println!();
        println!("{}", bold(&format!("📊 {}", month_title(report.year, report.month))));
        println!();
        println!("   Total worked:  {}", format_hours(summary.total_hours, false));
        println!(
            "   Overtime:      {}{}{}",
            YELLOW,
            format_hours(summary.overtime_hours, false),
            RESET
        );
        println!(
            "   Balance:       {}{}{}",
            balance_color,
            format_hours(summary.balance, true),
            RESET
        );
        println!();

        if report.chart_series.is_empty() {
            println!("{}   No days to show.{}", GREY, RESET);
            println!();
            return;
        }

        println!(
            "{}   {} regular  {} overtime  {} goal ({}){}",
            GREY,
            REGULAR_CELL,
            OVERTIME_CELL,
            GOAL_MARKER,
            format_hours(goal_hours, false),
            RESET
        );
        for point in &report.chart_series {
            println!(
                "   {}{:>2}{} {}{}{}",
                CYAN,
                point.day,
                RESET,
                BLUE,
                render_bar(point, report.max_hours, goal_hours, chart_width),
                RESET
            );
        }
        println!();

        let mut details = Table::new(vec![
            Column::left("Day", 9),
            Column::right("Total", 8),
            Column::right("Extra", 8),
        ]);

        for point in report.chart_series.iter().filter(|p| p.total_hours > 0.0) {
            let Some(date) = NaiveDate::from_ymd_opt(report.year, report.month, point.day) else {
                continue;
            };
            let extra = if point.overtime_hours > 0.0 {
                format_hours(point.overtime_hours, true)
            } else {
                "-".to_string()
            };
            details.add_row(vec![
                short_day_label(date),
                format_hours(point.total_hours, false),
                extra,
            ]);
        }

        if details.is_empty() {
            println!("{}   No worked days this month.{}", GREY, RESET);
        } else {
            for line in details.render().lines() {
                println!("   {}", line.trim_end());
            }
        }
        println!();
    }
}

