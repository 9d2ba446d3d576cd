//! Plain-text rendering of a [`CalendarView`].
//!
//! Layout: month blocks side by side, seven day cells per row. Day 1 sits
//! in the first column and the first row carries the weekday labels, so
//! each column keeps one weekday throughout the month. Weekends are shown
//! in parentheses and holidays in brackets; each month lists its holidays
//! below the days.

use std::fmt::Write;

use holical_calendar::{CalendarDayCell, HolidayRecord, MonthGroup};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::state::CalendarView;

/// Width of one day cell, including its left padding.
const CELL_WIDTH: usize = 5;
/// Day cells per row.
const CELLS_PER_ROW: usize = 7;
/// Width of one month block.
const BLOCK_WIDTH: usize = CELL_WIDTH * CELLS_PER_ROW;
/// Spaces between month blocks placed side by side.
const BLOCK_GAP: usize = 3;
/// Width of the date column in the holiday list.
const DATE_COLUMN: usize = 12;

/// Options for [`render_view`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Month blocks per row, at least 1.
    pub columns: usize,
    /// Append the flat holiday list after the grid.
    pub show_list: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            columns: 3,
            show_list: true,
        }
    }
}

/// Renders the whole view: title, grid (or error), and holiday list (or error).
pub fn render_view(view: &CalendarView<'_>, options: &RenderOptions) -> String {
    let mut out = String::new();
    match view {
        CalendarView::Grid {
            year,
            location,
            months,
            holidays,
        } => {
            let _ = writeln!(out, "Public Holiday Calendar: {year} ({location})");
            out.push('\n');
            out.push_str(&render_grid(months, options.columns));
            if options.show_list {
                out.push('\n');
                out.push_str(&render_holiday_list(holidays));
            }
        }
        CalendarView::Error {
            year,
            location,
            message,
        } => {
            let _ = writeln!(out, "Public Holiday Calendar: {year} ({location})");
            out.push('\n');
            let _ = writeln!(out, "{message}");
            if options.show_list {
                out.push('\n');
                let _ = writeln!(out, "{message}");
            }
        }
    }
    out
}

/// Renders month blocks `columns` to a row.
pub fn render_grid(months: &[MonthGroup], columns: usize) -> String {
    let columns = columns.max(1);
    let blocks: Vec<Vec<String>> = months.iter().map(month_block).collect();
    let gap = " ".repeat(BLOCK_GAP);

    let mut out = String::new();
    for (row_idx, row) in blocks.chunks(columns).enumerate() {
        if row_idx > 0 {
            out.push('\n');
        }
        let height = row.iter().map(Vec::len).max().unwrap_or(0);
        for line_idx in 0..height {
            let line = row
                .iter()
                .map(|block| pad_to_width(block.get(line_idx).map_or("", String::as_str), BLOCK_WIDTH))
                .collect::<Vec<_>>()
                .join(&gap);
            out.push_str(line.trim_end());
            out.push('\n');
        }
    }
    out
}

/// Renders the flat list of holiday records in source order.
pub fn render_holiday_list(holidays: &[HolidayRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<DATE_COLUMN$}Description", "Date");
    for holiday in holidays {
        let _ = writeln!(out, "{:<DATE_COLUMN$}{}", holiday.date, holiday.name);
    }
    out
}

/// One month as a block of lines, each at most [`BLOCK_WIDTH`] wide.
fn month_block(month: &MonthGroup) -> Vec<String> {
    let mut lines = vec![month.month_name.to_string()];

    let labels: String = month
        .days
        .iter()
        .take(CELLS_PER_ROW)
        .map(|cell| format!("{:>CELL_WIDTH$}", cell.weekday_label.unwrap_or("")))
        .collect();
    lines.push(labels);

    for week in month.days.chunks(CELLS_PER_ROW) {
        lines.push(week.iter().map(day_cell).collect());
    }

    for cell in month.holidays() {
        let name = cell.holiday_name.as_deref().unwrap_or("");
        let note = format!("{:>3} {name}", cell.date.day());
        lines.push(truncate_to_width(&note, BLOCK_WIDTH));
    }
    lines
}

fn day_cell(cell: &CalendarDayCell) -> String {
    let day = cell.date.day();
    let text = if cell.is_holiday {
        format!("[{day}]")
    } else if cell.is_weekend {
        format!("({day})")
    } else {
        day.to_string()
    };
    // Right-align the number column; the closing mark hangs one past it.
    let marked = cell.is_holiday || cell.is_weekend;
    let width = if marked { CELL_WIDTH } else { CELL_WIDTH - 1 };
    let mut s = format!("{text:>width$}");
    if !marked {
        s.push(' ');
    }
    s
}

fn pad_to_width(s: &str, width: usize) -> String {
    let used = s.width();
    if used >= width {
        return s.to_string();
    }
    format!("{s}{}", " ".repeat(width - used))
}

fn truncate_to_width(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        // Leave room for the ellipsis.
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
