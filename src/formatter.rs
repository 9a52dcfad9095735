//! Text rendering of a week view.

use chrono::{Datelike, NaiveDate};
use unicode_width::UnicodeWidthStr;

use crate::types::{
    COLOR_RESET, COLOR_REVERSE, COLOR_SAND_YELLOW, COLOR_TEAL, ProjectedSession, TIME_FORMAT,
    ViewContext, WeekView, WeekWindow,
};

/// Width of the day label column ("Mon 06").
const DAY_LABEL_WIDTH: usize = 6;
const COLUMN_GAP: &str = "  ";
const NAV_PREVIOUS: &str = "< prev";
const NAV_NEXT: &str = "next >";
const NO_SESSIONS: &str = "-";

/// "06 Jan 2025 - 12 Jan 2025", centered in `width`.
pub fn format_week_header(window: &WeekWindow, width: usize, color: bool) -> String {
    let header = format!(
        "{} - {}",
        window.start().format("%d %b %Y"),
        window.end().format("%d %b %Y")
    );
    let centered = center_text(&header, width);
    if color {
        format!("{}{}{}", COLOR_TEAL, centered, COLOR_RESET)
    } else {
        centered
    }
}

/// Previous/next markers at both ends of a `width`-wide line. Unreachable
/// directions are left blank.
pub fn format_navigation(view: &WeekView, width: usize) -> String {
    let left = if view.can_step_backward {
        NAV_PREVIOUS
    } else {
        ""
    };
    let right = if view.can_step_forward { NAV_NEXT } else { "" };
    let gap = width.saturating_sub(left.width() + right.width()).max(1);
    format!("{}{}{}", left, " ".repeat(gap), right)
        .trim_end()
        .to_string()
}

/// "Mon 06" for `date`.
pub fn format_day_label(date: NaiveDate) -> String {
    format!("{} {:02}", date.weekday(), date.day())
}

fn format_session(session: &ProjectedSession, slot_width: usize) -> String {
    let name = &session.time_slot.name;
    let padding = " ".repeat(slot_width.saturating_sub(name.width()));
    format!(
        "{}{}{}{}-{}{}{}",
        name,
        padding,
        COLUMN_GAP,
        session.time_slot.start.format(TIME_FORMAT),
        session.time_slot.end.format(TIME_FORMAT),
        COLUMN_GAP,
        session.label
    )
}

/// One block per day: the day label, then its sessions. Extra sessions on
/// the same day continue on indented lines.
pub fn format_day_rows(ctx: &ViewContext, view: &WeekView) -> Vec<String> {
    let slot_width = view
        .sessions
        .iter()
        .map(|s| s.time_slot.name.width())
        .max()
        .unwrap_or(0);
    let indent = " ".repeat(DAY_LABEL_WIDTH);

    let mut lines = Vec::new();
    for (index, date) in (0u32..).zip(view.window.days()) {
        let label = format_day_label(date);
        let label = if view.today_index == Some(index) && ctx.color {
            format!("{}{}{}", COLOR_REVERSE, label, COLOR_RESET)
        } else if ctx.color {
            format!("{}{}{}", COLOR_SAND_YELLOW, label, COLOR_RESET)
        } else {
            label
        };

        let mut day_sessions = view.sessions.iter().filter(|s| s.occurs_on == date);
        match day_sessions.next() {
            Some(first) => {
                lines.push(format!(
                    "{}{}{}",
                    label,
                    COLUMN_GAP,
                    format_session(first, slot_width)
                ));
                for session in day_sessions {
                    lines.push(format!(
                        "{}{}{}",
                        indent,
                        COLUMN_GAP,
                        format_session(session, slot_width)
                    ));
                }
            }
            None => lines.push(format!("{}{}{}", label, COLUMN_GAP, NO_SESSIONS)),
        }
    }
    lines
}

/// Full listing for one week: header, navigation line and day rows.
pub fn format_week(ctx: &ViewContext, view: &WeekView) -> Vec<String> {
    let rows = format_day_rows(ctx, view);
    let header = format_week_header(&view.window, 0, false);
    let width = header.width().max(NAV_PREVIOUS.width() + NAV_NEXT.width() + 1);

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_week_header(&view.window, width, ctx.color));
    lines.push(format_navigation(view, width));
    lines.extend(rows);
    lines
}

pub fn print_week(ctx: &ViewContext, view: &WeekView) {
    for line in format_week(ctx, view) {
        println!("{}", line);
    }
}

fn center_text(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }
    let total_padding = width - text_width;
    let left_padding = total_padding.div_ceil(2);
    let right_padding = total_padding - left_padding;
    format!(
        "{}{}{}",
        " ".repeat(left_padding),
        text,
        " ".repeat(right_padding)
    )
}
