//! Type definitions and constants for schedule projection and display.

use chrono::{NaiveDate, NaiveTime, Weekday};

use crate::calendar::WeekCalendar;

/// A 7-day span aligned to the configured first day of the week.
///
/// Only produced by [`WeekCalendar::window_containing`] and [`WeekWindow::shift`],
/// so `start` always has weekday index 0 and `end` is exactly six days later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekWindow {
    pub(crate) start: NaiveDate,
    pub(crate) end: NaiveDate,
}

/// Inclusive calendar-day interval; a `None` bound is open on that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub(crate) start: Option<NaiveDate>,
    pub(crate) end: Option<NaiveDate>,
}

/// Named part of a day a session is held in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    pub name: String,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// "Every week on `weekday`, in `time_slot`."
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurringSession {
    pub id: u32,
    pub weekday: Weekday,
    pub time_slot: TimeSlot,
    pub label: String,
}

/// A recurring session resolved to one date of a specific week window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectedSession {
    pub session_id: u32,
    pub occurs_on: NaiveDate,
    pub time_slot: TimeSlot,
    pub label: String,
}

/// Everything the presentation layer needs to draw one week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekView {
    pub window: WeekWindow,
    pub sessions: Vec<ProjectedSession>,
    pub can_step_backward: bool,
    pub can_step_forward: bool,
    /// In-window ordinal of today, `None` when today is not in view.
    pub today_index: Option<u32>,
}

/// Direction of a one-week navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Backward,
    Forward,
}

impl Direction {
    pub fn weeks(self) -> i64 {
        match self {
            Direction::Backward => -1,
            Direction::Forward => 1,
        }
    }
}

/// Display context for printing a week view.
#[derive(Clone, Debug)]
pub struct ViewContext {
    /// Engine configured with the start-of-week convention.
    pub calendar: WeekCalendar,
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// Today's date for highlighting.
    pub today: NaiveDate,
}

pub const DEFAULT_WEEK_START: Weekday = Weekday::Mon;
pub const DAYS_PER_WEEK: u32 = 7;

/// Slots used when the caller supplies no catalog: (name, start, end).
pub const DEFAULT_TIME_SLOTS: [(&str, (u32, u32), (u32, u32)); 3] = [
    ("morning", (8, 0), (11, 30)),
    ("afternoon", (13, 30), (17, 0)),
    ("evening", (18, 0), (21, 0)),
];

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

// Color is enabled by default for better user experience
pub const COLOR_ENABLED_BY_DEFAULT: bool = true;

// ANSI color codes
pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_REVERSE: &str = "\x1b[7m";
pub const COLOR_TEAL: &str = "\x1b[96m";
pub const COLOR_SAND_YELLOW: &str = "\x1b[93m";
