//! Error type shared by the data-access boundary and the command-line layer.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid time: {0} (expected HH:MM)")]
    InvalidTime(String),

    #[error("Invalid time slot: {0} (expected NAME=HH:MM-HH:MM)")]
    InvalidTimeSlot(String),

    #[error("Invalid session: {0} (expected WEEKDAY@SLOT[:LABEL])")]
    InvalidSessionSpec(String),

    #[error("Unknown weekday: {0}")]
    UnknownWeekday(String),

    #[error("Session {0} has no time slot")]
    MissingTimeSlot(u32),

    #[error("Unknown time slot: {0}")]
    UnknownTimeSlot(String),

    #[error("No complete week around {0} fits in the calendar")]
    OutsideCalendar(NaiveDate),

    #[error("Date range starts after it ends: {start} > {end}")]
    InvertedRange { start: NaiveDate, end: NaiveDate },
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
