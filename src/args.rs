//! Command-line argument parsing using clap.

use clap::{Parser, ValueHint};
use std::io::IsTerminal;

use crate::boundary::{
    collect_sessions, default_time_slots, parse_date, parse_session_spec, parse_time_slot,
};
use crate::calendar::WeekCalendar;
use crate::error::{ScheduleError, ScheduleResult};
use crate::types::{
    COLOR_ENABLED_BY_DEFAULT, DATE_FORMAT, DEFAULT_WEEK_START, DateRange, RecurringSession,
    ViewContext,
};

#[derive(Parser, Debug)]
#[command(name = "coursecal")]
#[command(about = "Displays one week of a course's recurring sessions", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Week starts on Sunday (default is Monday).
    #[arg(short = 's', long, help_heading = "Calendar options")]
    pub sunday: bool,

    /// Week starts on Monday (default).
    #[arg(short = 'm', long, help_heading = "Calendar options")]
    pub monday: bool,

    /// First day the course runs (YYYY-MM-DD).
    #[arg(long, help_heading = "Course options", value_name = "date")]
    pub start: Option<String>,

    /// Last day the course runs (YYYY-MM-DD).
    #[arg(long, help_heading = "Course options", value_name = "date")]
    pub end: Option<String>,

    /// Time slot definition, NAME=HH:MM-HH:MM (repeatable).
    #[arg(long = "slot", help_heading = "Course options", value_name = "slot")]
    pub slots: Vec<String>,

    /// Weekly session, WEEKDAY@SLOT[:LABEL] (repeatable).
    #[arg(long = "session", help_heading = "Course options", value_name = "session")]
    pub sessions: Vec<String>,

    /// Move this many weeks from the initial week (negative goes back).
    #[arg(
        short = 'w',
        long,
        default_value_t = 0,
        allow_hyphen_values = true,
        help_heading = "Display options",
        value_name = "num"
    )]
    pub weeks: i64,

    /// Disable colorized output.
    #[arg(long, help_heading = "Output options")]
    pub color: bool,

    /// Reference date (YYYY-MM-DD); defaults to today.
    #[arg(index = 1, value_name = "date", value_hint = ValueHint::Other)]
    pub date: Option<String>,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Display one week of a course schedule.

Without a date, display the current week (kept inside the course dates).

Examples:
  coursecal --session wed@morning:Algebra
  coursecal --start 2025-01-06 --end 2025-03-31 --session mon@evening 2025-01-08
  coursecal --slot lab=14:00-16:00 --session fri@lab:Chemistry
  coursecal -w -2 --session tue@afternoon   Two weeks back
  coursecal -s --session sun@morning        Week starts on Sunday";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Course validity range from `--start`/`--end`.
    pub fn date_range(&self) -> ScheduleResult<DateRange> {
        let start = self.start.as_deref().map(parse_date).transpose()?;
        let end = self.end.as_deref().map(parse_date).transpose()?;
        DateRange::new(start, end)
    }

    /// Sessions from `--session`, resolved against `--slot` (or the default
    /// catalog). Unresolvable sessions are dropped with a warning.
    pub fn recurring_sessions(&self) -> ScheduleResult<Vec<RecurringSession>> {
        let catalog = if self.slots.is_empty() {
            default_time_slots()
        } else {
            self.slots
                .iter()
                .map(|s| parse_time_slot(s))
                .collect::<ScheduleResult<Vec<_>>>()?
        };

        let records = self
            .sessions
            .iter()
            .enumerate()
            .map(|(i, spec)| {
                let id = u32::try_from(i + 1)
                    .map_err(|_| ScheduleError::InvalidSessionSpec(spec.clone()))?;
                parse_session_spec(id, spec)
            })
            .collect::<ScheduleResult<Vec<_>>>()?;

        Ok(collect_sessions(&records, &catalog))
    }

    /// Date the initial week is computed from.
    pub fn reference_date(&self, today: chrono::NaiveDate) -> ScheduleResult<chrono::NaiveDate> {
        match self.date.as_deref() {
            Some(date) => parse_date(date),
            None => Ok(today),
        }
    }
}

impl ViewContext {
    pub fn new(args: &Args) -> Self {
        let today = get_today_date();

        let color = !args.color && COLOR_ENABLED_BY_DEFAULT && std::io::stdout().is_terminal();

        ViewContext {
            calendar: WeekCalendar::new(if args.sunday {
                chrono::Weekday::Sun
            } else {
                DEFAULT_WEEK_START
            }),
            color,
            today,
        }
    }
}

/// Get today's date, respecting COURSECAL_TEST_TIME environment variable for testing.
pub fn get_today_date() -> chrono::NaiveDate {
    if let Ok(test_time) = std::env::var("COURSECAL_TEST_TIME")
        && let Ok(date) = chrono::NaiveDate::parse_from_str(&test_time, DATE_FORMAT)
    {
        return date;
    }
    chrono::Local::now().date_naive()
}
