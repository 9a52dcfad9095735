//! Validity ranges and day-granularity containment.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

use crate::error::{ScheduleError, ScheduleResult};
use crate::types::DateRange;

/// Normalizes a date or timestamp to its calendar day.
///
/// All range and window comparisons go through this, so two instants on the
/// same day always compare equal.
pub trait CalendarDay {
    fn calendar_day(&self) -> NaiveDate;
}

impl CalendarDay for NaiveDate {
    fn calendar_day(&self) -> NaiveDate {
        *self
    }
}

impl CalendarDay for NaiveDateTime {
    fn calendar_day(&self) -> NaiveDate {
        self.date()
    }
}

/// Uses the local date in the timestamp's own time zone.
impl<Tz: TimeZone> CalendarDay for DateTime<Tz> {
    fn calendar_day(&self) -> NaiveDate {
        self.date_naive()
    }
}

impl DateRange {
    /// Build a range, rejecting `start > end`.
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> ScheduleResult<Self> {
        if let (Some(start), Some(end)) = (start, end)
            && start > end
        {
            return Err(ScheduleError::InvertedRange { start, end });
        }
        Ok(DateRange { start, end })
    }

    pub const fn unbounded() -> Self {
        DateRange {
            start: None,
            end: None,
        }
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub(crate) fn is_well_formed(&self) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= end,
            _ => true,
        }
    }

    /// Inclusive containment at calendar-day granularity. A missing bound
    /// always holds.
    pub fn contains<D: CalendarDay>(&self, date: &D) -> bool {
        let day = date.calendar_day();
        self.start.is_none_or(|start| day >= start) && self.end.is_none_or(|end| day <= end)
    }

    /// Smallest range covering every range in `ranges`.
    ///
    /// An open bound on any member keeps the aggregate open on that side; an
    /// empty input yields the unbounded range.
    pub fn spanning<'a, I>(ranges: I) -> DateRange
    where
        I: IntoIterator<Item = &'a DateRange>,
    {
        let mut ranges = ranges.into_iter().peekable();
        if ranges.peek().is_none() {
            return DateRange::unbounded();
        }

        let mut start = Some(NaiveDate::MAX);
        let mut end = Some(NaiveDate::MIN);
        for range in ranges {
            start = start.zip(range.start).map(|(a, b)| a.min(b));
            end = end.zip(range.end).map(|(a, b)| a.max(b));
        }
        DateRange { start, end }
    }

    /// Clamp `date` into the range.
    pub fn clamp(&self, date: NaiveDate) -> NaiveDate {
        match (self.start, self.end) {
            (Some(start), _) if date < start => start,
            (_, Some(end)) if date > end => end,
            _ => date,
        }
    }
}
