//! Week window arithmetic and the `WeekCalendar` engine.
//!
//! The engine is stateless apart from its start-of-week convention: every
//! operation is a pure function of its arguments, so a single `WeekCalendar`
//! can be shared freely between threads.
//!
//! Windows only exist where all seven days are representable `NaiveDate`s;
//! operations that would leave the calendar return `None` instead of
//! overflowing.

use chrono::{Datelike, Days, NaiveDate, TimeDelta, Weekday};

use crate::range::CalendarDay;
use crate::types::{DAYS_PER_WEEK, DateRange, RecurringSession, WeekView, WeekWindow};
use crate::weekday::WeekdayIndex;

/// Schedule engine for one start-of-week convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WeekCalendar {
    index: WeekdayIndex,
}

impl WeekCalendar {
    pub const fn new(week_start: Weekday) -> Self {
        WeekCalendar {
            index: WeekdayIndex::new(week_start),
        }
    }

    pub fn weekday_index(&self) -> &WeekdayIndex {
        &self.index
    }

    pub fn week_start(&self) -> Weekday {
        self.index.week_start()
    }

    pub fn index_of(&self, weekday: Weekday) -> u32 {
        self.index.index_of(weekday)
    }

    /// First day of the week containing `day`, if representable.
    pub(crate) fn week_start_of(&self, day: NaiveDate) -> Option<NaiveDate> {
        let offset = self.index.index_of(day.weekday());
        day.checked_sub_days(Days::new(u64::from(offset)))
    }

    /// The week window containing `reference`, or `None` when that week runs
    /// past either end of the calendar.
    pub fn window_containing<D: CalendarDay>(&self, reference: &D) -> Option<WeekWindow> {
        let start = self.week_start_of(reference.calendar_day())?;
        let end = start.checked_add_days(Days::new(u64::from(DAYS_PER_WEEK) - 1))?;
        Some(WeekWindow { start, end })
    }

    /// Build the full view of `window`: projected sessions, navigation flags
    /// and the today highlight.
    pub fn week_view<D: CalendarDay>(
        &self,
        window: WeekWindow,
        range: &DateRange,
        sessions: &[RecurringSession],
        now: &D,
    ) -> WeekView {
        WeekView {
            window,
            sessions: self.project(&window, range, sessions),
            can_step_backward: self.can_step_backward(&window, range),
            can_step_forward: self.can_step_forward(&window, range),
            today_index: self.today_index(&window, now),
        }
    }
}

impl WeekWindow {
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Move both bounds by `weeks` whole weeks (negative moves backward).
    /// `None` if the result would leave the calendar.
    pub fn shift(&self, weeks: i64) -> Option<WeekWindow> {
        let delta = TimeDelta::try_weeks(weeks)?;
        Some(WeekWindow {
            start: self.start.checked_add_signed(delta)?,
            end: self.end.checked_add_signed(delta)?,
        })
    }

    /// Whether the calendar day of `date` lies in `[start, end]`.
    pub fn contains_day<D: CalendarDay>(&self, date: &D) -> bool {
        let day = date.calendar_day();
        self.start <= day && day <= self.end
    }

    /// The seven dates of the window, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        // not `iter_days`: it stops before NaiveDate::MAX
        let start = self.start;
        (0..DAYS_PER_WEEK)
            .filter_map(move |offset| start.checked_add_days(Days::new(u64::from(offset))))
    }
}
