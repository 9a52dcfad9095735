//! Week-to-week navigation bounded by a validity range.
//!
//! Bounds are checked at week granularity: any week that contains at least one
//! in-range day is reachable, even if some of its days fall outside the range.
//! The edges of the representable calendar bound navigation the same way.

use chrono::NaiveDate;
use tracing::debug;

use crate::calendar::WeekCalendar;
use crate::types::{DAYS_PER_WEEK, DateRange, Direction, WeekWindow};

impl WeekCalendar {
    /// Whether the week before `window` is still reachable.
    pub fn can_step_backward(&self, window: &WeekWindow, range: &DateRange) -> bool {
        self.backward_steps(window, range) > 0
    }

    /// Whether the week after `window` is still reachable.
    pub fn can_step_forward(&self, window: &WeekWindow, range: &DateRange) -> bool {
        self.forward_steps(window, range) > 0
    }

    /// Weeks `window` can move back before its start passes the week of
    /// `range.start` or the first representable week.
    fn backward_steps(&self, window: &WeekWindow, range: &DateRange) -> i64 {
        // a range start whose week begins before the calendar does not bind
        let floor = range
            .start()
            .and_then(|start| self.week_start_of(start))
            .unwrap_or(NaiveDate::MIN);
        whole_weeks(floor, window.start())
    }

    /// Weeks `window` can move forward before its start passes the week of
    /// `range.end` or its end passes the last representable day.
    fn forward_steps(&self, window: &WeekWindow, range: &DateRange) -> i64 {
        let to_edge = whole_weeks(window.end(), NaiveDate::MAX);
        match range.end() {
            Some(end) => match self.week_start_of(end) {
                Some(ceiling) => whole_weeks(window.start(), ceiling).min(to_edge),
                None => 0,
            },
            None => to_edge,
        }
    }

    /// Move one week in `direction`, or `None` if that would leave the range
    /// or the calendar.
    pub fn step(
        &self,
        window: &WeekWindow,
        direction: Direction,
        range: &DateRange,
    ) -> Option<WeekWindow> {
        let allowed = match direction {
            Direction::Backward => self.can_step_backward(window, range),
            Direction::Forward => self.can_step_forward(window, range),
        };
        if !allowed {
            debug!(week_start = %window.start(), ?direction, "navigation blocked");
            return None;
        }
        window.shift(direction.weeks())
    }

    /// Move `weeks` weeks (negative goes backward), stopping at the last
    /// reachable week.
    pub fn step_by(&self, window: &WeekWindow, weeks: i64, range: &DateRange) -> WeekWindow {
        let (limit, sign) = if weeks < 0 {
            (self.backward_steps(window, range), -1)
        } else {
            (self.forward_steps(window, range), 1)
        };
        let limit = u64::try_from(limit).unwrap_or(0);
        let steps = weeks.unsigned_abs().min(limit);
        if steps < weeks.unsigned_abs() {
            debug!(week_start = %window.start(), weeks, steps, "navigation clamped");
        }

        i64::try_from(steps)
            .ok()
            .and_then(|steps| window.shift(sign * steps))
            .unwrap_or(*window)
    }

    /// First window to show: the week of `reference`, pulled into the range
    /// when `reference` lies outside it. `None` at the calendar edges.
    pub fn initial_window(&self, reference: NaiveDate, range: &DateRange) -> Option<WeekWindow> {
        self.window_containing(&range.clamp(reference))
    }
}

/// Whole weeks from `from` to `to`; negative when `to` is earlier.
fn whole_weeks(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days().div_euclid(i64::from(DAYS_PER_WEEK))
}
