//! Today highlight within the visible week.

use chrono::Datelike;

use crate::calendar::WeekCalendar;
use crate::range::CalendarDay;
use crate::types::WeekWindow;

impl WeekCalendar {
    /// Weekday index of `now` if its calendar day is inside `window`.
    pub fn today_index<D: CalendarDay>(&self, window: &WeekWindow, now: &D) -> Option<u32> {
        let today = now.calendar_day();
        window
            .contains_day(&today)
            .then(|| self.index_of(today.weekday()))
    }
}
