//! Weekday ordinals under a fixed start-of-week convention.

use chrono::Weekday;

const MONDAY_FIRST: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Maps weekdays to `0..=6`, where 0 is the configured first day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekdayIndex {
    week_start: Weekday,
}

impl WeekdayIndex {
    pub const fn new(week_start: Weekday) -> Self {
        WeekdayIndex { week_start }
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    /// Ordinal of `weekday` within the week.
    pub fn index_of(&self, weekday: Weekday) -> u32 {
        (weekday.num_days_from_monday() + 7 - self.week_start.num_days_from_monday()) % 7
    }

    /// Inverse of [`index_of`](Self::index_of); `index` wraps modulo 7.
    pub fn weekday_at(&self, index: u32) -> Weekday {
        let offset = self.week_start.num_days_from_monday() + index % 7;
        MONDAY_FIRST[(offset % 7) as usize]
    }

    /// Weekdays in display order, starting with the first day of the week.
    pub fn order(&self) -> [Weekday; 7] {
        std::array::from_fn(|i| self.weekday_at(i as u32))
    }
}

impl Default for WeekdayIndex {
    fn default() -> Self {
        WeekdayIndex::new(crate::types::DEFAULT_WEEK_START)
    }
}
