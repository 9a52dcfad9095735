//! Resolves recurring sessions against a week window.

use chrono::Days;
use tracing::debug;

use crate::calendar::WeekCalendar;
use crate::types::{DateRange, ProjectedSession, RecurringSession, WeekWindow};

impl WeekCalendar {
    /// Sessions that occur in `window` on a day inside `valid_range`.
    ///
    /// Each session lands on `window.start + index_of(weekday)`. Truncation is
    /// per day: a week that only partly overlaps the range keeps the sessions
    /// whose own date is in range. Output is ordered by date; sessions on the
    /// same day keep their input order.
    pub fn project(
        &self,
        window: &WeekWindow,
        valid_range: &DateRange,
        sessions: &[RecurringSession],
    ) -> Vec<ProjectedSession> {
        debug_assert!(
            valid_range.is_well_formed(),
            "inverted date range reached the projector: {valid_range:?}"
        );

        let mut projected: Vec<ProjectedSession> = sessions
            .iter()
            .filter_map(|session| {
                let offset = self.index_of(session.weekday);
                let occurs_on = window.start().checked_add_days(Days::new(u64::from(offset)))?;
                valid_range.contains(&occurs_on).then(|| ProjectedSession {
                    session_id: session.id,
                    occurs_on,
                    time_slot: session.time_slot.clone(),
                    label: session.label.clone(),
                })
            })
            .collect();

        // stable: same-day sessions keep input order
        projected.sort_by_key(|p| p.occurs_on);

        debug!(
            week_start = %window.start(),
            total = sessions.len(),
            projected = projected.len(),
            "projected sessions"
        );
        projected
    }
}
