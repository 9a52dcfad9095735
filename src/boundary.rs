//! Conversion of raw course data into validated schedule input.
//!
//! Records arrive as loosely typed values (weekday names, slot names). They are
//! resolved here, before they reach the projector; records that cannot be
//! resolved are logged and dropped so the rest of the schedule stays usable.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime, Weekday};
use tracing::warn;

use crate::error::{ScheduleError, ScheduleResult};
use crate::types::{DATE_FORMAT, DEFAULT_TIME_SLOTS, RecurringSession, TIME_FORMAT, TimeSlot};

/// Unvalidated session as delivered by the data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    pub id: u32,
    pub weekday: String,
    pub time_slot: Option<String>,
    pub label: String,
}

impl SessionRecord {
    /// Resolve weekday and slot against `catalog`.
    pub fn resolve(&self, catalog: &[TimeSlot]) -> ScheduleResult<RecurringSession> {
        let weekday = parse_weekday(&self.weekday)?;
        let slot_name = self
            .time_slot
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(ScheduleError::MissingTimeSlot(self.id))?;
        let time_slot = catalog
            .iter()
            .find(|slot| slot.name.eq_ignore_ascii_case(slot_name))
            .cloned()
            .ok_or_else(|| ScheduleError::UnknownTimeSlot(slot_name.to_string()))?;

        Ok(RecurringSession {
            id: self.id,
            weekday,
            time_slot,
            label: self.label.clone(),
        })
    }
}

/// Resolve every record, dropping (and logging) the ones that fail.
pub fn collect_sessions(records: &[SessionRecord], catalog: &[TimeSlot]) -> Vec<RecurringSession> {
    records
        .iter()
        .filter_map(|record| match record.resolve(catalog) {
            Ok(session) => Some(session),
            Err(e) => {
                warn!(session_id = record.id, error = %e, "dropping malformed session");
                None
            }
        })
        .collect()
}

/// Weekday by English name or three-letter abbreviation, case-insensitive.
pub fn parse_weekday(s: &str) -> ScheduleResult<Weekday> {
    Weekday::from_str(s.trim()).map_err(|_| ScheduleError::UnknownWeekday(s.to_string()))
}

pub fn parse_date(s: &str) -> ScheduleResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| ScheduleError::InvalidDate(s.to_string()))
}

pub fn parse_time(s: &str) -> ScheduleResult<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), TIME_FORMAT)
        .map_err(|_| ScheduleError::InvalidTime(s.to_string()))
}

/// Parse `NAME=HH:MM-HH:MM`. The slot must end after it starts.
pub fn parse_time_slot(s: &str) -> ScheduleResult<TimeSlot> {
    let invalid = || ScheduleError::InvalidTimeSlot(s.to_string());

    let (name, times) = s.split_once('=').ok_or_else(invalid)?;
    let name = name.trim();
    if name.is_empty() {
        return Err(invalid());
    }
    let (start, end) = times.split_once('-').ok_or_else(invalid)?;
    let start = parse_time(start)?;
    let end = parse_time(end)?;
    if start >= end {
        return Err(invalid());
    }

    Ok(TimeSlot {
        name: name.to_string(),
        start,
        end,
    })
}

/// Parse `WEEKDAY@SLOT[:LABEL]` into an unvalidated record.
///
/// Only the shape is checked here; weekday and slot are resolved later by
/// [`collect_sessions`]. A missing label defaults to the slot name.
pub fn parse_session_spec(id: u32, s: &str) -> ScheduleResult<SessionRecord> {
    let (weekday, rest) = s
        .split_once('@')
        .ok_or_else(|| ScheduleError::InvalidSessionSpec(s.to_string()))?;
    let (slot, label) = match rest.split_once(':') {
        Some((slot, label)) => (slot.trim(), label.trim()),
        None => (rest.trim(), ""),
    };
    let label = if label.is_empty() { slot } else { label };

    Ok(SessionRecord {
        id,
        weekday: weekday.trim().to_string(),
        time_slot: (!slot.is_empty()).then(|| slot.to_string()),
        label: label.to_string(),
    })
}

/// Catalog used when no slots are configured.
pub fn default_time_slots() -> Vec<TimeSlot> {
    DEFAULT_TIME_SLOTS
        .iter()
        .filter_map(|&(name, (sh, sm), (eh, em))| {
            Some(TimeSlot {
                name: name.to_string(),
                start: NaiveTime::from_hms_opt(sh, sm, 0)?,
                end: NaiveTime::from_hms_opt(eh, em, 0)?,
            })
        })
        .collect()
}
