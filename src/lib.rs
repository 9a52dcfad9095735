//! Recurring weekly schedule projection and navigation.
//!
//! Features:
//! - Week windows aligned to a configurable first day of the week
//! - Projection of "every week on this weekday" sessions onto concrete dates
//! - Course validity ranges with per-day truncation
//! - Week navigation bounded by the validity range
//! - Today highlighting within the visible week

pub mod args;
pub mod boundary;
pub mod calendar;
pub mod error;
pub mod formatter;
pub mod navigation;
pub mod projector;
pub mod range;
pub mod today;
pub mod types;
pub mod weekday;
