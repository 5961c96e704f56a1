//! Schedule entry domain model.
//!
//! # Responsibility
//! - Define the canonical itinerary activity record.
//! - Parse entry `date`/`time` strings into a comparable `ScheduleInstant`.
//!
//! # Invariants
//! - `id` is unique inside one itinerary and never reused.
//! - `date` is `YYYY-MM-DD`, `time` is `HH:MM` (seconds are tolerated).
//! - `title`, `location` and `image` are opaque display strings.

use crate::schedule::error::{ScheduleError, ScheduleResult};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Identifier of one schedule entry, assigned as `max(existing) + 1`.
pub type EntryId = u64;

/// Wire format of `ScheduleEntry::date`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Wire format of `ScheduleEntry::time`.
pub const TIME_FORMAT: &str = "%H:%M";
const TIME_FORMAT_WITH_SECONDS: &str = "%H:%M:%S";

/// One itinerary activity: a date, a start time and display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub id: EntryId,
    /// Day the activity occurs, `YYYY-MM-DD`.
    pub date: String,
    /// Start time within `date`, `HH:MM`.
    pub time: String,
    pub title: String,
    pub location: String,
    pub image: String,
    /// JIS prefecture code used by the map picker. Opaque to the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefecture_code: Option<String>,
}

impl ScheduleEntry {
    /// Creates an entry with empty image and no prefecture code.
    pub fn new(
        id: EntryId,
        date: impl Into<String>,
        time: impl Into<String>,
        title: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id,
            date: date.into(),
            time: time.into(),
            title: title.into(),
            location: location.into(),
            image: String::new(),
            prefecture_code: None,
        }
    }

    /// Parses `date` + `time` into one comparable instant.
    ///
    /// # Errors
    /// - `ScheduleError::MalformedScheduleTime` when either field does not parse.
    pub fn instant(&self) -> ScheduleResult<ScheduleInstant> {
        ScheduleInstant::parse(&self.date, &self.time).ok_or_else(|| {
            ScheduleError::MalformedScheduleTime {
                id: self.id,
                date: self.date.clone(),
                time: self.time.clone(),
            }
        })
    }
}

/// Date plus time-of-day, ordered by date first and time second.
///
/// Field order matters: the derived `Ord` compares `date` before `time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScheduleInstant {
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl ScheduleInstant {
    /// Parses wire-format strings. Returns `None` when either part is invalid.
    pub fn parse(date: &str, time: &str) -> Option<Self> {
        Some(Self {
            date: parse_date(date)?,
            time: parse_time(time)?,
        })
    }
}

/// Parses a `YYYY-MM-DD` date after trimming surrounding whitespace.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// Parses an `HH:MM` (or `HH:MM:SS`) time after trimming surrounding whitespace.
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    let trimmed = value.trim();
    NaiveTime::parse_from_str(trimmed, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(trimmed, TIME_FORMAT_WITH_SECONDS))
        .ok()
}
