//! Error taxonomy of the schedule engine.

use crate::model::entry::EntryId;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type used by schedule engine operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Errors from schedule sorting and reordering.
///
/// None of these are transient: retrying the same call yields the same error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Entry `date`/`time` cannot be parsed into a comparable instant.
    MalformedScheduleTime {
        id: EntryId,
        date: String,
        time: String,
    },
    /// Move index is outside `[0, len)`.
    IndexOutOfRange { index: usize, len: usize },
    /// No entry in the sequence falls on the requested day.
    UnknownDate(String),
}

impl Display for ScheduleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedScheduleTime { id, date, time } => write!(
                f,
                "schedule entry {id} has malformed date/time `{date} {time}`"
            ),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "schedule index {index} out of range for length {len}")
            }
            Self::UnknownDate(date) => write!(f, "no schedule entries on date `{date}`"),
        }
    }
}

impl Error for ScheduleError {}
