//! Day buckets for schedule list display.

use crate::model::entry::ScheduleEntry;
use crate::schedule::error::ScheduleResult;
use crate::schedule::sort::sort_keyed;
use chrono::NaiveDate;
use serde::Serialize;

/// Entries of one calendar day, in canonical order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayGroup {
    pub date: NaiveDate,
    /// 1-based trip day: the earliest date is day 1.
    pub day_number: usize,
    pub entries: Vec<ScheduleEntry>,
}

/// Buckets entries by date, days ascending and entries by time within a day.
///
/// Day numbers count distinct dates that have entries, so gaps between dates
/// do not skip numbers.
pub fn group_by_day(entries: &[ScheduleEntry]) -> ScheduleResult<Vec<DayGroup>> {
    let mut groups: Vec<DayGroup> = Vec::new();
    for (instant, entry) in sort_keyed(entries)? {
        let date = instant.date;
        match groups.last_mut() {
            Some(group) if group.date == date => group.entries.push(entry),
            _ => groups.push(DayGroup {
                date,
                day_number: groups.len() + 1,
                entries: vec![entry],
            }),
        }
    }
    Ok(groups)
}
