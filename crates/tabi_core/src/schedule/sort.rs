//! Canonical date/time ordering.

use crate::model::entry::{ScheduleEntry, ScheduleInstant};
use crate::schedule::error::ScheduleResult;
use log::warn;

/// Returns entries ordered by date ascending, then time ascending.
///
/// The sort is stable: entries with an identical instant keep their input
/// relative order.
///
/// # Errors
/// - `ScheduleError::MalformedScheduleTime` for the first entry whose
///   date/time does not parse. Nothing is returned in that case.
pub fn sort_by_date_time(entries: &[ScheduleEntry]) -> ScheduleResult<Vec<ScheduleEntry>> {
    let sorted = sort_keyed(entries)?;
    Ok(sorted.into_iter().map(|(_, entry)| entry).collect())
}

/// Canonical order with each entry's parsed instant kept alongside it.
pub(crate) fn sort_keyed(
    entries: &[ScheduleEntry],
) -> ScheduleResult<Vec<(ScheduleInstant, ScheduleEntry)>> {
    let mut keyed = keyed_by_instant(entries)?;
    keyed.sort_by_key(|(instant, _)| *instant);
    Ok(keyed)
}

/// Fails like `sort_by_date_time` would, without building a result.
pub(crate) fn ensure_parseable(entries: &[ScheduleEntry]) -> ScheduleResult<()> {
    keyed_by_instant(entries).map(|_| ())
}

/// Returns whether `entries` already are in canonical order.
pub fn is_canonical(entries: &[ScheduleEntry]) -> ScheduleResult<bool> {
    let keyed = keyed_by_instant(entries)?;
    Ok(keyed.windows(2).all(|pair| pair[0].0 <= pair[1].0))
}

fn keyed_by_instant(
    entries: &[ScheduleEntry],
) -> ScheduleResult<Vec<(ScheduleInstant, ScheduleEntry)>> {
    entries
        .iter()
        .map(|entry| match entry.instant() {
            Ok(instant) => Ok((instant, entry.clone())),
            Err(err) => {
                warn!(
                    "event=schedule_parse module=schedule status=error entry_id={} error_code=malformed_schedule_time",
                    entry.id
                );
                Err(err)
            }
        })
        .collect()
}
