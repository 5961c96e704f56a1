//! Drag-and-drop moves and per-day time rebucketing.
//!
//! # Invariants
//! - A move is all-or-nothing: index errors are reported before any copy is
//!   reordered.
//! - Rebucketing reuses the day's own pool of time values; it never invents a
//!   time and never moves a time to another day.
//! - Pool ties resolve by position in the day (stable sort), so duplicate
//!   times always land on the earliest visual slots in input order.

use crate::model::entry::{parse_date, ScheduleEntry};
use crate::schedule::error::{ScheduleError, ScheduleResult};
use crate::schedule::sort::{ensure_parseable, sort_by_date_time};
use chrono::{NaiveDate, NaiveTime};
use log::{debug, warn};
use std::collections::HashMap;

/// Moves the entry at `source_index` so it ends up at `target_index`, then
/// rebuckets times and returns canonical order.
///
/// Indices address the whole visual sequence. A move across days is allowed:
/// the dragged entry keeps its date, so only its position relative to other
/// entries of the same day has an effect. Equal indices return `entries`
/// unchanged once every entry parses.
///
/// # Errors
/// - `ScheduleError::IndexOutOfRange` when either index is `>= entries.len()`.
/// - `ScheduleError::MalformedScheduleTime` when any entry fails to parse.
pub fn move_entry(
    entries: &[ScheduleEntry],
    source_index: usize,
    target_index: usize,
) -> ScheduleResult<Vec<ScheduleEntry>> {
    ensure_in_range(source_index, entries.len())?;
    ensure_in_range(target_index, entries.len())?;
    if source_index == target_index {
        ensure_parseable(entries)?;
        return Ok(entries.to_vec());
    }

    let mut reordered = entries.to_vec();
    let dragged = reordered.remove(source_index);
    reordered.insert(target_index, dragged);

    let result = reassign_times(&reordered)?;
    debug!(
        "event=schedule_move module=schedule status=ok scope=all len={} source_index={} target_index={}",
        entries.len(),
        source_index,
        target_index
    );
    Ok(result)
}

/// Moves one entry inside a single day, using indices relative to that day.
///
/// The day's entries are taken in their order of appearance in `entries`;
/// entries of other days keep their slots.
///
/// # Errors
/// - `ScheduleError::UnknownDate` when `date` does not parse or no entry
///   falls on it.
/// - `ScheduleError::IndexOutOfRange` when an index is `>=` the day's length.
/// - `ScheduleError::MalformedScheduleTime` when any entry fails to parse.
pub fn move_within_day(
    entries: &[ScheduleEntry],
    date: &str,
    source_index: usize,
    target_index: usize,
) -> ScheduleResult<Vec<ScheduleEntry>> {
    let day = parse_date(date).ok_or_else(|| ScheduleError::UnknownDate(date.to_string()))?;

    let mut slots = Vec::new();
    for (position, entry) in entries.iter().enumerate() {
        if entry.instant()?.date == day {
            slots.push(position);
        }
    }
    if slots.is_empty() {
        return Err(ScheduleError::UnknownDate(date.to_string()));
    }
    ensure_in_range(source_index, slots.len())?;
    ensure_in_range(target_index, slots.len())?;
    if source_index == target_index {
        return Ok(entries.to_vec());
    }

    let mut day_entries: Vec<ScheduleEntry> =
        slots.iter().map(|slot| entries[*slot].clone()).collect();
    let dragged = day_entries.remove(source_index);
    day_entries.insert(target_index, dragged);

    let mut reordered = entries.to_vec();
    for (slot, entry) in slots.iter().zip(day_entries) {
        reordered[*slot] = entry;
    }

    let result = reassign_times(&reordered)?;
    debug!(
        "event=schedule_move module=schedule status=ok scope=day day_len={} source_index={} target_index={}",
        slots.len(),
        source_index,
        target_index
    );
    Ok(result)
}

/// Rewrites times inside each day so that they ascend in visual order, then
/// returns canonical order.
///
/// Each day's original time values are pooled, sorted by time-of-day and
/// handed back out in the order the day's entries appear in `entries`.
///
/// # Errors
/// - `ScheduleError::MalformedScheduleTime` when any entry fails to parse.
pub fn reassign_times(entries: &[ScheduleEntry]) -> ScheduleResult<Vec<ScheduleEntry>> {
    let mut days: Vec<Vec<(NaiveTime, ScheduleEntry)>> = Vec::new();
    let mut day_slots: HashMap<NaiveDate, usize> = HashMap::new();
    for entry in entries {
        let instant = entry.instant()?;
        let slot = *day_slots.entry(instant.date).or_insert_with(|| {
            days.push(Vec::new());
            days.len() - 1
        });
        days[slot].push((instant.time, entry.clone()));
    }

    let mut rebucketed = Vec::with_capacity(entries.len());
    for members in days {
        let mut pool: Vec<(NaiveTime, String)> = members
            .iter()
            .map(|(time, entry)| (*time, entry.time.clone()))
            .collect();
        pool.sort_by_key(|(time, _)| *time);

        for ((_, mut entry), (_, time)) in members.into_iter().zip(pool) {
            entry.time = time;
            rebucketed.push(entry);
        }
    }

    sort_by_date_time(&rebucketed)
}

fn ensure_in_range(index: usize, len: usize) -> ScheduleResult<()> {
    if index < len {
        return Ok(());
    }
    warn!(
        "event=schedule_move module=schedule status=error error_code=index_out_of_range index={} len={}",
        index, len
    );
    Err(ScheduleError::IndexOutOfRange { index, len })
}

#[cfg(test)]
mod tests {
    use super::{move_entry, reassign_times};
    use crate::model::entry::ScheduleEntry;

    fn entry(id: u64, date: &str, time: &str) -> ScheduleEntry {
        ScheduleEntry::new(id, date, time, format!("stop-{id}"), "Kyoto")
    }

    #[test]
    fn reassign_keeps_exact_time_strings_from_pool() {
        let input = vec![
            entry(1, "2024-03-20", "11:00:00"),
            entry(2, "2024-03-20", "09:15"),
        ];

        let result = reassign_times(&input).unwrap();
        assert_eq!(result[0].id, 1);
        assert_eq!(result[0].time, "09:15");
        assert_eq!(result[1].id, 2);
        assert_eq!(result[1].time, "11:00:00");
    }

    #[test]
    fn move_to_last_slot_appends_dragged_entry() {
        let input = vec![
            entry(1, "2024-03-20", "09:00"),
            entry(2, "2024-03-20", "10:00"),
            entry(3, "2024-03-20", "11:00"),
        ];

        let result = move_entry(&input, 0, 2).unwrap();
        let order: Vec<(u64, &str)> = result.iter().map(|e| (e.id, e.time.as_str())).collect();
        assert_eq!(order, vec![(2, "09:00"), (3, "10:00"), (1, "11:00")]);
    }
}
