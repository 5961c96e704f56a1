//! Itinerary use-case service.
//!
//! # Responsibility
//! - Create, edit and delete schedule entries on an itinerary value.
//! - Build the saved-plan summary of an itinerary.
//!
//! # Invariants
//! - Every operation takes the current entries by reference and returns a new
//!   collection; nothing is stored between calls.
//! - New ids are `max(existing ids, 0) + 1`.
//! - Results of `add_entry`/`update_entry` are in canonical order.

use crate::config::PlannerConfig;
use crate::model::entry::{parse_date, EntryId, ScheduleEntry, DATE_FORMAT, TIME_FORMAT};
use crate::model::plan::{PlanId, PlanSummary, PlannedStop};
use crate::schedule::error::ScheduleError;
use crate::schedule::sort::sort_by_date_time;
use chrono::Duration;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Full-width parenthesis that opens a location's detail suffix.
const LOCATION_DETAIL_OPEN: char = '（';

/// Result type used by itinerary service operations.
pub type ItineraryResult<T> = Result<T, ItineraryError>;

/// Errors from itinerary service operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItineraryError {
    /// Required form field is blank after trim.
    MissingField(&'static str),
    /// No entry with this id exists.
    EntryNotFound(EntryId),
    /// A plan needs at least one entry.
    EmptyItinerary,
    /// The largest existing id is `EntryId::MAX`; no fresh id is left.
    IdExhausted,
    /// Engine-level failure.
    Schedule(ScheduleError),
}

impl Display for ItineraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "`{field}` must not be blank"),
            Self::EntryNotFound(id) => write!(f, "schedule entry not found: {id}"),
            Self::EmptyItinerary => write!(f, "itinerary has no schedule entries"),
            Self::IdExhausted => write!(f, "no schedule entry id left after {}", EntryId::MAX),
            Self::Schedule(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ItineraryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Schedule(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ScheduleError> for ItineraryError {
    fn from(value: ScheduleError) -> Self {
        Self::Schedule(value)
    }
}

/// Form input for a new schedule entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    pub date: String,
    pub time: String,
    pub title: String,
    pub location: String,
    /// Falls back to `PlannerConfig::default_image` when `None` or blank.
    pub image: Option<String>,
    pub prefecture_code: Option<String>,
}

/// Returns the id the next created entry receives, or `None` when an
/// existing entry already holds `EntryId::MAX`.
pub fn next_entry_id(entries: &[ScheduleEntry]) -> Option<EntryId> {
    entries
        .iter()
        .map(|entry| entry.id)
        .max()
        .unwrap_or(0)
        .checked_add(1)
}

/// Itinerary editing facade.
pub struct ItineraryService {
    config: PlannerConfig,
}

impl ItineraryService {
    /// Creates service with the given planner defaults.
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Returns active planner defaults.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Appends one entry built from `draft` and returns the canonical
    /// itinerary together with the new entry's id.
    ///
    /// # Errors
    /// - `MissingField` when date, time, title or location is blank.
    /// - `IdExhausted` when an existing entry holds `EntryId::MAX`.
    /// - `Schedule(MalformedScheduleTime)` when date/time do not parse, or
    ///   when an existing entry is malformed.
    pub fn add_entry(
        &self,
        entries: &[ScheduleEntry],
        draft: EntryDraft,
    ) -> ItineraryResult<(Vec<ScheduleEntry>, EntryId)> {
        let date = required(draft.date, "date")?;
        let time = required(draft.time, "time")?;
        let title = required(draft.title, "title")?;
        let location = required(draft.location, "location")?;

        let id = next_entry_id(entries).ok_or_else(|| {
            warn!("event=entry_add module=itinerary status=error error_code=id_exhausted");
            ItineraryError::IdExhausted
        })?;
        let mut entry = ScheduleEntry::new(id, date, time, title, location);
        entry.image = match draft.image {
            Some(image) if !image.trim().is_empty() => image,
            _ => self.config.default_image.clone(),
        };
        entry.prefecture_code = draft.prefecture_code.filter(|code| !code.trim().is_empty());
        entry.instant()?;

        let mut next = entries.to_vec();
        next.push(entry);
        let sorted = sort_by_date_time(&next)?;
        info!(
            "event=entry_add module=itinerary status=ok entry_id={} len={}",
            id,
            sorted.len()
        );
        Ok((sorted, id))
    }

    /// Replaces the entry that has `entry.id` and returns canonical order.
    ///
    /// # Errors
    /// - `EntryNotFound` when no entry has that id.
    /// - `Schedule(MalformedScheduleTime)` when the result cannot be sorted.
    pub fn update_entry(
        &self,
        entries: &[ScheduleEntry],
        entry: ScheduleEntry,
    ) -> ItineraryResult<Vec<ScheduleEntry>> {
        let position = position_of(entries, entry.id)?;
        let id = entry.id;
        let mut next = entries.to_vec();
        next[position] = entry;
        let sorted = sort_by_date_time(&next)?;
        info!("event=entry_update module=itinerary status=ok entry_id={id}");
        Ok(sorted)
    }

    /// Removes the entry with `id`, keeping the order of the rest.
    ///
    /// # Errors
    /// - `EntryNotFound` when no entry has that id.
    pub fn remove_entry(
        &self,
        entries: &[ScheduleEntry],
        id: EntryId,
    ) -> ItineraryResult<Vec<ScheduleEntry>> {
        let position = position_of(entries, id)?;
        let mut next = entries.to_vec();
        next.remove(position);
        info!(
            "event=entry_remove module=itinerary status=ok entry_id={} len={}",
            id,
            next.len()
        );
        Ok(next)
    }

    /// Builds the saved-plan summary for `entries`.
    ///
    /// Stops follow canonical order and are numbered from 1. Each stop ends
    /// `default_stop_minutes` after it starts, wrapping past midnight.
    ///
    /// # Errors
    /// - `MissingField("title")` when `title` is blank.
    /// - `EmptyItinerary` when `entries` is empty.
    /// - `Schedule(MalformedScheduleTime)` for unparseable entries.
    pub fn summarize_plan(
        &self,
        plan_id: PlanId,
        title: &str,
        entries: &[ScheduleEntry],
    ) -> ItineraryResult<PlanSummary> {
        let title = required(title.to_string(), "title")?;
        let sorted = sort_by_date_time(entries)?;
        let (first, last) = match (sorted.first(), sorted.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(ItineraryError::EmptyItinerary),
        };

        let stay = Duration::minutes(i64::from(self.config.default_stop_minutes));
        let mut schedules = Vec::with_capacity(sorted.len());
        for (index, entry) in sorted.iter().enumerate() {
            let instant = entry.instant()?;
            let (end_time, _) = instant.time.overflowing_add_signed(stay);
            schedules.push(PlannedStop {
                id: index as EntryId + 1,
                title: entry.title.clone(),
                date: entry.date.clone(),
                start_time: entry.time.clone(),
                end_time: end_time.format(TIME_FORMAT).to_string(),
                location: entry.location.clone(),
                prefecture_code: entry
                    .prefecture_code
                    .clone()
                    .unwrap_or_else(|| self.config.default_prefecture_code.clone()),
            });
        }

        let summary = PlanSummary {
            id: plan_id,
            title,
            start_date: canonical_date(first)?,
            end_date: canonical_date(last)?,
            location: location_label(&first.location),
            image: first.image.clone(),
            schedule_count: schedules.len(),
            schedules,
        };
        info!(
            "event=plan_summarize module=itinerary status=ok plan_id={} schedule_count={}",
            summary.id, summary.schedule_count
        );
        Ok(summary)
    }
}

fn required(value: String, field: &'static str) -> ItineraryResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        warn!(
            "event=entry_validate module=itinerary status=error error_code=missing_field field={field}"
        );
        return Err(ItineraryError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

fn position_of(entries: &[ScheduleEntry], id: EntryId) -> ItineraryResult<usize> {
    entries
        .iter()
        .position(|entry| entry.id == id)
        .ok_or(ItineraryError::EntryNotFound(id))
}

fn canonical_date(entry: &ScheduleEntry) -> ItineraryResult<String> {
    let date = parse_date(&entry.date).ok_or_else(|| ScheduleError::MalformedScheduleTime {
        id: entry.id,
        date: entry.date.clone(),
        time: entry.time.clone(),
    })?;
    Ok(date.format(DATE_FORMAT).to_string())
}

fn location_label(location: &str) -> String {
    location
        .split(LOCATION_DETAIL_OPEN)
        .next()
        .unwrap_or_default()
        .to_string()
}
