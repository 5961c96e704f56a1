//! Saved plan read model.
//!
//! Mirrors the JSON shape the planner keeps for saved itineraries. Building
//! one is the job of `ItineraryService::summarize_plan`.

use crate::model::entry::EntryId;
use serde::{Deserialize, Serialize};

/// Identifier of a saved plan. The caller picks it (creation timestamp or
/// the id of the plan being edited).
pub type PlanId = u64;

/// Summary of one saved itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    pub id: PlanId,
    pub title: String,
    /// Earliest entry date, `YYYY-MM-DD`.
    pub start_date: String,
    /// Latest entry date, `YYYY-MM-DD`.
    pub end_date: String,
    /// First stop's location without its parenthesized suffix.
    pub location: String,
    pub image: String,
    pub schedule_count: usize,
    pub schedules: Vec<PlannedStop>,
}

/// One stop inside a saved plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedStop {
    /// 1-based position in canonical order, not the source entry id.
    pub id: EntryId,
    pub title: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub prefecture_code: String,
}
