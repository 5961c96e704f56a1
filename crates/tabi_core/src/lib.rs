//! Core itinerary logic for the Tabi travel planner.
//! Schedule ordering, drag-and-drop reordering and plan summaries live here;
//! UI, auth and persistence layers only hand data in and take data out.

pub mod config;
pub mod logging;
pub mod model;
pub mod schedule;
pub mod service;

pub use config::{ConfigError, PlannerConfig};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel};
pub use model::entry::{EntryId, ScheduleEntry, ScheduleInstant};
pub use model::plan::{PlanId, PlanSummary, PlannedStop};
pub use schedule::error::{ScheduleError, ScheduleResult};
pub use schedule::group::{group_by_day, DayGroup};
pub use schedule::reorder::{move_entry, move_within_day, reassign_times};
pub use schedule::sort::{is_canonical, sort_by_date_time};
pub use service::itinerary_service::{
    next_entry_id, EntryDraft, ItineraryError, ItineraryResult, ItineraryService,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
