//! Itinerary domain model.
//!
//! # Responsibility
//! - Define the plain data shapes exchanged with the planner UI.
//! - Provide the explicit date + time-of-day value used for ordering.
//!
//! # Invariants
//! - Every schedule entry is identified by a caller-assigned `EntryId`.
//! - Ordering never goes through string concatenation; it compares
//!   `ScheduleInstant` values field by field.

pub mod entry;
pub mod plan;
