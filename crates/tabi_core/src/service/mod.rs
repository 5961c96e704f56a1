//! Core use-case services.
//!
//! # Responsibility
//! - Turn planner form actions into engine calls.
//! - Keep callers free of id assignment and default-filling rules.

pub mod itinerary_service;
