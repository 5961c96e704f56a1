//! Schedule reorder/rebucket engine.
//!
//! # Responsibility
//! - Sort entries into canonical order (date, then time-of-day).
//! - Apply drag-and-drop moves and rewrite times so that visual position and
//!   displayed time agree inside each day.
//! - Bucket entries into numbered days for display.
//!
//! # Invariants
//! - Every operation is pure: input slices are never mutated.
//! - Output is always a permutation of the input; `id` and `date` never change.
//! - Only `time` may be rewritten, and only with values already used that day.

pub mod error;
pub mod group;
pub mod reorder;
pub mod sort;
