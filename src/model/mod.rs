// src/model/mod.rs
//! Positional SSA data model.
//!
//! The SAM report carries no trustworthy header names, so meaning is
//! attached by *position*:
//! - [`columns`] maps each of the 22 positions to a field and a display label.
//! - [`row`] wraps one loaded line as a [`RawRow`] with named accessors.
//! - [`record`] is the richer, typed [`SsaRecord`] used outside the dashboard.

pub mod columns;
pub mod record;
pub mod row;

pub use columns::{get_name, SsaColumn, COLUMN_COUNT};
pub use record::{SsaRecord, SsaSummary};
pub use row::{Cell, RawRow, RowError};
