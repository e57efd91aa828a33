// src/core/mod.rs

pub mod csv;
pub mod sanitize;
pub mod timestamp;
pub mod xlsx;

pub use csv::Delim;
