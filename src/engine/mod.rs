// src/engine/mod.rs
//! # Aggregation engine
//!
//! Everything the dashboard shows is derived here from a read-only
//! [`DataSet`](crate::store::DataSet). Nothing is cached or updated
//! incrementally: each call recomputes from the rows it is given, so a
//! result always matches the filter selection that produced it.
//!
//! - [`aggregate`]: grouped counts, proportions, distinct option lists.
//! - [`kpi`]: efficiency rates and the health score.
//! - [`stats`]: the startup snapshot, with its fall-back-to-defaults policy.
//! - [`table`]: six-column row projection for the SSA list.
//! - [`view`]: filter selection → every chart/table output in one pass.

pub mod aggregate;
pub mod kpi;
pub mod stats;
pub mod table;
pub mod view;

pub use aggregate::{Counts, Proportions, Responsaveis};
pub use kpi::{EfficiencyMetrics, KpiCalculator};
pub use stats::{BaselineStats, StatsError};
pub use table::TableRow;
pub use view::{DashboardView, FilterSelection};
