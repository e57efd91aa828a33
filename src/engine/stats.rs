// src/engine/stats.rs
//
// Startup snapshot shown before any filter is touched. Computing it either
// fully succeeds or yields the all-defaults structure; the dashboard must
// render something either way.

use chrono::NaiveDateTime;
use serde::Serialize;
use thiserror::Error;

use super::aggregate::{count_distinct, value_counts, Counts};
use crate::core::timestamp::parse_timestamp;
use crate::model::{RawRow, SsaColumn::{self, *}};
use crate::store::DataSet;

/// Issuance priority marking a critical SSA (compared after uppercasing).
pub const CRITICAL_PRIORITY: &str = "S3.7";

/// Positions the snapshot reads; every row must reach all of them.
const STATS_COLUMNS: [SsaColumn; 6] = [
    PrioridadeEmissao,
    SetorExecutor,
    Situacao,
    EmitidaEm,
    ResponsavelProgramacao,
    ResponsavelExecucao,
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("row {row}: no position {} ({})", .column.index(), .column.label())]
    MissingColumn { row: usize, column: SsaColumn },

    #[error("row {row}: cannot parse issue time {value:?}")]
    UnparseableTimestamp { row: usize, value: String },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Period {
    pub inicio: Option<NaiveDateTime>,
    pub fim: Option<NaiveDateTime>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ResponsibleCounts {
    pub programacao: usize,
    pub execucao: usize,
}

/// `Default` is the fallback structure: zeros, empty maps, null period.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct BaselineStats {
    pub total: usize,
    #[serde(rename = "criticas")]
    pub critical: usize,
    /// Percent of rows that are critical; 0 for an empty dataset.
    #[serde(rename = "taxa_criticidade")]
    pub critical_rate: f64,
    #[serde(rename = "por_prioridade")]
    pub by_priority: Counts,
    #[serde(rename = "por_setor")]
    pub by_sector: Counts,
    #[serde(rename = "por_estado")]
    pub by_state: Counts,
    #[serde(rename = "periodo")]
    pub period: Period,
    #[serde(rename = "responsaveis")]
    pub responsible: ResponsibleCounts,
}

pub fn is_critical(row: &RawRow) -> bool {
    row.prioridade_emissao()
        .is_some_and(|p| p.to_uppercase() == CRITICAL_PRIORITY)
}

/// Strict snapshot. Fails on the first row that lacks a read position or
/// carries an issue time no known layout accepts.
pub fn compute_baseline(ds: &DataSet) -> Result<BaselineStats, StatsError> {
    let rows = ds.rows();

    for (i, row) in rows.iter().enumerate() {
        for col in STATS_COLUMNS {
            if row.try_get(col).is_err() {
                return Err(StatsError::MissingColumn { row: i, column: col });
            }
        }
    }

    let total = rows.len();
    let critical = rows.iter().filter(|r| is_critical(r)).count();
    // No N=1 floor here: an empty dataset reports 0 directly.
    let critical_rate = if total > 0 {
        critical as f64 / total as f64 * 100.0
    } else {
        0.0
    };

    Ok(BaselineStats {
        total,
        critical,
        critical_rate,
        by_priority: value_counts(rows, PrioridadeEmissao),
        by_sector: value_counts(rows, SetorExecutor),
        by_state: value_counts(rows, Situacao),
        period: issued_period(rows)?,
        responsible: ResponsibleCounts {
            programacao: count_distinct(rows, ResponsavelProgramacao),
            execucao: count_distinct(rows, ResponsavelExecucao),
        },
    })
}

/// Min/max issue time. Blank cells are skipped; all blank → null endpoints.
fn issued_period(rows: &[RawRow]) -> Result<Period, StatsError> {
    let mut period = Period::default();
    for (i, row) in rows.iter().enumerate() {
        let Some(raw) = row.emitida_em().filter(|s| !s.trim().is_empty()) else {
            continue;
        };
        let ts = parse_timestamp(raw).ok_or_else(|| StatsError::UnparseableTimestamp {
            row: i,
            value: raw.to_owned(),
        })?;
        period.inicio = Some(period.inicio.map_or(ts, |cur| cur.min(ts)));
        period.fim = Some(period.fim.map_or(ts, |cur| cur.max(ts)));
    }
    Ok(period)
}

/// Snapshot for display: any failure is logged and replaced by defaults.
pub fn baseline_or_default(ds: &DataSet) -> BaselineStats {
    match compute_baseline(ds) {
        Ok(stats) => stats,
        Err(e) => {
            loge!("Stats: initial statistics failed, using empty defaults: {e}");
            BaselineStats::default()
        }
    }
}
