// src/engine/kpi.rs
use serde::Serialize;

use super::aggregate::{value_counts, Proportions};
use crate::model::SsaColumn;
use crate::store::DataSet;

/// Literal flag value marking a simple execution.
pub const SIMPLE_EXECUTION_YES: &str = "Sim";

/// Health score blend; fixed, not configurable.
const SCHEDULING_WEIGHT: f64 = 0.5;
const SIMPLE_EXECUTION_WEIGHT: f64 = 0.5;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct EfficiencyMetrics {
    /// Rows with a scheduled week / N
    #[serde(rename = "taxa_programacao")]
    pub scheduling_rate: f64,
    /// Rows flagged "Sim" / N
    #[serde(rename = "taxa_execucao_simples")]
    pub simple_execution_rate: f64,
    #[serde(rename = "distribuicao_prioridade")]
    pub priority_distribution: Proportions,
}

pub struct KpiCalculator<'a> {
    ds: &'a DataSet,
}

impl<'a> KpiCalculator<'a> {
    pub fn new(ds: &'a DataSet) -> Self {
        Self { ds }
    }

    /// Rates over N, with N floored to 1 for an empty dataset (the
    /// numerators are then 0, so every rate is 0).
    pub fn calculate_efficiency_metrics(&self) -> EfficiencyMetrics {
        let rows = self.ds.rows();
        let n = rows.len().max(1) as f64;

        let scheduled = rows.iter().filter(|r| r.semana_programada().is_some()).count();
        let simple = rows
            .iter()
            .filter(|r| r.execucao_simples() == Some(SIMPLE_EXECUTION_YES))
            .count();

        EfficiencyMetrics {
            scheduling_rate: scheduled as f64 / n,
            simple_execution_rate: simple as f64 / n,
            priority_distribution: value_counts(rows, SsaColumn::PrioridadeEmissao).normalized(),
        }
    }

    /// `(scheduling * 0.5 + simple * 0.5) * 100`, rounded to 2 places with
    /// ties to even. Always in 0..=100.
    pub fn overall_health_score(&self) -> f64 {
        let m = self.calculate_efficiency_metrics();
        let score = m.scheduling_rate * SCHEDULING_WEIGHT
            + m.simple_execution_rate * SIMPLE_EXECUTION_WEIGHT;
        round2(score * 100.0)
    }
}

/// Two decimal places, ties to even (3.125 → 3.12, 9.375 → 9.38).
pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round_ties_even() / 100.0
}
