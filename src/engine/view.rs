// src/engine/view.rs
//
// Filter & view coordination. `update_view` is a pure function of
// (full dataset, selection): it filters a copy and recomputes every chart
// and the table from scratch.

use serde::Serialize;

use super::aggregate::{programmed_by_week, state_counts, value_counts, Counts};
use super::table::{prepare_table_data, TableRow};
use crate::model::SsaColumn;
use crate::store::DataSet;

/// Dropdown values. Empty strings count as "not set".
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FilterSelection {
    programacao: Option<String>,
    execucao: Option<String>,
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.is_empty())
}

impl FilterSelection {
    pub fn new(programacao: Option<String>, execucao: Option<String>) -> Self {
        Self { programacao: non_empty(programacao), execucao: non_empty(execucao) }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn scheduling_owner(&self) -> Option<&str> { self.programacao.as_deref() }
    pub fn execution_owner(&self) -> Option<&str> { self.execucao.as_deref() }

    pub fn set_scheduling_owner(&mut self, v: Option<String>) { self.programacao = non_empty(v); }
    pub fn set_execution_owner(&mut self, v: Option<String>) { self.execucao = non_empty(v); }

    /// At least one filter set; drives the detail section.
    pub fn is_active(&self) -> bool {
        self.programacao.is_some() || self.execucao.is_some()
    }
}

/// Everything one interaction produces, in the order the page consumes it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub resp_prog_counts: Counts,
    pub resp_exec_counts: Counts,
    pub week_counts: Counts,
    pub detail_visible: bool,
    pub detail_state_counts: Counts,
    pub detail_week_counts: Counts,
    pub table_rows: Vec<TableRow>,
}

/// Two-stage exact-equality filter over a copy of `ds`.
pub fn filter_dataset(ds: &DataSet, sel: &FilterSelection) -> DataSet {
    let mut out = ds.clone();
    if let Some(prog) = sel.scheduling_owner() {
        out = out.filtered(|r| r.responsavel_programacao() == Some(prog));
    }
    if let Some(exec) = sel.execution_owner() {
        out = out.filtered(|r| r.responsavel_execucao() == Some(exec));
    }
    out
}

/// Same two-stage filter applied to projected table rows.
pub fn filter_table_rows(mut rows: Vec<TableRow>, sel: &FilterSelection) -> Vec<TableRow> {
    if let Some(prog) = sel.scheduling_owner() {
        rows.retain(|r| r.resp_prog == prog);
    }
    if let Some(exec) = sel.execution_owner() {
        rows.retain(|r| r.resp_exec == exec);
    }
    rows
}

pub fn update_view(ds: &DataSet, sel: &FilterSelection) -> DashboardView {
    let filtered = filter_dataset(ds, sel);
    let rows = filtered.rows();

    // The table re-projects the *full* dataset and filters its own rows,
    // independently of the chart filter above.
    let table_rows = filter_table_rows(prepare_table_data(ds), sel);

    let view = DashboardView {
        resp_prog_counts: value_counts(rows, SsaColumn::ResponsavelProgramacao),
        resp_exec_counts: value_counts(rows, SsaColumn::ResponsavelExecucao),
        week_counts: programmed_by_week(&filtered),
        detail_visible: sel.is_active(),
        detail_state_counts: state_counts(&filtered),
        detail_week_counts: programmed_by_week(&filtered),
        table_rows,
    };

    logd!(
        "View: prog={:?} exec={:?} → {} of {} rows, table={}",
        sel.scheduling_owner(),
        sel.execution_owner(),
        filtered.len(),
        ds.len(),
        view.table_rows.len()
    );
    view
}
