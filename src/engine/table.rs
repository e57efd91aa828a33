// src/engine/table.rs
use serde::Serialize;

use crate::model::{RawRow, RowError, SsaColumn::*};
use crate::store::DataSet;

pub const TABLE_HEADERS: [&str; 6] = [
    "Número", "Estado", "Resp. Prog.", "Resp. Exec.", "Semana Prog.", "Prioridade",
];

/// One line of the SSA list. Missing values render as "".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub numero: String,
    pub estado: String,
    pub resp_prog: String,
    pub resp_exec: String,
    pub semana_prog: String,
    pub prioridade: String,
}

impl TableRow {
    /// Fails only if the row is too short to hold one of the six positions.
    pub fn project(row: &RawRow) -> Result<TableRow, RowError> {
        Ok(TableRow {
            numero: row.text(Numero)?,
            estado: row.text(Situacao)?,
            resp_prog: row.text(ResponsavelProgramacao)?,
            resp_exec: row.text(ResponsavelExecucao)?,
            semana_prog: row.text(SemanaProgramada)?,
            prioridade: row.text(PrioridadeEmissao)?,
        })
    }

    pub fn to_cells(&self) -> Vec<String> {
        vec![
            self.numero.clone(),
            self.estado.clone(),
            self.resp_prog.clone(),
            self.resp_exec.clone(),
            self.semana_prog.clone(),
            self.prioridade.clone(),
        ]
    }
}

/// Project every row; rows that cannot be projected are skipped, the rest
/// still come through.
pub fn prepare_table_data(ds: &DataSet) -> Vec<TableRow> {
    let mut out = Vec::with_capacity(ds.len());
    for (i, row) in ds.rows().iter().enumerate() {
        match TableRow::project(row) {
            Ok(r) => out.push(r),
            Err(e) => logd!("Table: skipping row {i}: {e}"),
        }
    }
    out
}
