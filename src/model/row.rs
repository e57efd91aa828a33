// src/model/row.rs
//
// One loaded report line. Cells are kept positionally; the accessors below
// are the only place that turns a position into a meaning.

use thiserror::Error;

use super::columns::{SsaColumn, COLUMN_COUNT};

/// A positional value: missing (`None`), empty (`Some("")`) or present.
pub type Cell = Option<String>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("row has {len} cells, no position {} ({})", .column.index(), .column.label())]
    TooShort { len: usize, column: SsaColumn },

    #[error("required field {} is missing", .0.label())]
    MissingField(SsaColumn),

    #[error("{}: unparseable timestamp {value:?}", .column.label())]
    BadTimestamp { column: SsaColumn, value: String },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawRow {
    cells: Vec<Cell>,
}

impl RawRow {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Every value present (empty strings stay empty, never missing).
    pub fn from_strs<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { cells: values.into_iter().map(|v| Some(v.into())).collect() }
    }

    #[inline] pub fn len(&self) -> usize { self.cells.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.cells.is_empty() }

    /// Holds every one of the 22 positions (trailing extras allowed).
    #[inline] pub fn is_complete(&self) -> bool { self.cells.len() >= COLUMN_COUNT }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Lenient read: missing value and missing position both give `None`.
    #[inline]
    pub fn get(&self, col: SsaColumn) -> Option<&str> {
        self.cells.get(col.index()).and_then(|c| c.as_deref())
    }

    /// Strict read: a row too short for `col` is an error, a missing value is not.
    pub fn try_get(&self, col: SsaColumn) -> Result<Option<&str>, RowError> {
        self.cells
            .get(col.index())
            .map(|c| c.as_deref())
            .ok_or(RowError::TooShort { len: self.cells.len(), column: col })
    }

    /// Strict read that also insists on a value; missing becomes `""`.
    pub fn text(&self, col: SsaColumn) -> Result<String, RowError> {
        Ok(self.try_get(col)?.map(str::to_owned).unwrap_or_default())
    }

    /// Strict read of a required field.
    pub fn required(&self, col: SsaColumn) -> Result<String, RowError> {
        self.try_get(col)?
            .map(str::to_owned)
            .ok_or(RowError::MissingField(col))
    }

    /// Strict read of an optional field.
    pub fn optional(&self, col: SsaColumn) -> Result<Option<String>, RowError> {
        Ok(self.try_get(col)?.map(str::to_owned))
    }

    /* ---------- named accessors ---------- */

    pub fn numero(&self) -> Option<&str> { self.get(SsaColumn::Numero) }
    pub fn situacao(&self) -> Option<&str> { self.get(SsaColumn::Situacao) }
    pub fn emitida_em(&self) -> Option<&str> { self.get(SsaColumn::EmitidaEm) }
    pub fn setor_executor(&self) -> Option<&str> { self.get(SsaColumn::SetorExecutor) }
    pub fn prioridade_emissao(&self) -> Option<&str> { self.get(SsaColumn::PrioridadeEmissao) }
    pub fn execucao_simples(&self) -> Option<&str> { self.get(SsaColumn::ExecucaoSimples) }
    pub fn responsavel_programacao(&self) -> Option<&str> { self.get(SsaColumn::ResponsavelProgramacao) }
    pub fn semana_programada(&self) -> Option<&str> { self.get(SsaColumn::SemanaProgramada) }
    pub fn responsavel_execucao(&self) -> Option<&str> { self.get(SsaColumn::ResponsavelExecucao) }
}

impl From<Vec<Cell>> for RawRow {
    fn from(cells: Vec<Cell>) -> Self {
        Self::new(cells)
    }
}
