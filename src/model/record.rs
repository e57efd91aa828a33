// src/model/record.rs
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::columns::SsaColumn::{self, *};
use super::row::{RawRow, RowError};
use crate::core::timestamp::{format_timestamp, parse_timestamp};

/// Typed view of one SSA. A data holder: it accepts whatever the loader
/// gives it and validates nothing beyond shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SsaRecord {
    /// Unique identifier
    pub numero: String,
    pub situacao: String,
    pub derivada: Option<String>,
    pub localizacao: String,
    pub desc_localizacao: String,
    pub equipamento: String,
    pub semana_cadastro: String,
    pub emitida_em: Option<NaiveDateTime>,
    pub descricao: String,
    pub setor_emissor: String,
    pub setor_executor: String,
    pub solicitante: String,
    pub servico_origem: String,
    pub prioridade_emissao: String,
    pub prioridade_planejamento: Option<String>,
    pub execucao_simples: String,
    pub responsavel_programacao: Option<String>,
    pub semana_programada: Option<String>,
    pub responsavel_execucao: Option<String>,
    pub descricao_execucao: Option<String>,
    pub sistema_origem: String,
    pub anomalia: Option<String>,
}

/// Condensed form handed to external consumers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SsaSummary {
    pub numero: String,
    pub situacao: String,
    pub setor_executor: String,
    pub prioridade: String,
    /// `YYYY-MM-DD HH:MM:SS`, or null when the record has no issue time.
    pub emitida_em: Option<String>,
}

impl SsaRecord {
    pub fn to_summary(&self) -> SsaSummary {
        SsaSummary {
            numero: self.numero.clone(),
            situacao: self.situacao.clone(),
            setor_executor: self.setor_executor.clone(),
            prioridade: self.prioridade_emissao.clone(),
            emitida_em: self.emitida_em.as_ref().map(format_timestamp),
        }
    }

    /// Build from a positional row. Needs all 22 positions and every
    /// required field; a present but unreadable issue time is an error.
    pub fn from_row(row: &RawRow) -> Result<Self, RowError> {
        if !row.is_complete() {
            // Report the first absent position.
            let column = SsaColumn::from_index(row.len()).unwrap_or(Anomalia);
            return Err(RowError::TooShort { len: row.len(), column });
        }

        let emitida_em = match row.try_get(EmitidaEm)? {
            None => None,
            Some(s) if s.trim().is_empty() => None,
            Some(s) => Some(parse_timestamp(s).ok_or_else(|| RowError::BadTimestamp {
                column: EmitidaEm,
                value: s.to_owned(),
            })?),
        };

        Ok(Self {
            numero: row.required(Numero)?,
            situacao: row.required(Situacao)?,
            derivada: row.optional(Derivada)?,
            localizacao: row.required(Localizacao)?,
            desc_localizacao: row.required(DescLocalizacao)?,
            equipamento: row.required(Equipamento)?,
            semana_cadastro: row.required(SemanaCadastro)?,
            emitida_em,
            descricao: row.required(DescSsa)?,
            setor_emissor: row.required(SetorEmissor)?,
            setor_executor: row.required(SetorExecutor)?,
            solicitante: row.required(Solicitante)?,
            servico_origem: row.required(ServicoOrigem)?,
            prioridade_emissao: row.required(PrioridadeEmissao)?,
            prioridade_planejamento: row.optional(PrioridadePlanejamento)?,
            execucao_simples: row.required(ExecucaoSimples)?,
            responsavel_programacao: row.optional(ResponsavelProgramacao)?,
            semana_programada: row.optional(SemanaProgramada)?,
            responsavel_execucao: row.optional(ResponsavelExecucao)?,
            descricao_execucao: row.optional(DescricaoExecucao)?,
            sistema_origem: row.required(SistemaOrigem)?,
            anomalia: row.optional(Anomalia)?,
        })
    }
}
