// src/model/columns.rs
use std::borrow::Cow;

/// Number of meaningful positions in an SSA row.
pub const COLUMN_COUNT: usize = 22;

/// Fixed position → field mapping of the SAM "SSAs" report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SsaColumn {
    Numero = 0,
    Situacao = 1,
    Derivada = 2,
    Localizacao = 3,
    DescLocalizacao = 4,
    Equipamento = 5,
    SemanaCadastro = 6,
    EmitidaEm = 7,
    DescSsa = 8,
    SetorEmissor = 9,
    SetorExecutor = 10,
    Solicitante = 11,
    ServicoOrigem = 12,
    PrioridadeEmissao = 13,
    PrioridadePlanejamento = 14,
    ExecucaoSimples = 15,
    ResponsavelProgramacao = 16,
    SemanaProgramada = 17,
    ResponsavelExecucao = 18,
    DescricaoExecucao = 19,
    SistemaOrigem = 20,
    Anomalia = 21,
}

use SsaColumn::*;

impl SsaColumn {
    pub const ALL: [SsaColumn; COLUMN_COUNT] = [
        Numero, Situacao, Derivada, Localizacao, DescLocalizacao, Equipamento,
        SemanaCadastro, EmitidaEm, DescSsa, SetorEmissor, SetorExecutor,
        Solicitante, ServicoOrigem, PrioridadeEmissao, PrioridadePlanejamento,
        ExecucaoSimples, ResponsavelProgramacao, SemanaProgramada,
        ResponsavelExecucao, DescricaoExecucao, SistemaOrigem, Anomalia,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<SsaColumn> {
        Self::ALL.get(index).copied()
    }

    /// Display label as printed by the report.
    pub const fn label(self) -> &'static str {
        match self {
            Numero                 => "Número da SSA",
            Situacao               => "Situação",
            Derivada               => "Derivada de",
            Localizacao            => "Localização",
            DescLocalizacao        => "Descrição da Localização",
            Equipamento            => "Equipamento",
            SemanaCadastro         => "Semana de Cadastro",
            EmitidaEm              => "Emitida Em",
            DescSsa                => "Descrição da SSA",
            SetorEmissor           => "Setor Emissor",
            SetorExecutor          => "Setor Executor",
            Solicitante            => "Solicitante",
            ServicoOrigem          => "Serviço de Origem",
            PrioridadeEmissao      => "Grau de Prioridade Emissão",
            PrioridadePlanejamento => "Grau de Prioridade Planejamento",
            ExecucaoSimples        => "Execução Simples",
            ResponsavelProgramacao => "Responsável na Programação",
            SemanaProgramada       => "Semana Programada",
            ResponsavelExecucao    => "Responsável na Execução",
            DescricaoExecucao      => "Descrição Execução",
            SistemaOrigem          => "Sistema de Origem",
            Anomalia               => "Anomalia",
        }
    }

    /// Symbolic identifier (stable, ASCII, snake_case).
    pub const fn key(self) -> &'static str {
        match self {
            Numero                 => "numero",
            Situacao               => "situacao",
            Derivada               => "derivada",
            Localizacao            => "localizacao",
            DescLocalizacao        => "desc_localizacao",
            Equipamento            => "equipamento",
            SemanaCadastro         => "semana_cadastro",
            EmitidaEm              => "emitida_em",
            DescSsa                => "descricao",
            SetorEmissor           => "setor_emissor",
            SetorExecutor          => "setor_executor",
            Solicitante            => "solicitante",
            ServicoOrigem          => "servico_origem",
            PrioridadeEmissao      => "prioridade_emissao",
            PrioridadePlanejamento => "prioridade_planejamento",
            ExecucaoSimples        => "execucao_simples",
            ResponsavelProgramacao => "responsavel_programacao",
            SemanaProgramada       => "semana_programada",
            ResponsavelExecucao    => "responsavel_execucao",
            DescricaoExecucao      => "descricao_execucao",
            SistemaOrigem          => "sistema_origem",
            Anomalia               => "anomalia",
        }
    }
}

/// Label for any position. Unknown positions (negative included) get
/// "Coluna {n}"; this never fails.
pub fn get_name(position: i64) -> Cow<'static, str> {
    usize::try_from(position)
        .ok()
        .and_then(SsaColumn::from_index)
        .map(|c| Cow::Borrowed(c.label()))
        .unwrap_or_else(|| Cow::Owned(format!("Coluna {position}")))
}

/// Labels for a whole row width; positions past 21 use the fallback.
pub fn labels(width: usize) -> Vec<String> {
    (0..width).map(|i| get_name(i as i64).into_owned()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_position_order() {
        for (i, c) in SsaColumn::ALL.iter().enumerate() {
            assert_eq!(c.index(), i);
        }
    }

    #[test]
    fn keys_are_unique() {
        let mut keys: Vec<_> = SsaColumn::ALL.iter().map(|c| c.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), COLUMN_COUNT);
    }
}
