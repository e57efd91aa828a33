// tests/record.rs
use chrono::NaiveDate;
use ssa_dashboard::fixtures::quickstart_rows;
use ssa_dashboard::model::{RawRow, RowError, SsaColumn, SsaRecord};

fn first_row() -> RawRow {
    quickstart_rows().remove(0)
}

fn with_cell(col: SsaColumn, value: Option<&str>) -> RawRow {
    let mut cells = first_row().cells().to_vec();
    cells[col.index()] = value.map(String::from);
    RawRow::new(cells)
}

#[test]
fn quickstart_row_builds_a_record() {
    let rec = SsaRecord::from_row(&first_row()).unwrap();
    assert_eq!(rec.numero, "SSA-0001");
    assert_eq!(rec.situacao, "Aberta");
    assert_eq!(rec.prioridade_emissao, "S3.7");
    assert_eq!(rec.responsavel_programacao.as_deref(), Some("Alice"));
    assert_eq!(rec.semana_programada.as_deref(), Some("2024-W46"));
    assert_eq!(
        rec.emitida_em,
        NaiveDate::from_ymd_opt(2024, 11, 1).and_then(|d| d.and_hms_opt(12, 0, 0))
    );
}

#[test]
fn summary_has_five_fields_and_formatted_time() {
    let rec = SsaRecord::from_row(&first_row()).unwrap();
    let sum = rec.to_summary();
    assert_eq!(sum.numero, "SSA-0001");
    assert_eq!(sum.setor_executor, "MANUT");
    assert_eq!(sum.prioridade, "S3.7");
    assert_eq!(sum.emitida_em.as_deref(), Some("2024-11-01 12:00:00"));

    let json = serde_json::to_value(&sum).unwrap();
    let obj = json.as_object().unwrap();
    assert_eq!(obj.len(), 5);
    assert_eq!(obj["situacao"], "Aberta");
}

#[test]
fn missing_issue_time_gives_null_in_summary() {
    let rec = SsaRecord::from_row(&with_cell(SsaColumn::EmitidaEm, None)).unwrap();
    assert_eq!(rec.emitida_em, None);
    assert_eq!(rec.to_summary().emitida_em, None);
}

#[test]
fn optional_fields_may_be_missing() {
    let rec = SsaRecord::from_row(&with_cell(SsaColumn::ResponsavelExecucao, None)).unwrap();
    assert_eq!(rec.responsavel_execucao, None);
    // an empty string is a value, not an absence
    assert_eq!(rec.anomalia.as_deref(), Some(""));
}

#[test]
fn short_row_reports_first_absent_position() {
    let row = RawRow::from_strs(["SSA-9", "Aberta", ""]);
    assert_eq!(
        SsaRecord::from_row(&row),
        Err(RowError::TooShort { len: 3, column: SsaColumn::Localizacao })
    );
}

#[test]
fn missing_required_field_is_an_error() {
    let row = with_cell(SsaColumn::SetorExecutor, None);
    assert_eq!(
        SsaRecord::from_row(&row),
        Err(RowError::MissingField(SsaColumn::SetorExecutor))
    );
}

#[test]
fn garbage_issue_time_is_an_error() {
    let row = with_cell(SsaColumn::EmitidaEm, Some("ontem"));
    assert!(matches!(
        SsaRecord::from_row(&row),
        Err(RowError::BadTimestamp { column: SsaColumn::EmitidaEm, .. })
    ));
}
