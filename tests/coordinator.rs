// tests/coordinator.rs
//
// Filter → view recomputation over the quickstart data plus a few extra rows.

use ssa_dashboard::engine::{
    table::prepare_table_data,
    view::{filter_dataset, update_view},
    FilterSelection,
};
use ssa_dashboard::fixtures::{quickstart_dataset, quickstart_rows};
use ssa_dashboard::model::{RawRow, SsaColumn};
use ssa_dashboard::store::DataSet;

fn sel(prog: Option<&str>, exec: Option<&str>) -> FilterSelection {
    FilterSelection::new(prog.map(String::from), exec.map(String::from))
}

/// Quickstart + a second Alice row scheduled for W45 + a short row.
fn wider_dataset() -> DataSet {
    let mut rows = quickstart_rows();
    let mut extra = rows[0].cells().to_vec();
    extra[SsaColumn::Numero.index()] = Some("SSA-0003".into());
    extra[SsaColumn::Situacao.index()] = Some("Fechada".into());
    extra[SsaColumn::SemanaProgramada.index()] = Some("2024-W45".into());
    extra[SsaColumn::ResponsavelExecucao.index()] = Some("Daniel".into());
    rows.push(RawRow::new(extra));
    rows.push(RawRow::from_strs(["SSA-0004", "Aberta"]));
    DataSet::new(rows)
}

#[test]
fn no_filter_shows_everything_without_detail() {
    let ds = wider_dataset();
    let v = update_view(&ds, &FilterSelection::none());

    assert!(!v.detail_visible);
    assert_eq!(v.resp_prog_counts.total(), 4);
    assert_eq!(v.resp_prog_counts.get("Alice"), Some(2));
    assert_eq!(v.resp_prog_counts.get(""), Some(1));
    assert_eq!(
        v.week_counts.keys().collect::<Vec<_>>(),
        vec!["", "2024-W45", "2024-W46", "2024-W47"]
    );
    // the short row cannot be projected
    assert_eq!(v.table_rows.len(), 3);
}

#[test]
fn scheduling_owner_filter() {
    let ds = wider_dataset();
    let v = update_view(&ds, &sel(Some("Alice"), None));

    assert!(v.detail_visible);
    assert_eq!(v.resp_prog_counts.entries(), &[("Alice".to_string(), 2)]);
    assert_eq!(
        v.resp_exec_counts.entries(),
        &[("Bob".to_string(), 1), ("Daniel".to_string(), 1)]
    );
    assert_eq!(v.week_counts.keys().collect::<Vec<_>>(), vec!["2024-W45", "2024-W46"]);
    assert_eq!(v.detail_week_counts, v.week_counts);
    assert_eq!(v.detail_state_counts.get("Aberta"), Some(1));
    assert_eq!(v.detail_state_counts.get("Fechada"), Some(1));

    let ids: Vec<_> = v.table_rows.iter().map(|r| r.numero.as_str()).collect();
    assert_eq!(ids, vec!["SSA-0001", "SSA-0003"]);
}

#[test]
fn both_filters_narrow_further() {
    let ds = wider_dataset();
    let one = filter_dataset(&ds, &sel(Some("Alice"), None));
    let both = filter_dataset(&ds, &sel(Some("Alice"), Some("Daniel")));

    assert!(one.len() <= ds.len());
    assert!(both.len() <= one.len());
    assert_eq!(both.len(), 1);

    let v = update_view(&ds, &sel(Some("Alice"), Some("Daniel")));
    assert_eq!(v.table_rows.len(), 1);
    assert_eq!(v.table_rows[0].numero, "SSA-0003");
    assert_eq!(v.table_rows[0].estado, "Fechada");
}

#[test]
fn execution_owner_alone() {
    let ds = quickstart_dataset();
    let v = update_view(&ds, &sel(None, Some("Daniel")));
    assert!(v.detail_visible);
    assert_eq!(v.resp_prog_counts.entries(), &[("Carlos".to_string(), 1)]);
    assert_eq!(v.table_rows.len(), 1);
    assert_eq!(v.table_rows[0].prioridade, "S2");
}

#[test]
fn same_selection_same_view() {
    let ds = wider_dataset();
    for s in [
        FilterSelection::none(),
        sel(Some("Alice"), None),
        sel(Some("Carlos"), Some("Daniel")),
    ] {
        assert_eq!(update_view(&ds, &s), update_view(&ds, &s));
    }
}

#[test]
fn unmatched_filter_empties_everything_but_shows_detail() {
    let ds = quickstart_dataset();
    let v = update_view(&ds, &sel(Some("Zé Ninguém"), None));

    assert!(filter_dataset(&ds, &sel(Some("Zé Ninguém"), None)).is_empty());
    assert!(v.detail_visible);
    assert!(v.resp_prog_counts.is_empty());
    assert!(v.resp_exec_counts.is_empty());
    assert!(v.week_counts.is_empty());
    assert!(v.detail_state_counts.is_empty());
    assert!(v.detail_week_counts.is_empty());
    assert!(v.table_rows.is_empty());
}

#[test]
fn detail_visibility_follows_selection() {
    assert!(!sel(None, None).is_active());
    assert!(sel(Some("Alice"), None).is_active());
    assert!(sel(None, Some("Bob")).is_active());
    assert!(sel(Some("Alice"), Some("Bob")).is_active());
    // empty strings mean "no filter"
    assert!(!sel(Some(""), Some("")).is_active());

    let ds = quickstart_dataset();
    assert!(!update_view(&ds, &sel(Some(""), None)).detail_visible);
}

#[test]
fn filtering_leaves_source_untouched() {
    let ds = wider_dataset();
    let before = ds.clone();
    let _ = update_view(&ds, &sel(Some("Alice"), Some("Bob")));
    assert_eq!(ds, before);
}

#[test]
fn table_renders_missing_as_empty() {
    let mut cells = quickstart_rows().remove(1).cells().to_vec();
    cells[SsaColumn::SemanaProgramada.index()] = None;
    let ds = DataSet::new(vec![RawRow::new(cells)]);

    let rows = prepare_table_data(&ds);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].semana_prog, "");
    assert_eq!(rows[0].resp_prog, "Carlos");
}

#[test]
fn view_serializes_in_output_order() {
    let v = update_view(&quickstart_dataset(), &sel(Some("Alice"), None));
    let json = serde_json::to_value(&v).unwrap();
    assert_eq!(json["detail_visible"], true);
    assert_eq!(json["resp_prog_counts"]["Alice"], 1);
    assert_eq!(json["table_rows"][0]["numero"], "SSA-0001");
}
