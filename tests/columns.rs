// tests/columns.rs
use ssa_dashboard::model::{columns::labels, get_name, SsaColumn, COLUMN_COUNT};

#[test]
fn every_known_position_has_its_label() {
    for p in 0..COLUMN_COUNT {
        let col = SsaColumn::from_index(p).unwrap();
        assert_eq!(get_name(p as i64), col.label());
    }
    assert_eq!(get_name(0), "Número da SSA");
    assert_eq!(get_name(7), "Emitida Em");
    assert_eq!(get_name(16), "Responsável na Programação");
    assert_eq!(get_name(21), "Anomalia");
}

#[test]
fn unknown_positions_fall_back_with_the_number() {
    for p in [22_i64, 23, 100, -1, -42, i64::MAX, i64::MIN] {
        let name = get_name(p);
        assert!(!name.is_empty());
        assert!(name.contains(&p.to_string()), "{name} should mention {p}");
    }
    assert_eq!(get_name(22), "Coluna 22");
}

#[test]
fn labels_cover_wide_rows() {
    let l = labels(24);
    assert_eq!(l.len(), 24);
    assert_eq!(l[13], "Grau de Prioridade Emissão");
    assert_eq!(l[23], "Coluna 23");
    assert!(labels(0).is_empty());
}
