// src/fixtures.rs
//
// Two-record quickstart dataset. Lets the dashboard boot with no report on
// disk, and gives tests/benches a known baseline.

use crate::model::RawRow;
use crate::store::DataSet;

pub fn quickstart_rows() -> Vec<RawRow> {
    vec![
        RawRow::new(cells![
            "SSA-0001", "Aberta", "", "LOC-01", "Área A", "EQ-100", "2024-W45",
            "2024-11-01 12:00:00", "Troca de componente", "ENG", "MANUT", "João",
            "Sistema", "S3.7", "S2", "Sim", "Alice", "2024-W46", "Bob",
            "Execução prevista", "SAM", "",
        ]),
        RawRow::new(cells![
            "SSA-0002", "Em Execução", "SSA-0001", "LOC-02", "Área B", "EQ-200", "2024-W46",
            "2024-11-05 09:30:00", "Inspeção", "ENG", "ELETR", "Maria",
            "Sistema", "S2", "S2", "Não", "Carlos", "2024-W47", "Daniel",
            "Aguardando material", "SAM", "",
        ]),
    ]
}

pub fn quickstart_dataset() -> DataSet {
    DataSet::with_headers(crate::model::columns::labels(crate::model::COLUMN_COUNT), quickstart_rows())
}
