// src/core/xlsx.rs
//
// Workbook input. Only the first worksheet is read; its cells come out
// already cleaned, one `Vec` per non-blank row, aligned to column A and as
// wide as the sheet's used range.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use super::sanitize::clean_cell;
use super::timestamp::format_timestamp;

const WORKBOOK_EXTS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

pub fn is_workbook(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| WORKBOOK_EXTS.contains(&e.to_ascii_lowercase().as_str()))
}

/// First sheet as cleaned rows. A workbook with no sheets yields no rows.
pub fn read_first_sheet(path: &Path) -> Result<Vec<Vec<Option<String>>>, calamine::Error> {
    let mut wb = open_workbook_auto(path)?;
    let Some(range) = wb.worksheet_range_at(0) else {
        return Ok(Vec::new());
    };
    let range = range?;

    // The used range may start right of column A; pad so positions hold.
    let lead = range.start().map(|(_, col)| col as usize).unwrap_or(0);

    let rows = range
        .rows()
        .map(|cells| {
            let mut row: Vec<Option<String>> = vec![None; lead];
            row.extend(cells.iter().map(cell_text));
            row
        })
        // full range width is kept, so blank trailing cells still count
        .filter(|row| row.iter().any(Option::is_some))
        .collect();
    Ok(rows)
}

/// Cell → the same text a CSV export of it would carry.
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => clean_cell(s),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => Some(float_text(*f)),
        Data::Bool(b) => Some(b.to_string()),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(ts) => Some(format_timestamp(&ts)),
            None => Some(float_text(dt.as_f64())),
        },
        Data::Error(_) | Data::Empty => None,
    }
}

/// Whole numbers lose the ".0" Excel stores them with.
fn float_text(f: f64) -> String {
    if f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        f.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workbook_extensions() {
        assert!(is_workbook(Path::new("downloads/Report.xlsx")));
        assert!(is_workbook(Path::new("Report.XLS")));
        assert!(!is_workbook(Path::new("Report.csv")));
        assert!(!is_workbook(Path::new("Report")));
    }

    #[test]
    fn cells_read_like_text() {
        assert_eq!(cell_text(&Data::String(s!("  SSA-1 "))), Some(s!("SSA-1")));
        assert_eq!(cell_text(&Data::String(s!("   "))), None);
        assert_eq!(cell_text(&Data::Float(2024.0)), Some(s!("2024")));
        assert_eq!(cell_text(&Data::Float(0.5)), Some(s!("0.5")));
        assert_eq!(cell_text(&Data::Int(7)), Some(s!("7")));
        assert_eq!(cell_text(&Data::Empty), None);
    }
}
