// src/core/csv.rs
use std::io::{self, Write};
use std::mem::take;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Delim {
    Csv,
    Tsv,
}

impl Delim {
    pub fn sep(self) -> char {
        match self { Delim::Csv => ',', Delim::Tsv => '\t' }
    }

    pub fn ext(self) -> &'static str {
        match self { Delim::Csv => "csv", Delim::Tsv => "tsv" }
    }

    /// Guess from a file extension (`.csv`, `.tsv`, `.tab`).
    pub fn from_path(path: &Path) -> Option<Delim> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(Delim::Csv),
            "tsv" | "tab" => Some(Delim::Tsv),
            _ => None,
        }
    }

    pub fn parse(name: &str) -> Option<Delim> {
        match name.to_ascii_lowercase().as_str() {
            "csv" => Some(Delim::Csv),
            "tsv" => Some(Delim::Tsv),
            _ => None,
        }
    }
}

/* ---------------- Parsing ---------------- */

/// Minimal CSV/TSV parser (quotes + CRLF tolerant, leading BOM dropped).
/// Blank lines are skipped; quoted newlines stay inside the field.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // "" escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                push_unless_blank(&mut rows, take(&mut row));
            }
            _ => field.push(ch),
        }
    }

    // Trailing line without newline (or unterminated quote)
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        push_unless_blank(&mut rows, row);
    }

    rows
}

fn push_unless_blank(rows: &mut Vec<Vec<String>>, row: Vec<String>) {
    let blank = row.len() == 1 && row[0].is_empty();
    if !row.is_empty() && !blank {
        rows.push(row);
    }
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 { write!(w, "{sep}")?; }
        let cell = cell.as_ref();
        if needs_quotes(cell, sep) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{cell}")?;
        }
    }
    writeln!(w)
}

/// Header line (if any) + rows into one string.
pub fn rows_to_string(headers: Option<&[&str]>, rows: &[Vec<String>], sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if let Some(h) = headers {
        let _ = write_row(&mut buf, h, sep);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_fields_keep_separators_and_newlines() {
        let text = "a,\"b,c\",\"say \"\"hi\"\"\"\r\nx,\"multi\nline\",z\n";
        let rows = parse_rows(text, ',');
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["a", "b,c", "say \"hi\""]);
        assert_eq!(rows[1][1], "multi\nline");
    }

    #[test]
    fn blank_lines_and_bom_are_dropped() {
        let rows = parse_rows("\u{feff}h1\th2\n\n1\t2", '\t');
        assert_eq!(rows, vec![vec!["h1", "h2"], vec!["1", "2"]]);
    }

    #[test]
    fn empty_trailing_cells_survive() {
        let rows = parse_rows("a,,\n", ',');
        assert_eq!(rows, vec![vec!["a", "", ""]]);
    }

    #[test]
    fn write_row_quotes_only_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, &["plain", "has,comma", "has\"quote"], ',').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "plain,\"has,comma\",\"has\"\"quote\"\n");
    }

    #[test]
    fn delim_from_extension() {
        assert_eq!(Delim::from_path(Path::new("r.TSV")), Some(Delim::Tsv));
        assert_eq!(Delim::from_path(Path::new("r.csv")), Some(Delim::Csv));
        assert_eq!(Delim::from_path(Path::new("r")), None);
    }
}
